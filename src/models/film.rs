use serde::{Deserialize, Serialize};

/// 单部电影的基本信息
///
/// 三个字段总是会被序列化，没有原名时 `original_name` 输出为 `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub name: String,
    pub release_date: String,
    pub original_name: Option<String>,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        release_date: impl Into<String>,
        original_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            release_date: release_date.into(),
            original_name,
        }
    }
}
