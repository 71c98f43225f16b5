use crate::error::{AppResult, FileError};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 导演列表文件
///
/// ```toml
/// urls = [
///     "https://letterboxd.com/director/ingmar-bergman/",
///     "https://letterboxd.com/director/agnes-varda/",
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorList {
    #[serde(default)]
    pub urls: Vec<String>,
}

impl DirectorList {
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, FileError> {
        toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    }
}

/// 从 TOML 文件加载导演列表页链接
pub async fn load_director_urls(toml_file_path: &Path) -> AppResult<Vec<String>> {
    let path = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let list = DirectorList::from_toml_str(&content, &path)?;
    tracing::info!("从 {} 加载了 {} 个导演链接", path, list.urls.len());

    Ok(list
        .urls
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect())
}
