//! 结果写入服务 - 业务能力层
//!
//! 只负责"把汇总结果写成 JSON 文件"能力

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppResult, FileError};
use crate::models::DirectorFilmography;

/// 结果写入服务
///
/// 输出为两空格缩进的 JSON，非 ASCII 字符原样保留
pub struct FilmographyWriter {
    output_path: PathBuf,
}

impl FilmographyWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入汇总结果，已存在的文件会被覆盖
    pub async fn write(&self, results: &DirectorFilmography) -> AppResult<()> {
        let json = render_json(results)?;
        debug!("写入 {} 字节到 {}", json.len(), self.output_path.display());

        fs::write(&self.output_path, json)
            .await
            .map_err(|source| FileError::WriteFailed {
                path: self.output_path.display().to_string(),
                source,
            })?;

        info!(
            "💾 已写入 {} 位导演、{} 部电影到 {}",
            results.len(),
            results.film_count(),
            self.output_path.display()
        );
        Ok(())
    }
}

/// 序列化为带缩进的 JSON 文本
pub fn render_json(results: &DirectorFilmography) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(results)?)
}
