//! 浏览器会话抽象
//!
//! 抓取流程只依赖这两个 trait，真实浏览器和测试中的脚本化页面都实现它们

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::AppResult;

/// 单个浏览器会话（一个独立的标签页）
///
/// 每个任务持有自己的会话，会话之间不共享页面状态
#[async_trait]
pub trait PageSession: Send + Sync {
    /// 导航到指定 URL
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 执行 JS 表达式，没有返回值时得到 `Null`
    async fn evaluate(&self, script: &str) -> AppResult<JsonValue>;

    /// 在超时前等待选择器匹配的元素出现
    ///
    /// 超时返回 `Ok(false)`，不视为错误
    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> AppResult<bool>;

    /// 获取当前渲染完成的完整 HTML
    async fn content(&self) -> AppResult<String>;

    /// 关闭会话
    async fn close(&self) -> AppResult<()>;
}

/// 会话工厂：为每个任务打开一个新会话
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open_session(&self) -> AppResult<Box<dyn PageSession>>;
}
