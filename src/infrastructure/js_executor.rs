//! JS 执行器 - 基础设施层
//!
//! 借用一个会话，只暴露"执行 JS"以及滚动相关的能力

use serde_json::Value as JsonValue;

use crate::error::{AppResult, ParseError};
use crate::infrastructure::session::PageSession;

/// 读取页面可滚动高度
pub const SCROLL_HEIGHT_JS: &str = "document.body.scrollHeight";

/// 滚动到页面底部
pub const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight)";

/// JS 执行器
///
/// 职责：
/// - 借用某个任务自己的会话
/// - 暴露 eval() 能力
/// - 不认识导演 / 电影
pub struct JsExecutor<'a> {
    session: &'a dyn PageSession,
}

impl<'a> JsExecutor<'a> {
    /// 创建新的 JS 执行器
    pub fn new(session: &'a dyn PageSession) -> Self {
        Self { session }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: &str) -> AppResult<JsonValue> {
        self.session.evaluate(js_code).await
    }

    /// 当前页面的可滚动高度
    pub async fn scroll_height(&self) -> AppResult<u64> {
        let value = self.eval(SCROLL_HEIGHT_JS).await?;
        let height = value
            .as_u64()
            .or_else(|| value.as_f64().filter(|h| *h >= 0.0).map(|h| h as u64));
        height.ok_or_else(|| {
            ParseError::UnexpectedScriptValue {
                script: SCROLL_HEIGHT_JS.to_string(),
                value,
            }
            .into()
        })
    }

    /// 滚动到底部
    pub async fn scroll_to_bottom(&self) -> AppResult<()> {
        self.eval(SCROLL_TO_BOTTOM_JS).await?;
        Ok(())
    }
}
