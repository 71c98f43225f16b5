//! 基于 chromiumoxide 的会话实现

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use serde_json::Value as JsonValue;
use tokio::time::{sleep, timeout as with_timeout};
use tracing::debug;

use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::session::{PageSession, SessionFactory};

/// 轮询元素是否出现的间隔
const ELEMENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 一个 chromiumoxide 标签页
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl PageSession for ChromePage {
    async fn goto(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }

    async fn evaluate(&self, script: &str) -> AppResult<JsonValue> {
        let result = self
            .page
            .evaluate(script.to_string())
            .await
            .map_err(|e| AppError::script_failed(script, e))?;
        Ok(result.value().cloned().unwrap_or(JsonValue::Null))
    }

    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> AppResult<bool> {
        let poll = async {
            loop {
                if self.page.find_element(selector).await.is_ok() {
                    return;
                }
                sleep(ELEMENT_POLL_INTERVAL).await;
            }
        };
        Ok(with_timeout(timeout, poll).await.is_ok())
    }

    async fn content(&self) -> AppResult<String> {
        self.page.content().await.map_err(|e| {
            AppError::Browser(BrowserError::ContentFailed {
                source: Box::new(e),
            })
        })
    }

    async fn close(&self) -> AppResult<()> {
        self.page.clone().close().await.map_err(|e| {
            AppError::Browser(BrowserError::PageCloseFailed {
                source: Box::new(e),
            })
        })
    }
}

/// 每次调用都在同一个浏览器进程中打开一个新标签页
#[derive(Clone)]
pub struct ChromeSessionFactory {
    browser: Arc<Browser>,
}

impl ChromeSessionFactory {
    pub fn new(browser: Arc<Browser>) -> Self {
        Self { browser }
    }
}

#[async_trait]
impl SessionFactory for ChromeSessionFactory {
    async fn open_session(&self) -> AppResult<Box<dyn PageSession>> {
        let page = self.browser.new_page("about:blank").await.map_err(|e| {
            AppError::Browser(BrowserError::PageCreationFailed {
                source: Box::new(e),
            })
        })?;
        Ok(Box::new(ChromePage::new(page)))
    }
}
