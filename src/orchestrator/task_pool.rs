//! 有界任务池
//!
//! 所有列表解析和详情抓取任务共享同一个 Semaphore；
//! 每个任务从会话工厂打开自己的会话，结束后关闭（包括任务 panic 的情况）

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::{PageSession, SessionFactory};
use crate::models::Film;
use crate::services::{DetailScraper, ListingResolver};

/// 详情任务的结果：(电影链接, 抓取结果)
pub type DetailTaskOutput = (String, AppResult<Option<Film>>);

#[derive(Clone)]
pub struct TaskPool {
    factory: Arc<dyn SessionFactory>,
    semaphore: Arc<Semaphore>,
}

impl TaskPool {
    pub fn new(factory: Arc<dyn SessionFactory>, max_concurrent: usize) -> Self {
        Self {
            factory,
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// 提交一个列表解析任务
    pub fn spawn_listing(
        &self,
        resolver: ListingResolver,
        listing_url: String,
    ) -> JoinHandle<AppResult<Vec<String>>> {
        let pool = self.clone();
        tokio::spawn(async move { pool.run_listing(&resolver, &listing_url).await })
    }

    /// 提交一个详情抓取任务到 `tasks`
    pub fn spawn_detail(
        &self,
        tasks: &mut JoinSet<DetailTaskOutput>,
        scraper: DetailScraper,
        film_url: String,
    ) {
        let pool = self.clone();
        tasks.spawn(async move {
            let result = pool.run_detail(&scraper, &film_url).await;
            (film_url, result)
        });
    }

    async fn run_listing(&self, resolver: &ListingResolver, listing_url: &str) -> AppResult<Vec<String>> {
        let _permit = self.acquire().await?;
        let session = self.factory.open_session().await?;
        let result = AssertUnwindSafe(resolver.resolve(session.as_ref(), listing_url))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(panic_error(payload)));
        close_session(session.as_ref()).await;
        result
    }

    async fn run_detail(&self, scraper: &DetailScraper, film_url: &str) -> AppResult<Option<Film>> {
        let _permit = self.acquire().await?;
        let session = self.factory.open_session().await?;
        let result = AssertUnwindSafe(scraper.scrape(session.as_ref(), film_url))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(panic_error(payload)));
        close_session(session.as_ref()).await;
        result
    }

    async fn acquire(&self) -> AppResult<OwnedSemaphorePermit> {
        Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|e| AppError::Scheduling(e.to_string()))
    }
}

async fn close_session(session: &dyn PageSession) {
    if let Err(e) = session.close().await {
        debug!("关闭会话失败: {}", e);
    }
}

/// 把 panic 转成调度错误，会话仍由调用方关闭
fn panic_error(payload: Box<dyn Any + Send>) -> AppError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "未知原因".to_string());
    AppError::Scheduling(format!("任务 panic: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_error_keeps_message() {
        let err = panic_error(Box::new("页面脚本崩溃"));
        assert!(matches!(err, AppError::Scheduling(ref m) if m.contains("页面脚本崩溃")));

        let err = panic_error(Box::new(String::from("索引越界")));
        assert!(err.to_string().contains("索引越界"));
    }

    #[test]
    fn test_panic_error_with_opaque_payload() {
        let err = panic_error(Box::new(42_u8));
        assert!(err.to_string().contains("未知原因"));
    }
}
