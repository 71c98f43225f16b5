//! 批量导演抓取 - 编排层
//!
//! 先为每位导演提交列表解析任务，再按输入顺序等待结果；
//! 每位导演的链接就绪后立即提交详情任务并收集

use std::sync::Arc;

use tracing::error;

use crate::config::Config;
use crate::infrastructure::SessionFactory;
use crate::models::{director_key, DirectorFilmography};
use crate::orchestrator::director_processor::{process_director, DirectorCtx};
use crate::orchestrator::task_pool::TaskPool;
use crate::services::{DetailScraper, ListingResolver};
use crate::utils::logging;

/// 抓取统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    pub directors_total: usize,
    pub directors_resolved: usize,
    pub directors_skipped: usize,
    pub films_scraped: usize,
    pub empty_records: usize,
    pub failed_films: usize,
}

/// 一次完整运行的结果
#[derive(Debug, Default)]
pub struct CrawlReport {
    pub results: DirectorFilmography,
    pub stats: CrawlStats,
}

/// 批量导演抓取器
pub struct Crawler {
    pool: TaskPool,
    resolver: ListingResolver,
    scraper: DetailScraper,
}

impl Crawler {
    pub fn new(
        factory: Arc<dyn SessionFactory>,
        resolver: ListingResolver,
        scraper: DetailScraper,
        max_concurrent: usize,
    ) -> Self {
        Self {
            pool: TaskPool::new(factory, max_concurrent),
            resolver,
            scraper,
        }
    }

    pub fn from_config(factory: Arc<dyn SessionFactory>, config: &Config) -> Self {
        Self::new(
            factory,
            ListingResolver::from_config(config),
            DetailScraper::from_config(config),
            config.max_concurrent_tasks,
        )
    }

    /// 抓取所有导演
    ///
    /// 单个导演或单部电影的失败只记录日志，不会中断整体运行
    pub async fn crawl(&self, director_urls: &[String]) -> CrawlReport {
        let mut report = CrawlReport::default();
        report.stats.directors_total = director_urls.len();

        // 提交所有列表解析任务
        let mut pending = Vec::with_capacity(director_urls.len());
        for (idx, url) in director_urls.iter().enumerate() {
            let key = match director_key(url) {
                Ok(key) => key,
                Err(e) => {
                    error!("[导演 #{}] ❌ 无法提交任务: {}", idx + 1, e);
                    report.stats.directors_skipped += 1;
                    continue;
                }
            };
            let ctx = DirectorCtx::new(key, idx + 1, url.clone());
            let handle = self.pool.spawn_listing(self.resolver.clone(), url.clone());
            pending.push((ctx, handle));
        }

        // 按输入顺序等待
        for (ctx, handle) in pending {
            let film_links = match handle.await {
                Ok(Ok(links)) => links,
                Ok(Err(e)) => {
                    error!("{} ❌ 获取电影链接失败: {}", ctx, e);
                    report.stats.directors_skipped += 1;
                    continue;
                }
                Err(e) => {
                    error!("{} ❌ 任务执行失败: {}", ctx, e);
                    report.stats.directors_skipped += 1;
                    continue;
                }
            };

            logging::log_director_start(&ctx.to_string(), &ctx.listing_url, film_links.len());
            report.results.register(&ctx.key);

            let outcome = process_director(&self.pool, &self.scraper, &ctx, film_links).await;
            logging::log_director_complete(
                &ctx.to_string(),
                outcome.films.len(),
                outcome.empty,
                outcome.failed,
            );

            report.stats.directors_resolved += 1;
            report.stats.films_scraped += outcome.films.len();
            report.stats.empty_records += outcome.empty;
            report.stats.failed_films += outcome.failed;
            report.results.register(&ctx.key).extend(outcome.films);
        }

        report
    }
}
