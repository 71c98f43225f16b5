//! 单个导演处理器 - 编排层
//!
//! ## 职责
//!
//! 为一位导演的全部电影链接提交详情抓取任务，
//! 按完成顺序收集结果，并统计成功 / 空记录 / 失败数量

use std::fmt::Display;

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::models::Film;
use crate::orchestrator::task_pool::{DetailTaskOutput, TaskPool};
use crate::services::DetailScraper;

/// 导演处理上下文
///
/// 封装"我正在处理第几位导演"这一信息
#[derive(Debug, Clone)]
pub struct DirectorCtx {
    /// 导演标识（列表页链接的最后一段）
    pub key: String,

    /// 导演在输入中的序号（从 1 开始，仅用于日志显示）
    pub index: usize,

    /// 导演列表页链接
    pub listing_url: String,
}

impl DirectorCtx {
    pub fn new(key: String, index: usize, listing_url: String) -> Self {
        Self {
            key,
            index,
            listing_url,
        }
    }
}

impl Display for DirectorCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[导演 #{} {}]", self.index, self.key)
    }
}

/// 单个导演的抓取结果
#[derive(Debug, Default)]
pub struct DirectorOutcome {
    /// 按完成顺序排列的电影
    pub films: Vec<Film>,
    /// 超时或没有头部的空记录
    pub empty: usize,
    /// 失败的任务
    pub failed: usize,
}

/// 处理单个导演的全部电影
///
/// # 参数
/// - `pool`: 共享任务池
/// - `scraper`: 详情抓取服务
/// - `ctx`: 导演上下文
/// - `film_links`: 该导演的电影详情页链接
pub async fn process_director(
    pool: &TaskPool,
    scraper: &DetailScraper,
    ctx: &DirectorCtx,
    film_links: Vec<String>,
) -> DirectorOutcome {
    let mut tasks: JoinSet<DetailTaskOutput> = JoinSet::new();
    for link in film_links {
        pool.spawn_detail(&mut tasks, scraper.clone(), link);
    }

    let mut outcome = DirectorOutcome::default();

    // 按完成顺序收集
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(Some(film)))) => {
                info!("{} ✓ {} ({})", ctx, film.name, film.release_date);
                outcome.films.push(film);
            }
            Ok((film_url, Ok(None))) => {
                warn!("{} ⚠️ 电影详情为空: {}", ctx, film_url);
                outcome.empty += 1;
            }
            Ok((film_url, Err(e))) => {
                error!("{} ❌ 抓取电影详情失败 {}: {}", ctx, film_url, e);
                outcome.failed += 1;
            }
            Err(e) => {
                error!("{} ❌ 任务执行失败: {}", ctx, e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}
