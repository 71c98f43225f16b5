/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::orchestrator::CrawlStats;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；未设置时默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `director_count`: 导演数量
/// - `max_concurrent`: 最大并发数
pub fn log_startup(director_count: usize, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 导演作品抓取");
    info!("🎬 导演数量: {}", director_count);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录导演开始处理
pub fn log_director_start(prefix: &str, listing_url: &str, film_count: usize) {
    info!("\n{} {}", prefix, "─".repeat(30));
    info!("{} 列表页: {}", prefix, listing_url);
    info!("{} 找到 {} 部电影，开始抓取详情", prefix, film_count);
}

/// 记录导演处理完成
pub fn log_director_complete(prefix: &str, scraped: usize, empty: usize, failed: usize) {
    info!(
        "{} 电影统计: 成功 {}, 空记录 {}, 失败 {}",
        prefix, scraped, empty, failed
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 抓取统计
/// - `output_file`: 输出文件路径
pub fn print_final_stats(stats: &CrawlStats, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "🎬 导演: 成功 {}/{}, 跳过 {}",
        stats.directors_resolved, stats.directors_total, stats.directors_skipped
    );
    info!("✅ 电影: {}", stats.films_scraped);
    info!("⚠️ 空记录: {}", stats.empty_records);
    info!("❌ 失败: {}", stats.failed_films);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_file);
}
