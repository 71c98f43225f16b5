//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、加载导演列表、启动浏览器
//! 2. **批量抓取**：委托 `Crawler` 处理所有导演
//! 3. **结果输出**：写入 JSON 文件并输出全局统计
//! 4. **资源管理**：唯一持有 Browser 的模块，运行结束后无条件关闭

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::ChromeSessionFactory;
use crate::models::load_director_urls;
use crate::orchestrator::crawler::Crawler;
use crate::services::FilmographyWriter;
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    browser: Arc<Browser>,
    handler: JoinHandle<()>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(mut config: Config) -> Result<Self> {
        if let Some(file) = config.directors_file.clone() {
            info!("📁 正在加载导演列表: {}", file);
            config.director_urls = load_director_urls(Path::new(&file))
                .await
                .with_context(|| format!("无法加载导演列表: {}", file))?;
        }
        config.validate().context("配置校验失败")?;

        logging::log_startup(config.director_urls.len(), config.max_concurrent_tasks);

        let (browser, handler) = browser::launch_headless_browser(&config).await?;

        Ok(Self {
            config,
            browser: Arc::new(browser),
            handler,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let factory = Arc::new(ChromeSessionFactory::new(Arc::clone(&self.browser)));
        let crawler = Crawler::from_config(factory, &self.config);

        let report = crawler.crawl(&self.config.director_urls).await;

        FilmographyWriter::with_path(&self.config.output_file)
            .write(&report.results)
            .await
            .with_context(|| format!("无法写入结果文件: {}", self.config.output_file))?;

        logging::print_final_stats(&report.stats, &self.config.output_file);
        Ok(())
    }

    /// 关闭浏览器
    pub async fn shutdown(self) {
        info!("🧹 正在关闭浏览器...");
        match Arc::try_unwrap(self.browser) {
            Ok(mut browser) => {
                if let Err(e) = browser.close().await {
                    warn!("关闭浏览器失败: {}", e);
                }
                if let Err(e) = browser.wait().await {
                    warn!("等待浏览器进程退出失败: {}", e);
                }
            }
            Err(_) => warn!("浏览器仍被其他任务引用，交由析构释放"),
        }
        self.handler.abort();
    }
}
