use std::time::Duration;

use crate::error::ConfigError;
use crate::models::director_key;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待抓取的导演作品列表页
    pub director_urls: Vec<String>,
    /// 导演列表 TOML 文件（设置后覆盖 director_urls）
    pub directors_file: Option<String>,
    /// 同时运行的任务数量
    pub max_concurrent_tasks: usize,
    /// 电影详情页链接的主机前缀
    pub film_host: String,
    /// 输出 JSON 文件
    pub output_file: String,
    /// 等待列表页挂载的超时（秒）
    pub listing_timeout_secs: u64,
    /// 等待详情页头部的超时（秒）
    pub detail_timeout_secs: u64,
    /// 每次滚动后的等待时间（毫秒）
    pub scroll_pause_ms: u64,
    /// 页面高度连续多少次不变后停止滚动
    pub scroll_stable_checks: usize,
    /// 最多滚动次数
    pub max_scroll_rounds: usize,
    /// 是否使用无头模式
    pub headless: bool,
    /// 浏览器可执行文件路径，为空时自动查找
    pub chrome_executable: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            director_urls: vec!["https://letterboxd.com/director/ingmar-bergman/".to_string()],
            directors_file: None,
            max_concurrent_tasks: default_pool_size(),
            film_host: "http://letterboxd.com".to_string(),
            output_file: "films.json".to_string(),
            listing_timeout_secs: 20,
            detail_timeout_secs: 20,
            scroll_pause_ms: 2000,
            scroll_stable_checks: 1,
            max_scroll_rounds: 200,
            headless: true,
            chrome_executable: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            director_urls: std::env::var("DIRECTOR_URLS").ok().map(|v| split_urls(&v)).unwrap_or(default.director_urls),
            directors_file: std::env::var("DIRECTORS_FILE").ok().or(default.directors_file),
            max_concurrent_tasks: std::env::var("MAX_CONCURRENT_TASKS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_tasks),
            film_host: std::env::var("FILM_HOST").unwrap_or(default.film_host),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            listing_timeout_secs: std::env::var("LISTING_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.listing_timeout_secs),
            detail_timeout_secs: std::env::var("DETAIL_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.detail_timeout_secs),
            scroll_pause_ms: std::env::var("SCROLL_PAUSE_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.scroll_pause_ms),
            scroll_stable_checks: std::env::var("SCROLL_STABLE_CHECKS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.scroll_stable_checks),
            max_scroll_rounds: std::env::var("MAX_SCROLL_ROUNDS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_scroll_rounds),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().or(default.chrome_executable),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 检查配置是否可以直接用于运行
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.director_urls.is_empty() {
            return Err(ConfigError::NoDirectorUrls);
        }
        if self.max_concurrent_tasks == 0 {
            return Err(ConfigError::ZeroValue { name: "max_concurrent_tasks" });
        }
        if self.scroll_stable_checks == 0 {
            return Err(ConfigError::ZeroValue { name: "scroll_stable_checks" });
        }
        for url in &self.director_urls {
            director_key(url)?;
        }
        Ok(())
    }

    pub fn listing_timeout(&self) -> Duration {
        Duration::from_secs(self.listing_timeout_secs)
    }

    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }

    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }
}

/// 与线程池默认大小一致：min(32, CPU 数 + 4)
fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() + 4)
        .unwrap_or(5)
        .min(32)
}

fn split_urls(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
