//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 应用入口
//! - 管理应用生命周期（初始化、运行、关闭浏览器）
//! - 写出结果文件和全局统计
//!
//! ### `crawler` - 批量导演抓取
//! - 为每位导演提交列表解析任务
//! - 按输入顺序等待链接，逐个交给 `director_processor`
//!
//! ### `director_processor` - 单个导演处理器
//! - 为每个电影链接提交详情任务
//! - 按完成顺序收集结果
//!
//! ### `task_pool` - 有界任务池
//! - Semaphore 限制并发
//! - 每个任务使用独立的浏览器会话
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (App)
//!     ↓
//! crawler (处理 Vec<导演>)
//!     ↓
//! director_processor (处理 Vec<电影链接>)
//!     ↓
//! services (能力层：列表解析 / 详情抓取 / 写文件)
//!     ↓
//! infrastructure (基础设施：PageSession / JsExecutor)
//! ```

pub mod batch_processor;
pub mod crawler;
pub mod director_processor;
pub mod task_pool;

// 重新导出主要类型
pub use batch_processor::App;
pub use crawler::{CrawlReport, CrawlStats, Crawler};
pub use director_processor::{process_director, DirectorCtx, DirectorOutcome};
pub use task_pool::TaskPool;
