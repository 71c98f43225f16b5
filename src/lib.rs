//! # Filmography Crawler
//!
//! 一个用于抓取导演作品列表的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 浏览器会话抽象，只暴露能力
//! - `PageSession` / `SessionFactory` - 导航、执行 JS、等待元素、读取 HTML
//! - `JsExecutor` - 借用会话，提供滚动相关的 JS 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个页面
//! - `ListingResolver` - 导演列表页 → 电影链接
//! - `DetailScraper` - 电影详情页 → `Film`
//! - `FilmographyWriter` - 写 JSON 结果文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/crawler` - 批量导演处理，按输入顺序等待列表结果
//! - `orchestrator/director_processor` - 单个导演处理，按完成顺序收集详情
//! - `orchestrator/task_pool` - 有界任务池，每个任务独立会话
//!
//! ### ④ 应用层（App）
//! - `orchestrator/batch_processor` - 持有浏览器，负责启动、输出和关闭
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{JsExecutor, PageSession, SessionFactory};
pub use models::{DirectorFilmography, Film};
pub use orchestrator::{App, CrawlReport, CrawlStats, Crawler};
