//! 基础设施层
//!
//! 持有浏览器资源，只暴露页面操作能力

pub mod chrome_session;
pub mod js_executor;
pub mod session;

pub use chrome_session::{ChromePage, ChromeSessionFactory};
pub use js_executor::JsExecutor;
pub use session::{PageSession, SessionFactory};
