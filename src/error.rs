use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 页面解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 任务调度错误
    #[error("任务调度失败: {0}")]
    Scheduling(String),
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {message}")]
    ConfigurationFailed { message: String },
    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行脚本失败
    #[error("执行脚本失败 ({script}): {source}")]
    ScriptExecutionFailed {
        script: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 关闭页面失败
    #[error("关闭页面失败: {source}")]
    PageCloseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 读取页面内容失败
    #[error("读取页面内容失败: {source}")]
    ContentFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 页面解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// CSS 选择器无效
    #[error("无效的选择器 '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
    /// 页面已加载但缺少必需的元素
    #[error("页面缺少元素 '{selector}'")]
    MissingElement { selector: String },
    /// 脚本返回了意外的值
    #[error("脚本 '{script}' 返回了意外的值: {value}")]
    UnexpectedScriptValue {
        script: String,
        value: serde_json::Value,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 没有任何导演链接
    #[error("未配置任何导演链接")]
    NoDirectorUrls,
    /// 数值必须大于零
    #[error("{name} 必须大于 0")]
    ZeroValue { name: &'static str },
    /// 导演链接无效
    #[error("无效的导演链接 '{url}': {reason}")]
    InvalidDirectorUrl { url: String, reason: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建导航错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: source.into(),
        })
    }

    /// 创建脚本执行错误
    pub fn script_failed(
        script: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Browser(BrowserError::ScriptExecutionFailed {
            script: script.into(),
            source: source.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
