use anyhow::Result;
use filmography_crawler::utils::logging;
use filmography_crawler::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用，无论成败都关闭浏览器
    let app = App::initialize(config).await?;
    let outcome = app.run().await;
    app.shutdown().await;

    outcome
}
