use store_server::core::{AppState, Config};
use store_server::init_logger_with_file;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境与日志
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("Gadget storefront core starting...");

    // 2. 初始化服务状态 (目录、数据库、服务)
    let state = AppState::initialize(&config).await?;

    tracing::info!(
        work_dir = %state.config.work_dir,
        environment = %state.config.environment,
        "storefront core ready; waiting for shutdown signal"
    );

    // HTTP 层在本 crate 之外挂载; 进程保持运行直至收到信号
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received, exiting");

    Ok(())
}
