use anyhow::Result;
use quiz_chain_solver::api;
use quiz_chain_solver::config::Config;
use quiz_chain_solver::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load();

    // 启动对外服务
    api::serve(config).await
}
