use rakugaki_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env 并初始化日志
    setup_environment();

    tracing::info!("🍣 Rakugaki reservation server starting...");

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 初始化服务器状态 (内存存储 + 邮件通知 worker)
    let (state, notification_worker) = ServerState::initialize(&config);

    // 4. 启动 HTTP 服务器 (关闭时等待通知队列发送完毕)
    let server = Server::new(config, state, notification_worker);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
