//! Server Implementation
//!
//! HTTP 服务器启动和优雅关闭
//!
//! 关闭顺序:
//! 1. 停止接收新连接，等待进行中的请求完成
//! 2. 丢弃路由 (连同 `ServerState` 中的通知队列发送端)
//! 3. 等待通知 worker 发完队列中剩余的邮件 (最多 30 秒)

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinHandle;

use crate::api::build_app;
use crate::core::{Config, ServerState};

const NOTIFICATION_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
    notification_worker: Option<JoinHandle<()>>,
}

impl Server {
    /// `notification_worker` 来自 [`ServerState::initialize`]
    pub fn new(
        config: Config,
        state: ServerState,
        notification_worker: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            config,
            state,
            notification_worker,
        }
    }

    /// 运行直到收到 Ctrl+C 或 SIGTERM
    pub async fn run(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// 运行直到 `shutdown` 完成
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Self {
            config,
            state,
            notification_worker,
        } = self;

        let app = build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
        let listener = TcpListener::bind(addr).await?;

        let port = listener.local_addr()?.port();
        tracing::info!("Rakugaki backend server running on port {}", port);
        tracing::info!("Frontend: http://localhost:{}", port);
        tracing::info!("Admin: http://localhost:{}/admin", port);
        tracing::info!("API: http://localhost:{}/api/reservations", port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");

        if let Some(worker) = notification_worker {
            drain_notifications(worker).await;
        }

        tracing::info!("Server shut down");
        Ok(())
    }
}

/// 等待 worker 退出 (队列发送端已全部丢弃)
async fn drain_notifications(worker: JoinHandle<()>) {
    tracing::info!("Waiting for queued notifications to be sent");

    match tokio::time::timeout(NOTIFICATION_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => tracing::info!("Notification queue drained"),
        Ok(Err(e)) => tracing::error!(error = %e, "Notification worker failed"),
        Err(_) => tracing::warn!(
            timeout_secs = NOTIFICATION_DRAIN_TIMEOUT.as_secs(),
            "Shutdown timeout reached, remaining notifications dropped"
        ),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
