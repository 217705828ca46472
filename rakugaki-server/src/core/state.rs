use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;

use crate::core::Config;
use crate::notification::{NotificationService, SmtpMailer};
use crate::services::ReservationService;
use crate::store::{InMemoryReservationStore, ReservationStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | reservations | ReservationService | 预订受理与查询 |
/// | started_at | Instant | 启动时间 (健康检查) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Arc<Config>,
    /// 预订服务 (存储 + 可选通知)
    pub reservations: ReservationService,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试中用于注入自定义存储或通知服务，
    /// 通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(
        config: Config,
        store: Arc<dyn ReservationStore>,
        notifications: Option<NotificationService>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            reservations: ReservationService::new(store, notifications),
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 内存预订存储
    /// 2. 若配置了邮箱凭据，构建 SMTP 发送器并启动通知 worker
    ///
    /// 返回 worker 的 JoinHandle (未启用通知时为 None)，关闭时由
    /// [`crate::Server`] 等待队列发送完毕。
    ///
    /// 必须在 Tokio runtime 内调用 (worker 通过 `tokio::spawn` 启动)
    pub fn initialize(config: &Config) -> (Self, Option<JoinHandle<()>>) {
        let store: Arc<dyn ReservationStore> = Arc::new(InMemoryReservationStore::new());

        let (notifications, worker) = match &config.email {
            Some(email) => match SmtpMailer::new(email) {
                Ok(mailer) => {
                    let (service, worker) = NotificationService::spawn(
                        Arc::new(mailer),
                        email.user.clone(),
                        config.notification_queue_size,
                    );
                    tracing::info!(
                        sender = %email.user,
                        smtp_host = %email.smtp_host,
                        "Email notifications enabled"
                    );
                    (Some(service), Some(worker))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to set up SMTP, email notifications disabled");
                    (None, None)
                }
            },
            None => {
                tracing::info!("EMAIL_USER/EMAIL_PASS not set, email notifications disabled");
                (None, None)
            }
        };

        (Self::new(config.clone(), store, notifications), worker)
    }
}
