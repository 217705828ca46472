//! 通知服务
//!
//! `NotificationService` 只负责入队；发送由 [`super::NotificationWorker`] 完成。

use std::sync::Arc;

use shared::Reservation;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use super::{Mailer, NotificationError, NotificationWorker};

/// 通知服务 (可廉价克隆，所有克隆共享同一个队列)
#[derive(Debug, Clone)]
pub struct NotificationService {
    tx: mpsc::Sender<Reservation>,
}

impl NotificationService {
    /// 创建通知服务
    ///
    /// 返回的 Receiver 交给 [`NotificationWorker::run`]
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<Reservation>) {
        let (tx, rx) = mpsc::channel(buffer_size);
        (Self { tx }, rx)
    }

    /// 创建通知服务并在当前 Tokio runtime 上启动 worker
    ///
    /// worker 在所有 `NotificationService` 克隆被丢弃后退出
    pub fn spawn(
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
        buffer_size: usize,
    ) -> (Self, JoinHandle<()>) {
        let (service, rx) = Self::new(buffer_size);
        let worker = NotificationWorker::new(mailer, sender);
        let handle = tokio::spawn(worker.run(rx));
        (service, handle)
    }

    /// 入队一条新预订通知，不等待发送
    pub fn notify(&self, reservation: Reservation) -> Result<(), NotificationError> {
        self.tx.try_send(reservation).map_err(|e| match e {
            TrySendError::Full(_) => NotificationError::QueueFull,
            TrySendError::Closed(_) => NotificationError::QueueClosed,
        })
    }
}
