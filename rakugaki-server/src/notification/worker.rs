//! 通知后台 Worker
//!
//! 从 mpsc 通道消费新预订，依次发送顾客确认邮件和餐厅提醒邮件。
//! 通道关闭时自动退出。

use std::sync::Arc;

use shared::Reservation;
use tokio::sync::mpsc;

use super::templates::{confirmation_email, operator_email};
use super::{Mailer, NotificationError};

/// 单次派发结果 (两封邮件各自独立)
#[derive(Debug)]
pub struct DispatchReport {
    pub confirmation: Result<(), NotificationError>,
    pub operator: Result<(), NotificationError>,
}

/// 通知后台 Worker
pub struct NotificationWorker {
    mailer: Arc<dyn Mailer>,
    sender: String,
}

impl NotificationWorker {
    /// `sender` — 发件地址，同时接收餐厅提醒邮件
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
        }
    }

    /// 运行 worker（阻塞直到通道关闭）
    pub async fn run(self, mut rx: mpsc::Receiver<Reservation>) {
        tracing::info!("📧 Notification worker started");

        while let Some(reservation) = rx.recv().await {
            self.dispatch(&reservation).await;
        }

        tracing::info!("Notification channel closed, worker stopping");
    }

    /// 发送一条预订的两封邮件：先顾客，后餐厅
    ///
    /// 失败只记录日志，不重试
    pub async fn dispatch(&self, reservation: &Reservation) -> DispatchReport {
        let confirmation = self
            .mailer
            .send(confirmation_email(&self.sender, reservation))
            .await;
        match &confirmation {
            Ok(()) => tracing::debug!(
                reservation_id = reservation.id,
                "Confirmation email sent"
            ),
            Err(e) => tracing::error!(
                reservation_id = reservation.id,
                error = %e,
                "Failed to send confirmation email"
            ),
        }

        let operator = self
            .mailer
            .send(operator_email(&self.sender, reservation))
            .await;
        match &operator {
            Ok(()) => tracing::debug!(
                reservation_id = reservation.id,
                "Operator notification sent"
            ),
            Err(e) => tracing::error!(
                reservation_id = reservation.id,
                error = %e,
                "Failed to send operator notification"
            ),
        }

        DispatchReport {
            confirmation,
            operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::OutgoingEmail;
    use crate::notification::templates::{CONFIRMATION_SUBJECT, OPERATOR_SUBJECT};
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use shared::Guests;

    /// Records every attempt; fails the attempts whose index is listed
    #[derive(Default)]
    struct ScriptedMailer {
        attempts: Mutex<Vec<OutgoingEmail>>,
        fail_on: Vec<usize>,
    }

    #[async_trait]
    impl Mailer for ScriptedMailer {
        async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
            let mut attempts = self.attempts.lock();
            let index = attempts.len();
            attempts.push(email);
            if self.fail_on.contains(&index) {
                return Err(NotificationError::Transport("connection refused".into()));
            }
            Ok(())
        }
    }

    fn reservation(id: u64) -> Reservation {
        Reservation {
            id,
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
            phone: "090-1234-5678".to_string(),
            date: "2099-01-01".to_string(),
            time: "18:00".to_string(),
            guests: Guests::from(2u64),
            requests: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_guest_then_operator() {
        let mailer = Arc::new(ScriptedMailer::default());
        let worker = NotificationWorker::new(mailer.clone(), "info@rakugaki.com");

        let report = worker.dispatch(&reservation(1)).await;
        assert!(report.confirmation.is_ok());
        assert!(report.operator.is_ok());

        let attempts = mailer.attempts.lock();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].subject, CONFIRMATION_SUBJECT);
        assert_eq!(attempts[0].to, "taro@example.com");
        assert_eq!(attempts[1].subject, OPERATOR_SUBJECT);
        assert_eq!(attempts[1].to, "info@rakugaki.com");
    }

    #[tokio::test]
    async fn test_operator_email_still_attempted_after_guest_failure() {
        let mailer = Arc::new(ScriptedMailer {
            fail_on: vec![0],
            ..Default::default()
        });
        let worker = NotificationWorker::new(mailer.clone(), "info@rakugaki.com");

        let report = worker.dispatch(&reservation(1)).await;
        assert!(matches!(
            report.confirmation,
            Err(NotificationError::Transport(_))
        ));
        assert!(report.operator.is_ok());
        assert_eq!(mailer.attempts.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_run_drains_queue_and_stops_when_closed() {
        let mailer = Arc::new(ScriptedMailer {
            fail_on: vec![1, 2],
            ..Default::default()
        });
        let worker = NotificationWorker::new(mailer.clone(), "info@rakugaki.com");
        let (tx, rx) = mpsc::channel(8);

        tx.send(reservation(1)).await.unwrap();
        tx.send(reservation(2)).await.unwrap();
        drop(tx);

        worker.run(rx).await;

        let attempts = mailer.attempts.lock();
        assert_eq!(attempts.len(), 4);
        assert!(attempts[2].html_body.contains("Taro"));
    }
}
