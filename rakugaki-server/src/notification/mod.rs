//! 邮件通知模块 — 预订成功后的尽力而为通知
//!
//! # 架构
//!
//! ```text
//! ReservationService::submit()
//!   └─ NotificationService::notify() → mpsc → NotificationWorker
//!        ├─ 1. 顾客确认邮件 (Reservation Confirmation)
//!        └─ 2. 餐厅提醒邮件 (New Reservation)
//! ```
//!
//! - 入队不等待发送结果，预订接口的响应与邮件无关
//! - 两封邮件相互独立：第一封失败仍会尝试第二封
//! - 失败只记录日志，不重试

pub mod mailer;
pub mod service;
pub mod templates;
pub mod worker;

pub use mailer::{Mailer, OutgoingEmail, SmtpMailer};
pub use service::NotificationService;
pub use worker::NotificationWorker;

use thiserror::Error;

/// 通知错误
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid email address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("Notification queue is full")]
    QueueFull,

    #[error("Notification worker has stopped")]
    QueueClosed,
}
