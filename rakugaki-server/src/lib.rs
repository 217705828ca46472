//! Rakugaki Reservation Server - 餐厅网站预订后端
//!
//! # 架构概述
//!
//! 网站预订表单提交到本服务，服务校验必填字段、分配递增 ID、
//! 写入内存存储，并在配置了邮箱凭据时异步发送确认邮件。
//!
//! - **存储** (`store`): 进程内的预订记录 + ID 生成器
//! - **预订服务** (`services`): 校验、写入、触发通知
//! - **通知** (`notification`): mpsc 通道 + 后台 worker 发送邮件
//! - **HTTP API** (`api`): 预订接口、管理页面、静态页面
//!
//! # 模块结构
//!
//! ```text
//! rakugaki-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 预订存储
//! ├── services/      # 预订受理
//! ├── notification/  # 邮件通知
//! ├── views/         # HTML 渲染
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志、HTML 转义、时间格式
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod notification;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use core::{AppError, AppResult, Config, Server, ServerState};
pub use notification::{Mailer, NotificationService, NotificationWorker};
pub use services::ReservationService;
pub use store::{InMemoryReservationStore, ReservationStore};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 1. 加载 `.env` (可选)
/// 2. 初始化日志 (`LOG_LEVEL`, `LOG_DIR`)
pub fn setup_environment() {
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
