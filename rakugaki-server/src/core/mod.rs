//! 核心模块 - 服务器配置、状态和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 服务器配置
//! - [`ServerState`] - 服务器状态
//! - [`Server`] - HTTP 服务器
//! - [`AppError`] - 应用错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, EmailConfig};
pub use error::{AppError, AppResult};
pub use server::Server;
pub use state::ServerState;
