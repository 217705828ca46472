//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "service": "rakugaki-server",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "reservations": 3,
//!   "notifications_enabled": false
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::{AppResult, ServerState};

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 当前内存中的预订数
    reservations: usize,
    notifications_enabled: bool,
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        reservations: state.reservations.count().await?,
        notifications_enabled: state.reservations.notifications_enabled(),
    }))
}
