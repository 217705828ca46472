//! Reservation API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reservations | GET, POST | 列表 / 提交 |
//! | /api/reservations/ | GET, POST | 同上 (尾斜杠) |
//! | /api/reservations/{id} | GET | 单个预订 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/reservations",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/reservations/",
            get(handler::list).post(handler::create),
        )
        .route("/api/reservations/{id}", get(handler::get_by_id))
}
