//! API 路由模块
//!
//! # 结构
//!
//! - [`reservations`] - 预订接口 (`/api/reservations`)
//! - [`admin`] - 管理员页面 (`/admin`)
//! - [`health`] - 健康检查 (`/health`)
//! - [`pages`] - 静态页面 (`/`, `/menu`, 其他静态资源)

pub mod admin;
pub mod health;
pub mod pages;
pub mod reservations;

use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware::logging_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all API routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(reservations::router())
        .merge(admin::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and the router tests
pub fn build_app(state: ServerState) -> Router {
    let static_dir = state.config.static_dir.clone();

    build_router()
        .merge(pages::router(&static_dir))
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // Request logging
        .layer(middleware::from_fn(logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // CORS - the website may be served from another origin
        .layer(CorsLayer::permissive())
}
