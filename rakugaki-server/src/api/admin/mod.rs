//! 管理员页面
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /admin | GET | 所有预订的 HTML 表格 |

use axum::{Router, extract::State, response::Html, routing::get};

use crate::core::{AppResult, ServerState};
use crate::views::render_admin_view;

pub fn router() -> Router<ServerState> {
    Router::new().route("/admin", get(admin_view))
}

async fn admin_view(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let reservations = state.reservations.list().await?;
    Ok(Html(render_admin_view(&reservations)))
}
