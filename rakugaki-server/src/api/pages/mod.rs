//! 静态页面
//!
//! | 路径 | 文件 |
//! |------|------|
//! | / | `{STATIC_DIR}/index.html` |
//! | /menu | `{STATIC_DIR}/menu.html` |
//! | 其他 | `{STATIC_DIR}` 下的同名文件 (css/js/图片) |

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::ServerState;

pub fn router(static_dir: &Path) -> Router<ServerState> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/menu", ServeFile::new(static_dir.join("menu.html")))
        .fallback_service(ServeDir::new(static_dir))
}
