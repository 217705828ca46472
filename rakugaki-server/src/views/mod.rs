//! HTML 渲染
//!
//! - [`admin`] - 管理员预订列表页面

pub mod admin;

pub use admin::render_admin_view;
