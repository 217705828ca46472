//! 工具模块
//!
//! - [`logger`] - 日志初始化
//! - [`html`] - HTML 转义
//! - [`time`] - 日期/时间显示格式

pub mod html;
pub mod logger;
pub mod time;
