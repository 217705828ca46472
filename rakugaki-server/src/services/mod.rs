//! 业务服务
//!
//! - [`ReservationService`] - 预订受理 (校验 → 写入 → 通知) 与查询

pub mod intake;

pub use intake::{ReservationService, validate_submission};
