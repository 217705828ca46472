//! Data models
//!
//! Shared between rakugaki-server and the website frontend (via API).
//! JSON field names follow the frontend's camelCase convention.

pub mod reservation;

// Re-exports
pub use reservation::*;
