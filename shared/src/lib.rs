//! Shared types for the Rakugaki reservation service
//!
//! Wire types used by the server and by anything that talks to its HTTP API:
//! reservation records, submission payloads and response bodies.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Guests, Reservation, ReservationSubmission};
pub use response::{ErrorBody, ReservationCreated};
pub use serde::{Deserialize, Serialize};
