//! API Response types
//!
//! Bodies returned by the reservation endpoints. The shapes are fixed by the
//! website's `script.js`, which reads `reservationId` and `error` directly.

use serde::{Deserialize, Serialize};

use crate::models::Reservation;

/// Message sent with every successful intake
pub const RESERVATION_CREATED_MESSAGE: &str = "Reservation created successfully";

/// `201 Created` body for `POST /api/reservations`
///
/// ```json
/// {
///     "message": "Reservation created successfully",
///     "reservationId": 1,
///     "reservation": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreated {
    pub message: String,
    pub reservation_id: u64,
    pub reservation: Reservation,
}

impl ReservationCreated {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            message: RESERVATION_CREATED_MESSAGE.to_string(),
            reservation_id: reservation.id,
            reservation,
        }
    }
}

/// Error body: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
