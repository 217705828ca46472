//! Reservation Store
//!
//! Holds every reservation accepted since process start and hands out
//! sequential identifiers. The store is injected into [`crate::ServerState`]
//! as `Arc<dyn ReservationStore>` so a durable backend can replace the
//! in-memory one without touching intake.

mod memory;

pub use memory::InMemoryReservationStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{Guests, Reservation};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A validated reservation that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: Guests,
    pub requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewReservation {
    pub fn into_reservation(self, id: u64) -> Reservation {
        Reservation {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            requests: self.requests,
            created_at: self.created_at,
        }
    }
}

/// Append-only reservation storage
///
/// `create` assigns the next id and appends the record as one step:
/// implementations must guarantee that concurrent calls never observe or
/// hand out the same id, and that `all` returns records in id order.
#[async_trait]
pub trait ReservationStore: Send + Sync + std::fmt::Debug {
    async fn create(&self, reservation: NewReservation) -> StoreResult<Reservation>;

    /// All records in creation order
    async fn all(&self) -> StoreResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Reservation>>;

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.all().await?.len())
    }
}
