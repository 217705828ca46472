//! In-memory reservation store
//!
//! Contents live for the lifetime of the process and are lost on restart.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::Reservation;

use super::{NewReservation, ReservationStore, StoreResult};

/// Id counter and records, always mutated together under one lock
#[derive(Debug, Default)]
struct Ledger {
    last_id: u64,
    records: Vec<Reservation>,
}

impl Ledger {
    /// Returns the next identifier and advances the counter (first id is 1)
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn append(&mut self, record: Reservation) {
        self.records.push(record);
    }

    fn find_by_id(&self, id: u64) -> Option<&Reservation> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Process-memory [`ReservationStore`]
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    ledger: Mutex<Ledger>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn create(&self, reservation: NewReservation) -> StoreResult<Reservation> {
        let mut ledger = self.ledger.lock();
        let id = ledger.next_id();
        let record = reservation.into_reservation(id);
        ledger.append(record.clone());
        Ok(record)
    }

    async fn all(&self) -> StoreResult<Vec<Reservation>> {
        Ok(self.ledger.lock().records.clone())
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Reservation>> {
        Ok(self.ledger.lock().find_by_id(id).cloned())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.ledger.lock().records.len())
    }
}
