//! Reservation intake
//!
//! One submission goes through presence validation, gets an id from the
//! store, and is queued for notification. Notification problems are logged
//! here and never change the outcome of `submit`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::models::reservation::PHONE_NOT_PROVIDED;
use shared::{Guests, Reservation, ReservationSubmission};

use crate::core::{AppError, AppResult};
use crate::notification::NotificationService;
use crate::store::{NewReservation, ReservationStore};

/// Required fields, in the order they are reported when missing
const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "date", "time", "guests"];

#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
    notifications: Option<NotificationService>,
}

impl ReservationService {
    /// `notifications` is `None` when email credentials are not configured
    pub fn new(
        store: Arc<dyn ReservationStore>,
        notifications: Option<NotificationService>,
    ) -> Self {
        Self {
            store,
            notifications,
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications.is_some()
    }

    /// Validate, store and notify for one submission
    pub async fn submit(&self, submission: ReservationSubmission) -> AppResult<Reservation> {
        let draft = validate_submission(submission, Utc::now()).inspect_err(|e| {
            tracing::warn!(error = %e, "Reservation rejected");
        })?;

        let reservation = self.store.create(draft).await?;
        tracing::info!(
            reservation_id = reservation.id,
            date = %reservation.date,
            time = %reservation.time,
            guests = %reservation.guests,
            "Reservation created"
        );

        if let Some(notifications) = &self.notifications
            && let Err(e) = notifications.notify(reservation.clone())
        {
            tracing::warn!(
                reservation_id = reservation.id,
                error = %e,
                "Reservation notification dropped"
            );
        }

        Ok(reservation)
    }

    /// All reservations in creation order
    pub async fn list(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.store.all().await?)
    }

    pub async fn get(&self, id: u64) -> AppResult<Reservation> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.store.count().await?)
    }
}

/// Check required fields and fill in the phone sentinel
///
/// A field is missing when absent, `null`, `""` or (for guests) `0`.
/// Whitespace counts as given. All missing fields are reported in one error.
pub fn validate_submission(
    submission: ReservationSubmission,
    created_at: DateTime<Utc>,
) -> AppResult<NewReservation> {
    let ReservationSubmission {
        name,
        email,
        phone,
        date,
        time,
        guests,
        requests,
    } = submission;

    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
    let checks = [
        present(&name),
        present(&email),
        present(&date),
        present(&time),
        guests.as_ref().is_some_and(|g| !g.is_blank()),
    ];

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .zip(checks)
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    // presence checked above
    Ok(NewReservation {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
        date: date.unwrap_or_default(),
        time: time.unwrap_or_default(),
        guests: guests.unwrap_or(Guests::Text(String::new())),
        requests: requests.filter(|r| !r.is_empty()),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryReservationStore;

    fn taro() -> ReservationSubmission {
        ReservationSubmission {
            name: Some("Taro".to_string()),
            email: Some("taro@example.com".to_string()),
            date: Some("2099-01-01".to_string()),
            time: Some("18:00".to_string()),
            guests: Some(Guests::from(2u64)),
            ..Default::default()
        }
    }

    fn service() -> ReservationService {
        ReservationService::new(Arc::new(InMemoryReservationStore::new()), None)
    }

    #[test]
    fn test_optional_fields_get_sentinels() {
        let draft = validate_submission(taro(), Utc::now()).unwrap();
        assert_eq!(draft.phone, "Not provided");
        assert_eq!(draft.requests, None);
        assert_eq!(draft.guests, Guests::from(2u64));
    }

    #[test]
    fn test_empty_optional_fields_get_sentinels() {
        let mut sub = taro();
        sub.phone = Some(String::new());
        sub.requests = Some(String::new());
        let draft = validate_submission(sub, Utc::now()).unwrap();
        assert_eq!(draft.phone, "Not provided");
        assert_eq!(draft.requests, None);
    }

    #[test]
    fn test_whitespace_values_are_kept_as_given() {
        let mut sub = taro();
        sub.name = Some("  ".to_string());
        sub.phone = Some("   ".to_string());
        sub.requests = Some(" ".to_string());
        sub.guests = Some(Guests::Text(" ".to_string()));
        let draft = validate_submission(sub, Utc::now()).unwrap();
        assert_eq!(draft.name, "  ");
        assert_eq!(draft.phone, "   ");
        assert_eq!(draft.requests.as_deref(), Some(" "));
        assert_eq!(draft.guests, Guests::Text(" ".to_string()));
    }

    #[test]
    fn test_given_optional_fields_are_kept() {
        let mut sub = taro();
        sub.phone = Some("090-1234-5678".to_string());
        sub.requests = Some("Window seat".to_string());
        let draft = validate_submission(sub, Utc::now()).unwrap();
        assert_eq!(draft.phone, "090-1234-5678");
        assert_eq!(draft.requests.as_deref(), Some("Window seat"));
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let strip: [fn(&mut ReservationSubmission); 5] = [
            |s| s.name = None,
            |s| s.email = Some(String::new()),
            |s| s.date = None,
            |s| s.time = Some(String::new()),
            |s| s.guests = Some(Guests::from(0u64)),
        ];

        for (field, strip) in REQUIRED_FIELDS.iter().zip(strip) {
            let mut sub = taro();
            strip(&mut sub);
            let err = validate_submission(sub, Utc::now()).unwrap_err();
            assert!(
                matches!(&err, AppError::Validation(msg) if msg.ends_with(field)),
                "expected {field} to be reported, got {err}"
            );
        }
    }

    #[test]
    fn test_all_missing_fields_are_listed() {
        let err = validate_submission(ReservationSubmission::default(), Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: name, email, date, time, guests"
        );
    }

    #[tokio::test]
    async fn test_submit_assigns_sequential_ids() {
        let service = service();
        let first = service.submit(taro()).await.unwrap();
        let second = service.submit(taro()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!service.notifications_enabled());
    }

    #[tokio::test]
    async fn test_rejected_submission_is_not_stored() {
        let service = service();
        let mut sub = taro();
        sub.email = None;
        assert!(service.submit(sub).await.is_err());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = service();
        service.submit(taro()).await.unwrap();
        assert!(matches!(service.get(2).await, Err(AppError::NotFound(_))));
        assert_eq!(service.get(1).await.unwrap().name, "Taro");
    }

    #[tokio::test]
    async fn test_closed_notification_queue_does_not_fail_submit() {
        let (notifications, rx) = NotificationService::new(1);
        drop(rx);
        let service =
            ReservationService::new(Arc::new(InMemoryReservationStore::new()), Some(notifications));

        let reservation = service.submit(taro()).await.unwrap();
        assert_eq!(reservation.id, 1);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }
}
