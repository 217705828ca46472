//! Reservation Model

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Stored in place of a phone number the guest did not give
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Sent in place of special requests the guest did not give
pub const NO_SPECIAL_REQUESTS: &str = "None";

/// Party size as submitted by the form.
///
/// The reservation form posts the `<select>` value as a string while API
/// clients usually send a number; both are kept in the shape they arrived in.
/// Any JSON number is accepted, including fractions and negatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Guests {
    Count(Number),
    Text(String),
}

impl Guests {
    /// Only `0` and `""` count as "not given"
    pub fn is_blank(&self) -> bool {
        match self {
            Guests::Count(n) => n.as_f64() == Some(0.0),
            Guests::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Guests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 2.0 is shown as 2
            Guests::Count(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e21 => write!(f, "{v:.0}"),
                _ => write!(f, "{n}"),
            },
            Guests::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Guests {
    fn from(n: u64) -> Self {
        Guests::Count(n.into())
    }
}

impl From<&str> for Guests {
    fn from(s: &str) -> Self {
        Guests::Text(s.to_string())
    }
}

/// Reservation entity (table booking)
///
/// Created once by intake and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: Guests,
    /// `None` when the guest left the box empty; sent as `"None"` on the wire
    #[serde(
        default,
        serialize_with = "serialize_requests",
        deserialize_with = "deserialize_requests"
    )]
    pub requests: Option<String>,
    #[serde(
        serialize_with = "serialize_iso_millis",
        deserialize_with = "deserialize_iso"
    )]
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether the guest typed anything into the special requests box
    pub fn has_special_requests(&self) -> bool {
        self.requests.is_some()
    }

    /// Special requests as shown to staff, `"None"` when not given
    pub fn requests_or_default(&self) -> &str {
        self.requests.as_deref().unwrap_or(NO_SPECIAL_REQUESTS)
    }
}

/// Reservation form payload (`POST /api/reservations`)
///
/// Every field is optional at the wire level so that missing fields can be
/// reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<Guests>,
    pub requests: Option<String>,
}

fn serialize_requests<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(NO_SPECIAL_REQUESTS))
}

/// The wire format cannot tell a typed "None" from the sentinel; both read back as `None`
fn deserialize_requests<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|r| r != NO_SPECIAL_REQUESTS))
}

/// ISO-8601 with millisecond precision, e.g. `2099-01-01T09:30:00.000Z`
fn serialize_iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_iso<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
