//! Status events: timestamped records of a card occupying a status token.

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// One recorded transition of a card through the pipeline.
///
/// `created_at` is kept exactly as the API sent it so the history
/// re-serializes unchanged. Parse it with [`StatusEvent::timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The status token, e.g. `psa_grading`.
    #[serde(deserialize_with = "nullable_string")]
    pub status: String,

    /// When the card entered this status, as sent by the API.
    #[serde(default, deserialize_with = "nullable_string")]
    pub created_at: String,
}

impl StatusEvent {
    #[cfg(test)]
    pub fn new(status: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            created_at: created_at.into(),
        }
    }

    /// Parse `created_at`.
    ///
    /// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS` datetimes,
    /// the latter read as UTC. Returns `None` for anything else.
    pub fn timestamp(&self) -> Option<Timestamp> {
        let raw = self.created_at.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(ts) = raw.parse::<Timestamp>() {
            return Some(ts);
        }
        let naive = raw.parse::<DateTime>().ok()?;
        naive.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp())
    }
}

/// Deserialize a string that the API may send as `null`.
pub(super) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let event = StatusEvent::new("submit", "2024-03-01T09:30:00Z");
        let ts = event.timestamp().unwrap();
        assert_eq!(ts, Timestamp::new(1_709_285_400, 0).unwrap());
    }

    #[test]
    fn parses_offset_timestamps() {
        let utc = StatusEvent::new("submit", "2024-03-01T09:30:00Z");
        let tokyo = StatusEvent::new("submit", "2024-03-01T18:30:00+09:00");
        assert_eq!(utc.timestamp(), tokyo.timestamp());
    }

    #[test]
    fn naive_datetime_is_utc() {
        let naive = StatusEvent::new("submit", "2024-03-01T09:30:00");
        let utc = StatusEvent::new("submit", "2024-03-01T09:30:00Z");
        assert_eq!(naive.timestamp(), utc.timestamp());
    }

    #[test]
    fn garbage_is_none() {
        assert!(StatusEvent::new("submit", "yesterday-ish").timestamp().is_none());
        assert!(StatusEvent::new("submit", "").timestamp().is_none());
        assert!(StatusEvent::new("submit", "   ").timestamp().is_none());
    }

    #[test]
    fn null_and_missing_created_at_deserialize_empty() {
        let null: StatusEvent =
            serde_json::from_str(r#"{"status":"submit","created_at":null}"#).unwrap();
        assert_eq!(null.created_at, "");

        let missing: StatusEvent = serde_json::from_str(r#"{"status":"submit"}"#).unwrap();
        assert_eq!(missing.created_at, "");
    }
}
