//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_changed` and `last_updated`.
///
/// Serialized as RFC 3339 / ISO-8601 (`2024-01-15T10:00:00Z`).
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
///
/// Reads the wall clock, so stamps taken across a backward clock step are
/// not ordered.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_serialize_as_iso_8601() {
        let ts: Timestamp = "2024-01-15T10:00:00Z".parse().unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-15T10:00:00Z\"");
    }
}
