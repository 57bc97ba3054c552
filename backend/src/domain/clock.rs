//! Record timestamps.

use chrono::{SecondsFormat, Utc};

/// Current time as an RFC 3339 UTC string with millisecond precision, e.g.
/// `2024-09-01T08:30:00.000Z`. This is the wire shape the data files carry
/// for every `createdAt`/`enrolledAt`/`submittedAt` field.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_utc_millis() {
        let stamp = now();
        assert!(stamp.ends_with('Z'), "{stamp}");
        let parsed = chrono::DateTime::parse_from_rfc3339(&stamp).expect("valid RFC 3339");
        assert_eq!(parsed.timezone().utc_minus_local(), 0);
        // Millisecond precision: exactly three fractional digits.
        let fraction = stamp.split('.').nth(1).expect("fractional part");
        assert_eq!(fraction.len(), "000Z".len());
    }
}
