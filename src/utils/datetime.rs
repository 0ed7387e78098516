//! Date rendering for the `date` sheet column.

use super::config::DATE_FORMAT;
use chrono::TimeZone;
use log::warn;
use std::fmt::Display;

/// Render an epoch-millisecond timestamp as `MM-DD HH:MM` in `tz`
///
/// Timestamps chrono cannot represent render as an empty string.
pub fn format_date<Tz>(timestamp_ms: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !timestamp_ms.is_finite() {
        warn!("Non-finite snapshot timestamp: {}", timestamp_ms);
        return String::new();
    }

    match tz.timestamp_millis_opt(timestamp_ms.trunc() as i64).earliest() {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => {
            warn!("Snapshot timestamp out of range: {}", timestamp_ms);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_date_utc() {
        // 2021-09-01T08:05:00Z
        assert_eq!(format_date(1_630_483_500_000.0, &Utc), "09-01 08:05");
    }

    #[test]
    fn test_format_date_pads_fields() {
        // 2022-01-02T03:04:59.999Z
        assert_eq!(format_date(1_641_092_699_999.0, &Utc), "01-02 03:04");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(f64::NAN, &Utc), "");
        assert_eq!(format_date(1e20, &Utc), "");
    }
}
