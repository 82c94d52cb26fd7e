use chrono::{DateTime, Utc};

const MS_PER_SECOND: f64 = 1_000.0;
const NANOS_PER_MS: f64 = 1_000_000.0;

/// Converts a timestamp to fractional milliseconds since the Unix epoch.
#[must_use]
pub fn datetime_to_epoch_ms(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 * MS_PER_SECOND
        + f64::from(time.timestamp_subsec_nanos()) / NANOS_PER_MS
}

/// Converts fractional epoch milliseconds back into a UTC timestamp.
///
/// Returns `None` for non-finite input or values outside chrono's range.
#[must_use]
pub fn epoch_ms_to_datetime(epoch_ms: f64) -> Option<DateTime<Utc>> {
    if !epoch_ms.is_finite() {
        return None;
    }
    let secs = (epoch_ms / MS_PER_SECOND).floor();
    let rem_ms = epoch_ms - secs * MS_PER_SECOND;
    let nanos = (rem_ms * NANOS_PER_MS).round().clamp(0.0, 999_999_999.0) as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(secs as i64, nanos)
}
