use chrono::{DateTime, Utc};

use crate::core::primitives::datetime_to_epoch_ms;

/// Raw result of an axis scale's pixel-to-data inversion.
///
/// Host charting layers return different kinds of values depending on the
/// axis type: time axes yield timestamps, linear axes yield numbers, and
/// category-like axes may yield text.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleValue {
    Date(DateTime<Utc>),
    Number(f64),
    Text(String),
    Missing,
}

impl ScaleValue {
    /// Normalizes this value to a plain number. See [`normalize_scale_value`].
    #[must_use]
    pub fn to_number(&self) -> f64 {
        normalize_scale_value(self)
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for ScaleValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<ScaleValue>> From<Option<T>> for ScaleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Converts an inverted scale value into a plain number.
///
/// - dates become milliseconds since the Unix epoch
/// - numbers pass through unchanged
/// - text is parsed as a float, `NaN` when parsing fails
/// - missing values are `NaN`
///
/// Never panics; callers check `is_finite()` on the result.
#[must_use]
pub fn normalize_scale_value(value: &ScaleValue) -> f64 {
    match value {
        ScaleValue::Date(time) => datetime_to_epoch_ms(*time),
        ScaleValue::Number(number) => *number,
        ScaleValue::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        ScaleValue::Missing => f64::NAN,
    }
}
