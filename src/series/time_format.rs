use serde::{Deserialize, Serialize};

use crate::core::epoch_ms_to_datetime;

use super::types::AlignmentMode;

/// Axis labels include seconds when the domain spans at most this many minutes.
pub const SHOW_SECONDS_MAX_SPAN_MINUTES: f64 = 10.0;

#[must_use]
pub fn shows_seconds(domain_span_minutes: f64) -> bool {
    domain_span_minutes <= SHOW_SECONDS_MAX_SPAN_MINUTES
}

/// Label for one X axis tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickLabel {
    pub time: String,
    /// Date line shown under the first tick of each day (absolute mode).
    pub date: Option<String>,
}

/// `HH:MM` or `HH:MM:SS` for elapsed seconds.
#[must_use]
pub fn format_elapsed(total_seconds: f64, with_seconds: bool) -> String {
    let sign = if total_seconds < 0.0 { "-" } else { "" };
    let total = total_seconds.abs().floor() as u64;
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    if with_seconds {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}")
    }
}

/// Tooltip header for relative mode, e.g. `Elapsed 01:02:03`.
#[must_use]
pub fn format_elapsed_tooltip(total_seconds: f64) -> String {
    format!("Elapsed {}", format_elapsed(total_seconds, true))
}

/// 24-hour UTC clock time for an epoch-millisecond value.
#[must_use]
pub fn format_clock_time(epoch_ms: f64, with_seconds: bool) -> Option<String> {
    let time = epoch_ms_to_datetime(epoch_ms)?;
    let pattern = if with_seconds { "%H:%M:%S" } else { "%H:%M" };
    Some(time.format(pattern).to_string())
}

/// Short date such as `Mar 07`.
#[must_use]
pub fn format_day_label(epoch_ms: f64) -> Option<String> {
    Some(epoch_ms_to_datetime(epoch_ms)?.format("%b %d").to_string())
}

/// Tooltip header for absolute mode, e.g. `07 Mar 2024 14:03:09`.
#[must_use]
pub fn format_absolute_tooltip(epoch_ms: f64) -> Option<String> {
    Some(
        epoch_ms_to_datetime(epoch_ms)?
            .format("%d %b %Y %H:%M:%S")
            .to_string(),
    )
}

/// Formats an axis tick for the given alignment.
#[must_use]
pub fn format_tick_label(
    value: f64,
    alignment: AlignmentMode,
    domain_span_minutes: f64,
    is_day_boundary: bool,
) -> TickLabel {
    let with_seconds = shows_seconds(domain_span_minutes);
    match alignment {
        AlignmentMode::Relative => TickLabel {
            time: format_elapsed(value, with_seconds),
            date: None,
        },
        AlignmentMode::Absolute => TickLabel {
            time: format_clock_time(value, with_seconds).unwrap_or_default(),
            date: if is_day_boundary {
                format_day_label(value)
            } else {
                None
            },
        },
    }
}

/// Formats the tooltip header for a hovered row.
#[must_use]
pub fn format_tooltip_time(value: f64, alignment: AlignmentMode) -> String {
    match alignment {
        AlignmentMode::Relative => format_elapsed_tooltip(value),
        AlignmentMode::Absolute => format_absolute_tooltip(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_absolute_tooltip, format_clock_time, format_elapsed, format_elapsed_tooltip,
        format_tick_label, shows_seconds,
    };
    use crate::series::AlignmentMode;

    // 2024-03-07T14:03:09Z
    const SAMPLE_MS: f64 = 1_709_820_189_000.0;

    #[test]
    fn elapsed_labels_pad_fields() {
        assert_eq!(format_elapsed(3_723.9, true), "01:02:03");
        assert_eq!(format_elapsed(3_723.9, false), "01:02");
        assert_eq!(format_elapsed_tooltip(59.0), "Elapsed 00:00:59");
    }

    #[test]
    fn absolute_labels_use_utc_24h_clock() {
        assert_eq!(format_clock_time(SAMPLE_MS, true).as_deref(), Some("14:03:09"));
        assert_eq!(
            format_absolute_tooltip(SAMPLE_MS).as_deref(),
            Some("07 Mar 2024 14:03:09")
        );
    }

    #[test]
    fn day_boundary_ticks_carry_date() {
        let label = format_tick_label(SAMPLE_MS, AlignmentMode::Absolute, 120.0, true);
        assert_eq!(label.time, "14:03");
        assert_eq!(label.date.as_deref(), Some("Mar 07"));

        let label = format_tick_label(SAMPLE_MS, AlignmentMode::Absolute, 5.0, false);
        assert_eq!(label.time, "14:03:09");
        assert!(label.date.is_none());
    }

    #[test]
    fn seconds_threshold_is_inclusive() {
        assert!(shows_seconds(10.0));
        assert!(!shows_seconds(10.5));
    }
}
