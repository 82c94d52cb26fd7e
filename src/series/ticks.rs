use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Domain, epoch_ms_to_datetime};

use super::types::AlignmentMode;

pub const DEFAULT_MAX_TICKS: usize = 8;

/// X axis tick positions for a merged dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeTicks {
    pub ticks: Vec<f64>,
    /// Subset of `ticks` that start a new UTC day (absolute mode only).
    pub day_boundaries: Vec<f64>,
}

impl TimeTicks {
    #[must_use]
    pub fn is_day_boundary(&self, tick: f64) -> bool {
        self.day_boundaries.contains(&tick)
    }
}

/// Evenly spaced ticks across `domain`.
///
/// Relative mode always emits `max_ticks` ticks over a span floored at one
/// second. Absolute mode emits at most one tick per row, rounded to whole
/// milliseconds, and records the first tick of every UTC day.
#[must_use]
pub fn build_time_ticks(
    domain: Domain,
    alignment: AlignmentMode,
    row_count: usize,
    max_ticks: usize,
) -> TimeTicks {
    let (min, max) = domain.bounds();
    let single = |min: f64| TimeTicks {
        ticks: vec![min],
        day_boundaries: match alignment {
            AlignmentMode::Absolute => vec![min],
            AlignmentMode::Relative => Vec::new(),
        },
    };

    if domain.is_degenerate() {
        return single(min);
    }

    match alignment {
        AlignmentMode::Relative => {
            let tick_count = max_ticks.max(2);
            let step = (max - min).max(1.0) / (tick_count - 1) as f64;
            TimeTicks {
                ticks: (0..tick_count).map(|i| min + step * i as f64).collect(),
                day_boundaries: Vec::new(),
            }
        }
        AlignmentMode::Absolute => {
            let tick_count = max_ticks.min(row_count);
            if tick_count < 2 {
                return single(min);
            }
            let step = (max - min) / (tick_count - 1) as f64;
            let mut out = TimeTicks::default();
            let mut previous_day: Option<NaiveDate> = None;
            for i in 0..tick_count {
                let tick = (min + step * i as f64).round();
                out.ticks.push(tick);
                let day = epoch_ms_to_datetime(tick).map(|time| time.date_naive());
                if day.is_some() && day != previous_day {
                    out.day_boundaries.push(tick);
                    previous_day = day;
                }
            }
            out
        }
    }
}

/// Domain span in minutes: seconds in relative mode, milliseconds in
/// absolute mode.
#[must_use]
pub fn domain_span_minutes(domain: Domain, alignment: AlignmentMode) -> f64 {
    match alignment {
        AlignmentMode::Relative => domain.span() / 60.0,
        AlignmentMode::Absolute => domain.span() / 60_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_time_ticks, domain_span_minutes};
    use crate::core::Domain;
    use crate::series::AlignmentMode;

    const DAY_MS: f64 = 86_400_000.0;

    #[test]
    fn relative_ticks_are_evenly_spaced() {
        let domain = Domain::new(0.0, 70.0).expect("domain");
        let ticks = build_time_ticks(domain, AlignmentMode::Relative, 3, 8);
        assert_eq!(ticks.ticks.len(), 8);
        assert_eq!(ticks.ticks[0], 0.0);
        assert_eq!(ticks.ticks[7], 70.0);
        assert!(ticks.day_boundaries.is_empty());
    }

    #[test]
    fn absolute_ticks_are_capped_by_row_count_and_mark_days() {
        let domain = Domain::new(DAY_MS - 3_600_000.0, DAY_MS + 3_600_000.0).expect("domain");
        let ticks = build_time_ticks(domain, AlignmentMode::Absolute, 3, 8);
        assert_eq!(ticks.ticks, vec![DAY_MS - 3_600_000.0, DAY_MS, DAY_MS + 3_600_000.0]);
        // first tick starts day 1, second tick starts day 2
        assert_eq!(ticks.day_boundaries, vec![DAY_MS - 3_600_000.0, DAY_MS]);
    }

    #[test]
    fn degenerate_domain_yields_single_tick() {
        let domain = Domain::point(5_000.0).expect("domain");
        let absolute = build_time_ticks(domain, AlignmentMode::Absolute, 1, 8);
        assert_eq!(absolute.ticks, vec![5_000.0]);
        assert_eq!(absolute.day_boundaries, vec![5_000.0]);
        let relative = build_time_ticks(domain, AlignmentMode::Relative, 1, 8);
        assert!(relative.day_boundaries.is_empty());
    }

    #[test]
    fn span_minutes_depends_on_units() {
        let domain = Domain::new(0.0, 600.0).expect("domain");
        assert_eq!(domain_span_minutes(domain, AlignmentMode::Relative), 10.0);
        assert_eq!(domain_span_minutes(domain, AlignmentMode::Absolute), 0.01);
    }
}
