#[cfg(feature = "parallel-decimation")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::{Domain, datetime_to_epoch_ms};

use super::decimation::decimate_series;
use super::types::{AlignmentMode, SelectedSeries, SeriesId, SeriesKey, TimedValue};

const MS_PER_SECOND: f64 = 1_000.0;

/// Decimated series keyed on the shared X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub id: SeriesId,
    pub key: SeriesKey,
    /// Entity start in epoch milliseconds; zero in relative mode.
    pub start_offset_ms: f64,
    /// Samples whose `t` is the axis key, ordered by key.
    pub points: Vec<TimedValue>,
}

impl PreparedSeries {
    #[must_use]
    pub fn first_key(&self) -> Option<f64> {
        self.points.first().map(|point| point.t)
    }

    #[must_use]
    pub fn last_key(&self) -> Option<f64> {
        self.points.last().map(|point| point.t)
    }

    /// `[first_key, last_key]` of this series.
    #[must_use]
    pub fn key_range(&self) -> Option<Domain> {
        Domain::new(self.first_key()?, self.last_key()?).ok()
    }
}

/// Maps elapsed seconds onto the axis for the given alignment.
#[must_use]
pub fn time_key(elapsed_seconds: f64, start_offset_ms: f64, alignment: AlignmentMode) -> f64 {
    match alignment {
        AlignmentMode::Relative => elapsed_seconds,
        AlignmentMode::Absolute => start_offset_ms + elapsed_seconds * MS_PER_SECOND,
    }
}

/// Decimates and time-keys one selected series.
///
/// Returns `None` for empty series and, in absolute mode, for entities
/// without a start time.
#[must_use]
pub fn prepare_series(
    selected: &SelectedSeries,
    max_points: usize,
    alignment: AlignmentMode,
) -> Option<PreparedSeries> {
    let start_offset_ms = match alignment {
        AlignmentMode::Relative => 0.0,
        AlignmentMode::Absolute => match selected.entity_start {
            Some(start) => datetime_to_epoch_ms(start),
            None => {
                debug!(
                    series = %selected.id.key(),
                    "skipping series without entity start time"
                );
                return None;
            }
        },
    };

    let mut points: Vec<TimedValue> = decimate_series(&selected.raw, max_points)
        .into_iter()
        .map(|sample| {
            TimedValue::new(time_key(sample.t, start_offset_ms, alignment), sample.v)
        })
        .filter(|sample| sample.t.is_finite())
        .collect();
    if points.is_empty() {
        return None;
    }
    points.sort_by(|a, b| a.t.total_cmp(&b.t));

    Some(PreparedSeries {
        id: selected.id.clone(),
        key: selected.id.key(),
        start_offset_ms,
        points,
    })
}

/// Prepares every selected series, preserving selection order.
#[must_use]
pub fn prepare_all(
    selection: &[SelectedSeries],
    max_points: usize,
    alignment: AlignmentMode,
) -> Vec<PreparedSeries> {
    #[cfg(feature = "parallel-decimation")]
    {
        let prepared: Vec<Option<PreparedSeries>> = selection
            .par_iter()
            .map(|selected| prepare_series(selected, max_points, alignment))
            .collect();
        prepared.into_iter().flatten().collect()
    }

    #[cfg(not(feature = "parallel-decimation"))]
    {
        selection
            .iter()
            .filter_map(|selected| prepare_series(selected, max_points, alignment))
            .collect()
    }
}
