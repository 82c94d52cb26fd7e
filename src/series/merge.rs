use std::collections::BTreeSet;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Domain;

use super::alignment::PreparedSeries;
use super::types::{AlignmentMode, SeriesKey, TimedValue};

/// One row of the merged dataset: every series value defined at `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub time: f64,
    pub values: IndexMap<SeriesKey, f64>,
}

impl MergedRow {
    #[must_use]
    pub fn value(&self, key: &SeriesKey) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Merged, gap-filled dataset with its domain bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSeries {
    pub rows: Vec<MergedRow>,
    pub keys: Vec<SeriesKey>,
    /// `[first_key, last_key]` of the union axis; `None` without rows.
    pub x_domain: Option<Domain>,
    /// Min/max of every emitted value, `[0, 0]` when there is none.
    pub y_domain: Domain,
}

/// Sorted distinct keys across all series.
///
/// In relative mode the longest series' final key is always on the axis so
/// the X range reaches the end of the longest recording.
#[must_use]
pub fn union_time_axis(prepared: &[PreparedSeries], alignment: AlignmentMode) -> Vec<f64> {
    let mut keys: BTreeSet<OrderedFloat<f64>> = prepared
        .iter()
        .flat_map(|series| series.points.iter().map(|point| OrderedFloat(point.t)))
        .collect();

    if alignment == AlignmentMode::Relative {
        let longest = prepared
            .iter()
            .filter_map(PreparedSeries::last_key)
            .max_by(f64::total_cmp);
        if let Some(longest) = longest.filter(|longest| *longest > 0.0) {
            keys.insert(OrderedFloat(longest));
        }
    }

    keys.into_iter().map(|key| key.0).collect()
}

/// Linearly interpolates `points` at every axis time within the series'
/// own key range.
///
/// Times outside the range stay `None`. Times matching a sample return that
/// sample's value exactly. Non-finite results are treated as undefined.
#[must_use]
pub fn interpolate_on_axis(points: &[TimedValue], axis: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; axis.len()];
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return out;
    };
    let last_index = points.len() - 1;
    let mut index = 0;

    for (slot, &time) in out.iter_mut().zip(axis) {
        if time < first.t {
            continue;
        }
        if time > last.t {
            break;
        }

        while index < last_index && points[index + 1].t < time {
            index += 1;
        }

        let p1 = points[index];
        let p2 = points[(index + 1).min(last_index)];
        let value = if p1.t == p2.t || time <= p1.t {
            p1.v
        } else if time >= p2.t {
            p2.v
        } else {
            let ratio = (time - p1.t) / (p2.t - p1.t);
            p1.v + ratio * (p2.v - p1.v)
        };

        if value.is_finite() {
            *slot = Some(value);
        }
    }

    out
}

/// Builds merged rows and bounds from prepared series.
#[must_use]
pub fn merge_prepared(prepared: &[PreparedSeries], alignment: AlignmentMode) -> MergedSeries {
    let axis = union_time_axis(prepared, alignment);
    let columns: Vec<Vec<Option<f64>>> = prepared
        .iter()
        .map(|series| interpolate_on_axis(&series.points, &axis))
        .collect();

    if has_disjoint_ranges(prepared) {
        debug!(
            series = prepared.len(),
            "merging series whose time ranges do not overlap; rows will be sparse"
        );
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let rows: Vec<MergedRow> = axis
        .iter()
        .enumerate()
        .map(|(row_index, &time)| {
            let mut values = IndexMap::with_capacity(prepared.len());
            for (series, column) in prepared.iter().zip(&columns) {
                if let Some(value) = column[row_index] {
                    y_min = y_min.min(value);
                    y_max = y_max.max(value);
                    values.insert(series.key.clone(), value);
                }
            }
            MergedRow { time, values }
        })
        .collect();

    let y_domain = Domain::new(y_min, y_max).unwrap_or(Domain::ZERO);
    let x_domain = match (axis.first(), axis.last()) {
        (Some(first), Some(last)) => Domain::new(*first, *last).ok(),
        _ => None,
    };

    MergedSeries {
        rows,
        keys: prepared.iter().map(|series| series.key.clone()).collect(),
        x_domain,
        y_domain,
    }
}

/// `true` when at least one series shares no time with any other series.
fn has_disjoint_ranges(prepared: &[PreparedSeries]) -> bool {
    if prepared.len() < 2 {
        return false;
    }
    let ranges: Vec<Domain> = prepared.iter().filter_map(PreparedSeries::key_range).collect();
    ranges.iter().enumerate().any(|(index, range)| {
        ranges.iter().enumerate().all(|(other_index, other)| {
            other_index == index || other.max() < range.min() || other.min() > range.max()
        })
    })
}
