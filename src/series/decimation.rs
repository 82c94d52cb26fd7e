use super::types::{RawSeries, TimedValue};

/// Per-series point cap used by the flight chart.
pub const DEFAULT_MAX_POINTS_PER_SERIES: usize = 1_000;

/// Down-samples a series to roughly `max_points` samples.
///
/// Series at or below the cap are returned whole. Longer series are
/// stride-sampled with stride `ceil(len / max_points)`, and the final raw
/// sample is always appended so the tail of the series is never lost.
#[must_use]
pub fn decimate_series(raw: &RawSeries, max_points: usize) -> Vec<TimedValue> {
    let len = raw.len();
    if len == 0 {
        return Vec::new();
    }

    let max_points = max_points.max(1);
    if len <= max_points {
        return (0..len).filter_map(|index| raw.sample(index)).collect();
    }

    let stride = len.div_ceil(max_points);
    let mut out: Vec<TimedValue> = (0..len)
        .step_by(stride)
        .filter_map(|index| raw.sample(index))
        .collect();

    if let Some(last) = raw.sample(len - 1) {
        if out.last().is_none_or(|tail| tail.t != last.t) {
            out.push(last);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::decimate_series;
    use crate::series::RawSeries;

    fn ramp(len: usize) -> RawSeries {
        let pairs: Vec<(f64, f64)> = (0..len).map(|i| (i as f64, i as f64 * 2.0)).collect();
        RawSeries::from_pairs(&pairs)
    }

    #[test]
    fn short_series_is_kept_whole() {
        let out = decimate_series(&ramp(10), 1_000);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn long_series_is_strided_and_keeps_last_point() {
        let out = decimate_series(&ramp(2_501), 1_000);
        // stride 3 -> indices 0, 3, ..., 2499 plus the forced tail at 2500
        assert_eq!(out.len(), 835);
        assert_eq!(out[1].t, 3.0);
        assert_eq!(out.last().map(|p| p.t), Some(2_500.0));
    }

    #[test]
    fn tail_is_not_duplicated_when_stride_lands_on_it() {
        let out = decimate_series(&ramp(2_001), 1_000);
        // stride 3: 0..=1998 then forced 2000
        assert_eq!(out.last().map(|p| p.t), Some(2_000.0));
        let out = decimate_series(&ramp(7), 3);
        // stride 3: 0, 3, 6 already includes the tail
        assert_eq!(out.iter().map(|p| p.t).collect::<Vec<_>>(), vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn empty_series_yields_nothing() {
        assert!(decimate_series(&ramp(0), 1_000).is_empty());
    }
}
