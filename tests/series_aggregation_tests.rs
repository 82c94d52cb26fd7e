use approx::assert_abs_diff_eq;
use chrono::DateTime;
use flight_chart::core::Domain;
use flight_chart::series::{
    AggregationConfig, AlignmentMode, HIGH_CONTRAST_PALETTE, RawSeries, SelectedSeries,
    SeriesAggregator, SeriesId, decimate_series,
};

fn series(
    entity_id: u64,
    parameter: &str,
    start_ms: Option<i64>,
    pairs: &[(f64, f64)],
) -> SelectedSeries {
    SelectedSeries::new(
        SeriesId::new(entity_id, parameter),
        start_ms.and_then(DateTime::from_timestamp_millis),
        RawSeries::from_pairs(pairs),
    )
}

fn aggregator(alignment: AlignmentMode) -> SeriesAggregator {
    SeriesAggregator::new(AggregationConfig::default().with_alignment(alignment))
        .expect("aggregator init")
}

#[test]
fn decimation_keeps_last_sample_of_long_series() {
    let pairs: Vec<(f64, f64)> = (0..2_503).map(|i| (i as f64 * 0.25, i as f64)).collect();
    let raw = RawSeries::from_pairs(&pairs);

    let decimated = decimate_series(&raw, 1_000);
    assert!(decimated.len() <= 1_001);
    assert_eq!(decimated.first().map(|p| p.t), Some(0.0));
    assert_eq!(decimated.last().map(|p| p.t), Some(2_502.0 * 0.25));
    // ceil(2503 / 1000) = 3
    assert_eq!(decimated[1].t, 0.75);
}

#[test]
fn short_series_are_not_decimated() {
    let raw = RawSeries::from_pairs(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    assert_eq!(decimate_series(&raw, 1_000).len(), 3);
}

#[test]
fn absolute_merge_interpolates_on_shared_axis() {
    let model = aggregator(AlignmentMode::Absolute).build(&[
        series(1, "A", Some(1_000), &[(0.0, 10.0), (10.0, 20.0)]),
        series(2, "B", Some(5_000), &[(0.0, 100.0), (10.0, 200.0)]),
    ]);

    assert!(model.has_data);
    let times: Vec<f64> = model.rows.iter().map(|row| row.time).collect();
    assert_eq!(times, vec![1_000.0, 5_000.0, 11_000.0, 15_000.0]);

    let a = SeriesId::new(1, "A").key();
    let b = SeriesId::new(2, "B").key();
    assert_eq!(model.series_keys(), vec![a.clone(), b.clone()]);

    assert_eq!(model.rows[0].value(&a), Some(10.0));
    assert_eq!(model.rows[0].value(&b), None);
    assert_abs_diff_eq!(model.rows[1].value(&a).expect("a at 5000"), 14.0, epsilon = 1e-12);
    assert_eq!(model.rows[1].value(&b), Some(100.0));
    assert_eq!(model.rows[2].value(&a), Some(20.0));
    assert_abs_diff_eq!(model.rows[2].value(&b).expect("b at 11000"), 160.0, epsilon = 1e-12);
    assert_eq!(model.rows[3].value(&a), None);
    assert_eq!(model.rows[3].value(&b), Some(200.0));

    assert_eq!(model.x_domain, Some(Domain::new(1_000.0, 15_000.0).expect("x")));
    assert_eq!(model.y_domain, Domain::new(10.0, 200.0).expect("y"));
}

#[test]
fn merged_values_equal_raw_samples_at_sample_times() {
    let a_pairs = [(0.0, 1.5), (0.7, -3.25), (2.2, 8.125), (5.0, 0.1)];
    let b_pairs = [(0.3, 7.0), (1.1, 9.0), (4.9, 11.0)];
    let model = aggregator(AlignmentMode::Relative).build(&[
        series(1, "A", None, &a_pairs),
        series(2, "B", None, &b_pairs),
    ]);

    let a = SeriesId::new(1, "A").key();
    for (t, v) in a_pairs {
        let row = model
            .rows
            .iter()
            .find(|row| row.time == t)
            .expect("sample time on axis");
        assert_eq!(row.value(&a), Some(v));
    }
}

#[test]
fn relative_axis_reaches_longest_series_end() {
    let model = aggregator(AlignmentMode::Relative).build(&[
        series(1, "A", None, &[(0.0, 1.0), (30.0, 2.0)]),
        series(2, "A", None, &[(0.0, 5.0), (90.0, 6.0)]),
    ]);

    assert_eq!(model.x_domain, Some(Domain::new(0.0, 90.0).expect("x")));
    assert_eq!(model.rows.last().map(|row| row.time), Some(90.0));
    assert_abs_diff_eq!(model.domain_span_minutes, 1.5, epsilon = 1e-12);
    assert!(model.shows_seconds());
}

#[test]
fn single_point_relative_series_has_degenerate_domains() {
    let model = aggregator(AlignmentMode::Relative).build(&[series(1, "A", None, &[(0.0, 42.0)])]);

    assert!(model.has_data);
    assert_eq!(model.rows.len(), 1);
    let base = model.base_domains().expect("base domains");
    assert_eq!(base.x.bounds(), (0.0, 0.0));
    assert_eq!(base.y.bounds(), (42.0, 42.0));
    assert_eq!(model.ticks.ticks, vec![0.0]);
}

#[test]
fn absolute_mode_skips_series_without_start_time() {
    let model = aggregator(AlignmentMode::Absolute).build(&[
        series(1, "A", None, &[(0.0, 1.0), (1.0, 2.0)]),
        series(2, "A", Some(60_000), &[(0.0, 3.0), (1.0, 4.0)]),
    ]);

    assert_eq!(model.series.len(), 1);
    assert_eq!(model.series[0].id.entity_id, 2);
    assert_eq!(model.y_domain.bounds(), (3.0, 4.0));
}

#[test]
fn disjoint_series_produce_sparse_rows() {
    let model = aggregator(AlignmentMode::Absolute).build(&[
        series(1, "A", Some(0), &[(0.0, 1.0), (10.0, 2.0)]),
        series(2, "A", Some(3_600_000), &[(0.0, 3.0), (10.0, 4.0)]),
    ]);

    let a = SeriesId::new(1, "A").key();
    let b = SeriesId::new(2, "A").key();
    assert_eq!(model.rows.len(), 4);
    assert_eq!(model.x_domain, Some(Domain::new(0.0, 3_610_000.0).expect("x")));
    for row in &model.rows {
        assert_eq!(row.values.len(), 1);
        assert!(row.value(&a).is_some() != row.value(&b).is_some());
    }
}

#[test]
fn empty_selection_yields_empty_model() {
    let model = aggregator(AlignmentMode::Absolute).build(&[]);
    assert!(!model.has_data);
    assert!(model.rows.is_empty());
    assert_eq!(model.x_domain, None);
    assert_eq!(model.y_domain.bounds(), (0.0, 0.0));
    assert_eq!(model.base_domains(), None);
}

#[test]
fn non_finite_values_do_not_widen_y_bounds() {
    let model = aggregator(AlignmentMode::Relative).build(&[series(
        1,
        "A",
        None,
        &[(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0)],
    )]);

    let key = SeriesId::new(1, "A").key();
    assert_eq!(model.rows[1].value(&key), None);
    assert_eq!(model.y_domain.bounds(), (1.0, 3.0));
}

#[test]
fn descriptors_carry_labels_and_palette_colors() {
    let selection = [
        series(42, "E1 CHT-1 (deg F)", None, &[(0.0, 1.0), (1.0, 2.0)]).with_palette_slot(3, 0),
        series(7, "AltMSL", None, &[(0.0, 1.0), (1.0, 2.0)]).with_palette_slot(1, 0),
    ];

    let model = aggregator(AlignmentMode::Relative).build(&selection);
    assert_eq!(model.series[0].key.as_str(), "f42_E1_CHT_1_deg_F_");
    assert_eq!(model.series[0].label, "42 — E1 CHT-1 (deg F)");
    assert_eq!(model.series[0].color, HIGH_CONTRAST_PALETTE[3]);

    let high_contrast = SeriesAggregator::new(AggregationConfig {
        high_contrast: true,
        ..AggregationConfig::default().with_alignment(AlignmentMode::Relative)
    })
    .expect("aggregator init");
    let model = high_contrast.build(&selection);
    assert_eq!(model.series[0].color, HIGH_CONTRAST_PALETTE[0]);
    assert_eq!(model.series[1].color, HIGH_CONTRAST_PALETTE[1]);
}

#[test]
fn absolute_ticks_and_labels_follow_domain() {
    // 2024-03-07T23:59:00Z, spanning midnight.
    let start_ms = 1_709_855_940_000;
    let pairs: Vec<(f64, f64)> = (0..=120).map(|i| (f64::from(i), f64::from(i))).collect();
    let model =
        aggregator(AlignmentMode::Absolute).build(&[series(1, "A", Some(start_ms), &pairs)]);

    assert_eq!(model.ticks.ticks.len(), 8);
    assert_eq!(model.ticks.day_boundaries.len(), 2);
    assert!(model.shows_seconds());

    let first = model.tick_label(model.ticks.ticks[0]);
    assert_eq!(first.time, "23:59:00");
    assert_eq!(first.date.as_deref(), Some("Mar 07"));
    assert_eq!(model.tooltip_title(start_ms as f64), "07 Mar 2024 23:59:00");
}

#[test]
fn invalid_aggregation_config_is_rejected() {
    assert!(
        SeriesAggregator::new(AggregationConfig::default().with_max_points_per_series(0)).is_err()
    );
    assert!(
        SeriesAggregator::new(AggregationConfig {
            max_ticks: 1,
            ..AggregationConfig::default()
        })
        .is_err()
    );
}
