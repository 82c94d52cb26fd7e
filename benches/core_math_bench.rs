use chrono::DateTime;
use criterion::{Criterion, criterion_group, criterion_main};
use flight_chart::api::{FlightChartPanel, PanelConfig};
use flight_chart::core::{ClientRect, Domain, LinearScale, PlotOffset};
use flight_chart::series::{
    AggregationConfig, RawSeries, SelectedSeries, SeriesAggregator, SeriesId, decimate_series,
};
use std::hint::black_box;

fn flight_series(entity_id: u64, parameter: &str, len: usize, start_ms: i64) -> SelectedSeries {
    let pairs: Vec<(f64, f64)> = (0..len)
        .map(|i| {
            let t = i as f64;
            (t, 1_000.0 + (t * 0.01).sin() * 250.0)
        })
        .collect();
    SelectedSeries::new(
        SeriesId::new(entity_id, parameter),
        DateTime::from_timestamp_millis(start_ms),
        RawSeries::from_pairs(&pairs),
    )
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let domain = Domain::new(0.0, 10_000.0).expect("valid domain");
    let scale = LinearScale::horizontal(domain, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123));
            let _ = scale.pixel_to_domain(px);
        })
    });
}

fn bench_decimate_100k(c: &mut Criterion) {
    let series = flight_series(1, "AltMSL", 100_000, 0);

    c.bench_function("decimate_100k", |b| {
        b.iter(|| {
            let _ = decimate_series(black_box(&series.raw), black_box(1_000));
        })
    });
}

fn bench_merge_eight_flights(c: &mut Criterion) {
    let aggregator = SeriesAggregator::new(AggregationConfig::default()).expect("aggregator init");
    let selection: Vec<SelectedSeries> = (0..8)
        .map(|i| {
            flight_series(
                i,
                "E1 CHT1",
                20_000 + i as usize * 1_000,
                1_700_000_000_000 + i as i64 * 90_000,
            )
        })
        .collect();

    c.bench_function("merge_eight_flights", |b| {
        b.iter(|| {
            let _ = aggregator.build(black_box(&selection));
        })
    });
}

fn bench_render_frame_eight_flights(c: &mut Criterion) {
    let mut panel = FlightChartPanel::headless(PanelConfig::default()).expect("panel init");
    panel.set_layout(
        PlotOffset::new(48.0, 12.0, 1_600.0, 800.0),
        ClientRect::new(0.0, 0.0, 1_700.0, 860.0),
    );
    panel.set_selection(
        (0..8)
            .map(|i| flight_series(i, "AltAGL", 10_000, 1_700_000_000_000 + i as i64 * 30_000))
            .collect(),
    );

    c.bench_function("render_frame_eight_flights", |b| {
        b.iter(|| {
            let _ = panel.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_decimate_100k,
    bench_merge_eight_flights,
    bench_render_frame_eight_flights
);
criterion_main!(benches);
