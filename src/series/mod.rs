//! Decimation, time alignment and merging of selected flight series.

mod aggregator;
mod alignment;
mod decimation;
mod merge;
mod palette;
mod ticks;
mod time_format;
mod types;

pub use aggregator::{AggregationConfig, ChartModel, SeriesAggregator, SeriesDescriptor};
pub use alignment::{PreparedSeries, prepare_all, prepare_series, time_key};
pub use decimation::{DEFAULT_MAX_POINTS_PER_SERIES, decimate_series};
pub use merge::{MergedRow, MergedSeries, interpolate_on_axis, merge_prepared, union_time_axis};
pub use palette::{
    BRIGHTNESS_LEVELS_PER_ENTITY, ENTITY_BASE_COLORS, HIGH_CONTRAST_PALETTE,
    entity_parameter_color, high_contrast_color,
};
pub use ticks::{DEFAULT_MAX_TICKS, TimeTicks, build_time_ticks, domain_span_minutes};
pub use time_format::{
    SHOW_SECONDS_MAX_SPAN_MINUTES, TickLabel, format_absolute_tooltip, format_clock_time,
    format_day_label, format_elapsed, format_elapsed_tooltip, format_tick_label,
    format_tooltip_time, shows_seconds,
};
pub use types::{AlignmentMode, RawSeries, SelectedSeries, SeriesId, SeriesKey, TimedValue};
