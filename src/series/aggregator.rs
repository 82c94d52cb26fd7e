use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Domain;
use crate::error::{ChartError, ChartResult};
use crate::interaction::BaseDomains;
use crate::render::Color;

use super::alignment::prepare_all;
use super::decimation::DEFAULT_MAX_POINTS_PER_SERIES;
use super::merge::{MergedRow, merge_prepared};
use super::palette::{entity_parameter_color, high_contrast_color};
use super::ticks::{DEFAULT_MAX_TICKS, TimeTicks, build_time_ticks, domain_span_minutes};
use super::time_format::{TickLabel, format_tick_label, format_tooltip_time, shows_seconds};
use super::types::{AlignmentMode, SelectedSeries, SeriesId, SeriesKey};

/// Inputs of the series aggregation that are not data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default = "default_max_points_per_series")]
    pub max_points_per_series: usize,
    #[serde(default)]
    pub alignment: AlignmentMode,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default = "default_background")]
    pub background: Color,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            max_points_per_series: default_max_points_per_series(),
            alignment: AlignmentMode::default(),
            max_ticks: default_max_ticks(),
            high_contrast: false,
            background: default_background(),
        }
    }
}

impl AggregationConfig {
    #[must_use]
    pub fn with_alignment(mut self, alignment: AlignmentMode) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_max_points_per_series(mut self, max_points: usize) -> Self {
        self.max_points_per_series = max_points;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.max_points_per_series == 0 {
            return Err(ChartError::InvalidConfig(
                "max_points_per_series must be >= 1".to_owned(),
            ));
        }
        if self.max_ticks < 2 {
            return Err(ChartError::InvalidConfig(
                "max_ticks must be >= 2".to_owned(),
            ));
        }
        self.background.validate()?;
        Ok(self)
    }
}

fn default_max_points_per_series() -> usize {
    DEFAULT_MAX_POINTS_PER_SERIES
}

fn default_max_ticks() -> usize {
    DEFAULT_MAX_TICKS
}

fn default_background() -> Color {
    Color::WHITE
}

/// Presentation metadata for one series present in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub id: SeriesId,
    pub key: SeriesKey,
    pub label: String,
    pub color: Color,
}

/// Renderable dataset for the current selection.
///
/// Rebuilt wholesale whenever the selection, the raw data or the alignment
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub alignment: AlignmentMode,
    pub has_data: bool,
    pub rows: Vec<MergedRow>,
    pub series: Vec<SeriesDescriptor>,
    pub x_domain: Option<Domain>,
    pub y_domain: Domain,
    pub ticks: TimeTicks,
    pub domain_span_minutes: f64,
}

impl ChartModel {
    #[must_use]
    pub fn empty(alignment: AlignmentMode) -> Self {
        Self {
            alignment,
            has_data: false,
            rows: Vec::new(),
            series: Vec::new(),
            x_domain: None,
            y_domain: Domain::ZERO,
            ticks: TimeTicks::default(),
            domain_span_minutes: 0.0,
        }
    }

    /// Ordered keys of the series present in `rows`.
    #[must_use]
    pub fn series_keys(&self) -> Vec<SeriesKey> {
        self.series.iter().map(|series| series.key.clone()).collect()
    }

    /// Reset target for the interaction controller.
    #[must_use]
    pub fn base_domains(&self) -> Option<BaseDomains> {
        if !self.has_data {
            return None;
        }
        Some(BaseDomains::new(self.x_domain?, self.y_domain))
    }

    #[must_use]
    pub fn shows_seconds(&self) -> bool {
        shows_seconds(self.domain_span_minutes)
    }

    #[must_use]
    pub fn tick_label(&self, tick: f64) -> TickLabel {
        format_tick_label(
            tick,
            self.alignment,
            self.domain_span_minutes,
            self.ticks.is_day_boundary(tick),
        )
    }

    #[must_use]
    pub fn tooltip_title(&self, time: f64) -> String {
        format_tooltip_time(time, self.alignment)
    }
}

/// Builds [`ChartModel`]s from selected raw series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAggregator {
    config: AggregationConfig,
}

impl SeriesAggregator {
    pub fn new(config: AggregationConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> AggregationConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AggregationConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Returns `true` when the mode changed.
    pub fn set_alignment(&mut self, alignment: AlignmentMode) -> bool {
        if self.config.alignment == alignment {
            return false;
        }
        self.config.alignment = alignment;
        true
    }

    /// Decimates, aligns and merges `selection` into a model.
    #[must_use]
    pub fn build(&self, selection: &[SelectedSeries]) -> ChartModel {
        let alignment = self.config.alignment;
        let prepared = prepare_all(selection, self.config.max_points_per_series, alignment);
        if prepared.is_empty() {
            debug!(selected = selection.len(), "no series to chart");
            return ChartModel::empty(alignment);
        }

        let merged = merge_prepared(&prepared, alignment);
        let Some(x_domain) = merged.x_domain else {
            return ChartModel::empty(alignment);
        };

        let series = selection
            .iter()
            .enumerate()
            .filter(|(_, selected)| merged.keys.contains(&selected.id.key()))
            .map(|(series_index, selected)| SeriesDescriptor {
                id: selected.id.clone(),
                key: selected.id.key(),
                label: selected.id.label(),
                color: self.series_color(series_index, selected),
            })
            .collect();

        let ticks = build_time_ticks(
            x_domain,
            alignment,
            merged.rows.len(),
            self.config.max_ticks,
        );
        debug!(
            rows = merged.rows.len(),
            series = merged.keys.len(),
            ?alignment,
            "built chart model"
        );

        ChartModel {
            alignment,
            has_data: true,
            rows: merged.rows,
            series,
            x_domain: Some(x_domain),
            y_domain: merged.y_domain,
            ticks,
            domain_span_minutes: domain_span_minutes(x_domain, alignment),
        }
    }

    fn series_color(&self, series_index: usize, selected: &SelectedSeries) -> Color {
        if self.config.high_contrast {
            high_contrast_color(series_index)
        } else {
            entity_parameter_color(
                selected.entity_index,
                selected.parameter_index,
                self.config.background,
            )
        }
    }
}
