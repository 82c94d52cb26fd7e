use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How the shared X axis is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
    /// Calendar time in epoch milliseconds.
    #[default]
    Absolute,
    /// Seconds elapsed since each entity's own start.
    Relative,
}

/// One (entity, parameter) pair, e.g. flight 42 / `AltMSL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId {
    pub entity_id: u64,
    pub parameter: String,
}

impl SeriesId {
    #[must_use]
    pub fn new(entity_id: u64, parameter: impl Into<String>) -> Self {
        Self {
            entity_id,
            parameter: parameter.into(),
        }
    }

    /// Stable column key: `f{entity}_{parameter}` with every run of
    /// non-alphanumeric characters replaced by `_`.
    #[must_use]
    pub fn key(&self) -> SeriesKey {
        let mut sanitized = String::with_capacity(self.parameter.len());
        let mut in_run = false;
        for ch in self.parameter.chars() {
            if ch.is_ascii_alphanumeric() {
                sanitized.push(ch);
                in_run = false;
            } else if !in_run {
                sanitized.push('_');
                in_run = true;
            }
        }
        SeriesKey(format!("f{}_{sanitized}", self.entity_id))
    }

    /// Legend/tooltip label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} — {}", self.entity_id, self.parameter)
    }
}

/// Column key of one series in merged rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesKey(String);

impl SeriesKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `(t, value)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    pub t: f64,
    pub v: f64,
}

impl TimedValue {
    #[must_use]
    pub const fn new(t: f64, v: f64) -> Self {
        Self { t, v }
    }
}

/// Raw recorded series: elapsed seconds from the entity's start, with one
/// value per timestamp, ordered by time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    elapsed_seconds: Vec<f64>,
    values: Vec<f64>,
}

impl RawSeries {
    pub fn new(elapsed_seconds: Vec<f64>, values: Vec<f64>) -> ChartResult<Self> {
        if elapsed_seconds.len() != values.len() {
            return Err(ChartError::InvalidData(format!(
                "series has {} timestamps but {} values",
                elapsed_seconds.len(),
                values.len()
            )));
        }
        Ok(Self {
            elapsed_seconds,
            values,
        })
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let (elapsed_seconds, values) = pairs.iter().copied().unzip();
        Self {
            elapsed_seconds,
            values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elapsed_seconds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elapsed_seconds.is_empty()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> &[f64] {
        &self.elapsed_seconds
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn sample(&self, index: usize) -> Option<TimedValue> {
        Some(TimedValue::new(
            *self.elapsed_seconds.get(index)?,
            *self.values.get(index)?,
        ))
    }
}

/// A selected series with everything needed to place it on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSeries {
    pub id: SeriesId,
    /// Absolute start time of the owning entity; required in absolute mode.
    pub entity_start: Option<DateTime<Utc>>,
    /// Position of the entity in the selection, used for coloring.
    pub entity_index: usize,
    /// Position of the parameter within its entity, used for coloring.
    pub parameter_index: usize,
    pub raw: RawSeries,
}

impl SelectedSeries {
    #[must_use]
    pub fn new(id: SeriesId, entity_start: Option<DateTime<Utc>>, raw: RawSeries) -> Self {
        Self {
            id,
            entity_start,
            entity_index: 0,
            parameter_index: 0,
            raw,
        }
    }

    #[must_use]
    pub fn with_palette_slot(mut self, entity_index: usize, parameter_index: usize) -> Self {
        self.entity_index = entity_index;
        self.parameter_index = parameter_index;
        self
    }
}
