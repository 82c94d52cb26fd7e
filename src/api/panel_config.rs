use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::ZoomPanConfig;
use crate::render::Color;
use crate::series::AggregationConfig;

/// Stroke and overlay styling of the panel's render frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_selection_fill")]
    pub selection_fill: Color,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            selection_fill: default_selection_fill(),
        }
    }
}

impl PanelStyle {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line_width must be finite and > 0".to_owned(),
            ));
        }
        self.selection_fill.validate()?;
        Ok(self)
    }
}

fn default_line_width() -> f64 {
    2.0
}

fn default_selection_fill() -> Color {
    Color::rgb(0.5, 0.5, 0.5).with_alpha(0.25)
}

/// Public panel bootstrap configuration.
///
/// Serializable so hosts can persist chart preferences next to the rest of
/// their settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub zoom_pan: ZoomPanConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub style: PanelStyle,
}

impl PanelConfig {
    #[must_use]
    pub fn with_zoom_pan(mut self, zoom_pan: ZoomPanConfig) -> Self {
        self.zoom_pan = zoom_pan;
        self
    }

    #[must_use]
    pub fn with_aggregation(mut self, aggregation: AggregationConfig) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        Ok(Self {
            zoom_pan: self.zoom_pan.validate()?,
            aggregation: self.aggregation.validate()?,
            style: self.style.validate()?,
        })
    }

    /// Parses and validates a config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse panel config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize panel config json: {e}"))
        })
    }
}
