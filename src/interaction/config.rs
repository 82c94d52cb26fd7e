use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tuning for wheel zoom, zoom floor and the zoom animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPanConfig {
    /// Exponent multiplier applied to wheel `delta_y`.
    #[serde(default = "default_zoom_speed")]
    pub zoom_speed: f64,
    /// Smallest fraction of the base span reachable by wheel zoom.
    #[serde(default = "default_min_span_factor")]
    pub min_span_factor: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
    #[serde(default = "default_min_zoom_factor")]
    pub min_zoom_factor: f64,
    #[serde(default = "default_max_zoom_factor")]
    pub max_zoom_factor: f64,
    /// How long the interacting flag stays raised after a wheel zoom.
    #[serde(default = "default_wheel_interacting_timeout_ms")]
    pub wheel_interacting_timeout_ms: f64,
}

impl Default for ZoomPanConfig {
    fn default() -> Self {
        Self {
            zoom_speed: default_zoom_speed(),
            min_span_factor: default_min_span_factor(),
            animation_duration_ms: default_animation_duration_ms(),
            min_zoom_factor: default_min_zoom_factor(),
            max_zoom_factor: default_max_zoom_factor(),
            wheel_interacting_timeout_ms: default_wheel_interacting_timeout_ms(),
        }
    }
}

impl ZoomPanConfig {
    #[must_use]
    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    #[must_use]
    pub fn with_min_span_factor(mut self, min_span_factor: f64) -> Self {
        self.min_span_factor = min_span_factor;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "zoom_speed must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_span_factor.is_finite()
            || self.min_span_factor <= 0.0
            || self.min_span_factor > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "min_span_factor must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.animation_duration_ms.is_finite() || self.animation_duration_ms < 0.0 {
            return Err(ChartError::InvalidConfig(
                "animation_duration_ms must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_zoom_factor.is_finite()
            || self.min_zoom_factor <= 0.0
            || self.min_zoom_factor > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "min_zoom_factor must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.max_zoom_factor.is_finite() || self.max_zoom_factor < 1.0 {
            return Err(ChartError::InvalidConfig(
                "max_zoom_factor must be finite and >= 1".to_owned(),
            ));
        }
        if !self.wheel_interacting_timeout_ms.is_finite() || self.wheel_interacting_timeout_ms < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "wheel_interacting_timeout_ms must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_zoom_speed() -> f64 {
    0.005
}

fn default_min_span_factor() -> f64 {
    0.001
}

fn default_animation_duration_ms() -> f64 {
    140.0
}

fn default_min_zoom_factor() -> f64 {
    0.2
}

fn default_max_zoom_factor() -> f64 {
    5.0
}

fn default_wheel_interacting_timeout_ms() -> f64 {
    150.0
}

#[cfg(test)]
mod tests {
    use super::ZoomPanConfig;

    #[test]
    fn defaults_are_valid() {
        assert!(ZoomPanConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ZoomPanConfig =
            serde_json::from_str(r#"{"zoom_speed":0.01}"#).expect("parse config");
        assert_eq!(config.zoom_speed, 0.01);
        assert_eq!(config.animation_duration_ms, 140.0);
        assert_eq!(config.min_span_factor, 0.001);
    }

    #[test]
    fn rejects_inverted_zoom_clamp() {
        let mut config = ZoomPanConfig::default();
        config.max_zoom_factor = 0.5;
        let err = config.validate().expect_err("max factor below one");
        assert!(format!("{err}").contains("max_zoom_factor"));
    }

    #[test]
    fn rejects_non_positive_min_span_factor() {
        let err = ZoomPanConfig::default()
            .with_min_span_factor(0.0)
            .validate()
            .expect_err("zero floor");
        assert!(format!("{err}").contains("min_span_factor"));
    }

    #[test]
    fn builders_feed_validation() {
        let config = ZoomPanConfig::default()
            .with_zoom_speed(0.004)
            .with_animation_duration_ms(0.0)
            .validate()
            .expect("instant animation is allowed");
        assert_eq!(config.zoom_speed, 0.004);
        assert_eq!(config.animation_duration_ms, 0.0);

        let err = ZoomPanConfig::default()
            .with_zoom_speed(f64::NAN)
            .validate()
            .expect_err("nan speed");
        assert!(format!("{err}").contains("zoom_speed"));

        let err = ZoomPanConfig::default()
            .with_animation_duration_ms(-1.0)
            .validate()
            .expect_err("negative duration");
        assert!(format!("{err}").contains("animation_duration_ms"));
    }
}
