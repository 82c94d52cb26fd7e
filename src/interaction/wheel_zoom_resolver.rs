use serde::{Deserialize, Serialize};

use crate::core::Domain;

use super::Modifiers;

/// Axes affected by one wheel zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelZoomAxes {
    Both,
    XOnly,
    YOnly,
}

impl WheelZoomAxes {
    /// Ctrl restricts zoom to Y, Shift (without Ctrl) to X.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.ctrl {
            Self::YOnly
        } else if modifiers.shift {
            Self::XOnly
        } else {
            Self::Both
        }
    }

    #[must_use]
    pub fn applies_x(self) -> bool {
        matches!(self, Self::Both | Self::XOnly)
    }

    #[must_use]
    pub fn applies_y(self) -> bool {
        matches!(self, Self::Both | Self::YOnly)
    }
}

/// `exp(delta_y * zoom_speed)` clamped into `[min_factor, max_factor]`.
///
/// Returns `None` for missing, zero or non-finite deltas.
pub(super) fn resolve_wheel_zoom_factor(
    delta_y: Option<f64>,
    zoom_speed: f64,
    min_factor: f64,
    max_factor: f64,
) -> Option<f64> {
    let delta_y = delta_y?;
    if !delta_y.is_finite() || delta_y == 0.0 {
        return None;
    }
    let factor = (delta_y * zoom_speed).exp().clamp(min_factor, max_factor);
    factor.is_finite().then_some(factor)
}

/// Smallest span wheel zoom may reach on an axis.
///
/// A degenerate base domain counts as span `1` so the floor stays positive.
pub(super) fn resolve_min_span(base: Domain, min_span_factor: f64) -> f64 {
    let base_span = base.span();
    let base_span = if base_span == 0.0 { 1.0 } else { base_span };
    base_span * min_span_factor
}

/// Scales `current` around `center` by `factor`, keeping the center's
/// relative position inside the domain.
///
/// Returns `None` when the current span is zero or the result is not finite.
pub(super) fn resolve_zoom_around_center(
    current: Domain,
    center: f64,
    factor: f64,
    min_span: f64,
) -> Option<Domain> {
    if !center.is_finite() {
        return None;
    }
    let current_span = current.span();
    if !current_span.is_finite() || current_span <= 0.0 {
        return None;
    }

    let next_span = (current_span * factor).max(min_span);
    let relative = (center - current.min()) / current_span;
    let min = center - relative * next_span;
    let max = min + next_span;
    Domain::new(min, max).ok()
}

#[cfg(test)]
mod tests {
    use super::{
        WheelZoomAxes, resolve_min_span, resolve_wheel_zoom_factor, resolve_zoom_around_center,
    };
    use crate::core::Domain;
    use crate::interaction::Modifiers;

    #[test]
    fn modifiers_select_axes() {
        assert_eq!(WheelZoomAxes::from_modifiers(Modifiers::NONE), WheelZoomAxes::Both);
        assert_eq!(WheelZoomAxes::from_modifiers(Modifiers::SHIFT), WheelZoomAxes::XOnly);
        assert_eq!(WheelZoomAxes::from_modifiers(Modifiers::CTRL), WheelZoomAxes::YOnly);
        let both = Modifiers {
            shift: true,
            ctrl: true,
        };
        assert_eq!(WheelZoomAxes::from_modifiers(both), WheelZoomAxes::YOnly);
    }

    #[test]
    fn factor_is_clamped() {
        let factor = resolve_wheel_zoom_factor(Some(10_000.0), 0.005, 0.2, 5.0).expect("factor");
        assert_eq!(factor, 5.0);
        let factor = resolve_wheel_zoom_factor(Some(-10_000.0), 0.005, 0.2, 5.0).expect("factor");
        assert_eq!(factor, 0.2);
    }

    #[test]
    fn zero_missing_or_nan_delta_has_no_factor() {
        assert!(resolve_wheel_zoom_factor(Some(0.0), 0.005, 0.2, 5.0).is_none());
        assert!(resolve_wheel_zoom_factor(None, 0.005, 0.2, 5.0).is_none());
        assert!(resolve_wheel_zoom_factor(Some(f64::NAN), 0.005, 0.2, 5.0).is_none());
    }

    #[test]
    fn zoom_keeps_center_relative_position() {
        let current = Domain::new(0.0, 100.0).expect("domain");
        let next = resolve_zoom_around_center(current, 25.0, 0.5, 0.0).expect("zoom");
        assert!((next.min() - 12.5).abs() <= 1e-12);
        assert!((next.max() - 62.5).abs() <= 1e-12);
    }

    #[test]
    fn zoom_respects_floor() {
        let current = Domain::new(0.0, 1.0).expect("domain");
        let next = resolve_zoom_around_center(current, 0.5, 0.2, 0.5).expect("zoom");
        assert!((next.span() - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn degenerate_domains() {
        let flat = Domain::point(42.0).expect("flat");
        assert_eq!(resolve_min_span(flat, 0.001), 0.001);
        assert!(resolve_zoom_around_center(flat, 42.0, 0.5, 0.001).is_none());
    }
}
