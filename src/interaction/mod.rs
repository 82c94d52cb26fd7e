//! Pan/zoom/selection interaction for Cartesian time-series charts.
//!
//! Input arrives through [`ChartInput`] and a single
//! [`ZoomPanController::handle`] entry point; chart geometry is read from a
//! host-provided [`ChartSurface`]. Handlers never fail: unready or invalid
//! geometry makes the triggering input a no-op.

mod animation;
mod clock;
mod config;
mod controller;
mod pan_resolver;
mod surface;
mod wheel_zoom_resolver;

use serde::{Deserialize, Serialize};

use crate::core::Domain;

pub use animation::{AnimationDriver, AnimationFrame, AxisTransition, ease_out_cubic};
pub use clock::{FrameClock, FrameRequestId, ManualFrameClock};
pub use config::ZoomPanConfig;
pub use controller::{BaseDomains, ZoomPanController};
pub use surface::{ChartSurface, SurfaceSnapshot};
pub use wheel_zoom_resolver::WheelZoomAxes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// Pointer, wheel and keyboard input consumed by the controller.
///
/// `PointerDown` carries chart-local coordinates (relative to the plotted
/// area). Move and wheel events carry client coordinates because they are
/// tracked globally, outside the chart bounds too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartInput {
    PointerDown {
        chart_x: f64,
        chart_y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    },
    PointerMove {
        client_x: f64,
        client_y: f64,
    },
    PointerUp,
    PointerCancel,
    Wheel {
        client_x: Option<f64>,
        client_y: Option<f64>,
        delta_y: Option<f64>,
        modifiers: Modifiers,
    },
    /// Global Shift key state changed.
    ModifiersChanged {
        shift: bool,
    },
}

/// Result of one handled input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleOutcome {
    /// The host should suppress the event's default action (page scroll,
    /// context menu).
    pub prevent_default: bool,
    /// Active domains or the selection rectangle changed.
    pub view_changed: bool,
}

impl HandleOutcome {
    pub(crate) const IGNORED: Self = Self {
        prevent_default: false,
        view_changed: false,
    };
    pub(crate) const CHANGED: Self = Self {
        prevent_default: false,
        view_changed: true,
    };
}

/// In-progress box-zoom rectangle in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SelectionRect {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    /// Ordered X/Y domains of the rectangle, or `None` when either axis has
    /// zero span.
    #[must_use]
    pub fn committed_domains(self) -> Option<(Domain, Domain)> {
        let x = Domain::from_unordered(self.x1, self.x2).ok()?;
        let y = Domain::from_unordered(self.y1, self.y2).ok()?;
        if x.is_degenerate() || y.is_degenerate() {
            return None;
        }
        Some((x, y))
    }
}
