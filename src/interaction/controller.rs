use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Domain, normalize_scale_value};
use crate::error::ChartResult;

use super::animation::{AnimationDriver, AxisTransition};
use super::clock::{FrameClock, FrameRequestId, ManualFrameClock};
use super::config::ZoomPanConfig;
use super::pan_resolver::resolve_pan_domains;
use super::surface::ChartSurface;
use super::wheel_zoom_resolver::{
    WheelZoomAxes, resolve_min_span, resolve_wheel_zoom_factor, resolve_zoom_around_center,
};
use super::{
    ChartInput, HandleOutcome, InteractionMode, Modifiers, PointerButton, SelectionRect,
};

/// Full data-implied X/Y domains used as the reset target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseDomains {
    pub x: Domain,
    pub y: Domain,
}

impl BaseDomains {
    #[must_use]
    pub fn new(x: Domain, y: Domain) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanSession {
    start_x: Domain,
    start_y: Domain,
    start_client_x: f64,
    start_client_y: f64,
    plot_width: f64,
    plot_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SelectionSession {
    start_client_x: f64,
    start_client_y: f64,
    start_chart_x: f64,
    start_chart_y: f64,
    plot_width: f64,
    plot_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Panning(PanSession),
    Selecting(SelectionSession),
}

/// Domain store and gesture state machine for one chart.
///
/// - drag: box-zoom selection
/// - Shift + drag: pan
/// - wheel: 2D zoom; Shift + wheel zooms X only, Ctrl + wheel zooms Y only
/// - secondary button: discard the gesture in progress
///
/// Overrides are `None` while the chart shows its base domains. Changing the
/// base domains (or the reset dependencies) resets the view.
pub struct ZoomPanController<C: FrameClock = ManualFrameClock> {
    config: ZoomPanConfig,
    clock: C,
    base: Option<BaseDomains>,
    reset_fingerprint: Option<u64>,
    x_override: Option<Domain>,
    y_override: Option<Domain>,
    selection: Option<SelectionRect>,
    gesture: Gesture,
    shift_held: bool,
    animation: AnimationDriver,
    wheel_interacting_until_ms: Option<f64>,
}

impl ZoomPanController<ManualFrameClock> {
    /// Controller driven by a [`ManualFrameClock`].
    pub fn headless(config: ZoomPanConfig) -> ChartResult<Self> {
        Self::new(config, ManualFrameClock::new())
    }
}

impl<C: FrameClock> ZoomPanController<C> {
    pub fn new(config: ZoomPanConfig, clock: C) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            clock,
            base: None,
            reset_fingerprint: None,
            x_override: None,
            y_override: None,
            selection: None,
            gesture: Gesture::Idle,
            shift_held: false,
            animation: AnimationDriver::new(config.animation_duration_ms),
            wheel_interacting_until_ms: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> ZoomPanConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ZoomPanConfig) -> ChartResult<()> {
        let config = config.validate()?;
        self.animation.set_duration_ms(config.animation_duration_ms);
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[must_use]
    pub fn base_domains(&self) -> Option<BaseDomains> {
        self.base
    }

    /// Replaces the base domains; `None` means the chart has no data.
    ///
    /// Returns `true` when the value changed and the view was reset.
    pub fn set_base_domains(&mut self, base: Option<BaseDomains>) -> bool {
        if self.base == base {
            return false;
        }
        debug!(
            x = ?base.map(|b| b.x.bounds()),
            y = ?base.map(|b| b.y.bounds()),
            "base domains changed"
        );
        self.base = base;
        self.reset_view();
        true
    }

    /// Resets the view whenever `deps` hashes differently from the last call.
    ///
    /// Used for inputs that invalidate the view without changing the base
    /// domains, such as the alignment mode.
    pub fn set_reset_dependencies<T: Hash + ?Sized>(&mut self, deps: &T) -> bool {
        let mut hasher = DefaultHasher::new();
        deps.hash(&mut hasher);
        let fingerprint = hasher.finish();
        if self.reset_fingerprint == Some(fingerprint) {
            return false;
        }
        self.reset_fingerprint = Some(fingerprint);
        self.reset_view();
        true
    }

    #[must_use]
    pub fn x_override(&self) -> Option<Domain> {
        self.x_override
    }

    #[must_use]
    pub fn y_override(&self) -> Option<Domain> {
        self.y_override
    }

    /// X domain currently displayed: the override, else the base domain.
    #[must_use]
    pub fn active_x_domain(&self) -> Option<Domain> {
        self.x_override.or(self.base.map(|base| base.x))
    }

    #[must_use]
    pub fn active_y_domain(&self) -> Option<Domain> {
        self.y_override.or(self.base.map(|base| base.y))
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self.gesture {
            Gesture::Idle => InteractionMode::Idle,
            Gesture::Panning(_) => InteractionMode::Panning,
            Gesture::Selecting(_) => InteractionMode::Selecting,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// `true` while dragging, animating, or shortly after a wheel zoom.
    /// Hosts use it to hide tooltips.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        if self.gesture != Gesture::Idle || self.animation.is_active() {
            return true;
        }
        self.wheel_interacting_until_ms
            .is_some_and(|until| self.clock.now_ms() < until)
    }

    /// Clears overrides, the selection, any gesture and any animation.
    ///
    /// Idempotent; valid with or without base domains.
    pub fn reset_view(&mut self) {
        self.animation.cancel(&mut self.clock);
        self.x_override = None;
        self.y_override = None;
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.wheel_interacting_until_ms = None;
        trace!("view reset");
    }

    /// Discards the gesture in progress, keeping committed overrides.
    ///
    /// Returns `true` when there was something to discard.
    pub fn cancel_in_progress(&mut self) -> bool {
        let had_gesture = self.gesture != Gesture::Idle || self.selection.is_some();
        self.gesture = Gesture::Idle;
        self.selection = None;
        if had_gesture {
            debug!("in-progress gesture cancelled");
        }
        had_gesture
    }

    /// Single entry point for pointer, wheel and modifier input.
    pub fn handle(&mut self, input: ChartInput, surface: &dyn ChartSurface) -> HandleOutcome {
        match input {
            ChartInput::PointerDown {
                chart_x,
                chart_y,
                button,
                modifiers,
            } => self.pointer_down(chart_x, chart_y, button, modifiers, surface),
            ChartInput::PointerMove { client_x, client_y } => {
                self.pointer_move(client_x, client_y, surface)
            }
            ChartInput::PointerUp | ChartInput::PointerCancel => self.pointer_up(),
            ChartInput::Wheel {
                client_x,
                client_y,
                delta_y,
                modifiers,
            } => self.wheel(client_x, client_y, delta_y, modifiers, surface),
            ChartInput::ModifiersChanged { shift } => {
                self.shift_held = shift;
                HandleOutcome::IGNORED
            }
        }
    }

    /// Applies a delivered animation frame. Returns `true` when the active
    /// domains changed.
    pub fn on_animation_frame(&mut self, frame: FrameRequestId) -> bool {
        let Some(out) = self.animation.on_frame(&mut self.clock, frame) else {
            return false;
        };
        if let Some(x) = out.x {
            self.x_override = Some(x);
        }
        if let Some(y) = out.y {
            self.y_override = Some(y);
        }
        true
    }

    fn pointer_down(
        &mut self,
        chart_x: f64,
        chart_y: f64,
        button: PointerButton,
        modifiers: Modifiers,
        surface: &dyn ChartSurface,
    ) -> HandleOutcome {
        match button {
            PointerButton::Primary => {}
            PointerButton::Secondary => {
                let view_changed = self.cancel_in_progress();
                return HandleOutcome {
                    prevent_default: true,
                    view_changed,
                };
            }
            other => {
                trace!(?other, "pointer down ignored for button");
                return HandleOutcome::IGNORED;
            }
        }

        let Some(base) = self.base else {
            trace!("pointer down ignored without base domains");
            return HandleOutcome::IGNORED;
        };
        if !chart_x.is_finite() || !chart_y.is_finite() {
            return HandleOutcome::IGNORED;
        }
        let Some((x_scale, y_scale)) = surface.scales() else {
            debug!("pointer down ignored: chart scales unavailable");
            return HandleOutcome::IGNORED;
        };

        let x_value = normalize_scale_value(&x_scale.invert(chart_x));
        let y_value = normalize_scale_value(&y_scale.invert(chart_y));
        if !x_value.is_finite() || !y_value.is_finite() {
            warn!(chart_x, chart_y, x_value, y_value, "invalid scale inversion results");
            return HandleOutcome::IGNORED;
        }

        let (Some(offset), Some(container)) = (surface.plot_offset(), surface.container_rect())
        else {
            warn!("invalid chart offset or container rect");
            return HandleOutcome::IGNORED;
        };
        if !offset.is_valid() {
            warn!(
                width = offset.width,
                height = offset.height,
                "invalid chart offset or container rect"
            );
            return HandleOutcome::IGNORED;
        }

        let start_client_x = container.left + offset.left + chart_x;
        let start_client_y = container.top + offset.top + chart_y;

        self.animation.cancel(&mut self.clock);

        if modifiers.shift || self.shift_held {
            self.gesture = Gesture::Panning(PanSession {
                start_x: self.x_override.unwrap_or(base.x),
                start_y: self.y_override.unwrap_or(base.y),
                start_client_x,
                start_client_y,
                plot_width: offset.width,
                plot_height: offset.height,
            });
            self.selection = None;
            trace!(start_client_x, start_client_y, "pan started");
        } else {
            self.gesture = Gesture::Selecting(SelectionSession {
                start_client_x,
                start_client_y,
                start_chart_x: chart_x,
                start_chart_y: chart_y,
                plot_width: offset.width,
                plot_height: offset.height,
            });
            self.selection = Some(SelectionRect::at(x_value, y_value));
            trace!(x_value, y_value, "zoom selection started");
        }

        HandleOutcome::CHANGED
    }

    fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        surface: &dyn ChartSurface,
    ) -> HandleOutcome {
        match self.gesture {
            Gesture::Idle => HandleOutcome::IGNORED,
            Gesture::Selecting(session) => {
                let delta_x = client_x - session.start_client_x;
                let delta_y = client_y - session.start_client_y;
                if !delta_x.is_finite() || !delta_y.is_finite() {
                    return HandleOutcome::IGNORED;
                }
                let Some((x_scale, y_scale)) = surface.scales() else {
                    return HandleOutcome::IGNORED;
                };

                let chart_x = (session.start_chart_x + delta_x).clamp(0.0, session.plot_width);
                let chart_y = (session.start_chart_y + delta_y).clamp(0.0, session.plot_height);
                let x_value = normalize_scale_value(&x_scale.invert(chart_x));
                let y_value = normalize_scale_value(&y_scale.invert(chart_y));
                if !x_value.is_finite() || !y_value.is_finite() {
                    return HandleOutcome::IGNORED;
                }

                let Some(selection) = self.selection.as_mut() else {
                    return HandleOutcome::IGNORED;
                };
                selection.x2 = x_value;
                selection.y2 = y_value;
                HandleOutcome::CHANGED
            }
            Gesture::Panning(session) => {
                let Some((x, y)) = resolve_pan_domains(
                    session.start_x,
                    session.start_y,
                    client_x - session.start_client_x,
                    client_y - session.start_client_y,
                    session.plot_width,
                    session.plot_height,
                ) else {
                    return HandleOutcome::IGNORED;
                };

                self.animation.cancel(&mut self.clock);
                self.x_override = Some(x);
                self.y_override = Some(y);
                HandleOutcome::CHANGED
            }
        }
    }

    fn pointer_up(&mut self) -> HandleOutcome {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        let selection = self.selection.take();
        if gesture == Gesture::Idle {
            return if selection.is_some() {
                HandleOutcome::CHANGED
            } else {
                HandleOutcome::IGNORED
            };
        }

        if let (Gesture::Selecting(_), Some(rect)) = (gesture, selection) {
            match rect.committed_domains() {
                Some((x, y)) => {
                    self.animation.cancel(&mut self.clock);
                    self.x_override = Some(x);
                    self.y_override = Some(y);
                    debug!(x = ?x.bounds(), y = ?y.bounds(), "zoom selection committed");
                }
                None => trace!("degenerate zoom selection discarded"),
            }
        }

        HandleOutcome::CHANGED
    }

    fn wheel(
        &mut self,
        client_x: Option<f64>,
        client_y: Option<f64>,
        delta_y: Option<f64>,
        modifiers: Modifiers,
        surface: &dyn ChartSurface,
    ) -> HandleOutcome {
        let Some(base) = self.base else {
            return HandleOutcome::IGNORED;
        };
        if self.gesture != Gesture::Idle {
            return HandleOutcome::IGNORED;
        }
        let (Some(offset), Some(container)) = (surface.plot_offset(), surface.container_rect())
        else {
            return HandleOutcome::IGNORED;
        };
        let (Some(client_x), Some(client_y)) = (client_x, client_y) else {
            return HandleOutcome::IGNORED;
        };

        let chart_x = client_x - container.left - offset.left;
        let chart_y = client_y - container.top - offset.top;
        if !offset.contains_local(chart_x, chart_y) {
            trace!(chart_x, chart_y, "wheel outside plot area");
            return HandleOutcome::IGNORED;
        }

        let Some(factor) = resolve_wheel_zoom_factor(
            delta_y,
            self.config.zoom_speed,
            self.config.min_zoom_factor,
            self.config.max_zoom_factor,
        ) else {
            return HandleOutcome::IGNORED;
        };
        let Some((x_scale, y_scale)) = surface.scales() else {
            return HandleOutcome::IGNORED;
        };

        let axes = WheelZoomAxes::from_modifiers(modifiers);
        let current_x = self.x_override.unwrap_or(base.x);
        let current_y = self.y_override.unwrap_or(base.y);

        let next_x = if axes.applies_x() {
            resolve_zoom_around_center(
                current_x,
                normalize_scale_value(&x_scale.invert(chart_x)),
                factor,
                resolve_min_span(base.x, self.config.min_span_factor),
            )
        } else {
            None
        };
        let next_y = if axes.applies_y() {
            resolve_zoom_around_center(
                current_y,
                normalize_scale_value(&y_scale.invert(chart_y)),
                factor,
                resolve_min_span(base.y, self.config.min_span_factor),
            )
        } else {
            None
        };

        if next_x.is_none() && next_y.is_none() {
            return HandleOutcome::IGNORED;
        }

        self.wheel_interacting_until_ms =
            Some(self.clock.now_ms() + self.config.wheel_interacting_timeout_ms);
        self.animation.start(
            &mut self.clock,
            next_x.map(|to| AxisTransition::new(current_x, to)),
            next_y.map(|to| AxisTransition::new(current_y, to)),
        );
        trace!(factor, ?axes, "wheel zoom scheduled");

        HandleOutcome {
            prevent_default: true,
            view_changed: false,
        }
    }
}

impl<C: FrameClock> Drop for ZoomPanController<C> {
    fn drop(&mut self) {
        self.animation.cancel(&mut self.clock);
    }
}
