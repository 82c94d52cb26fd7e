use tracing::trace;

use crate::core::Domain;

use super::clock::{FrameClock, FrameRequestId};

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Start and end domain of one animated axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransition {
    pub from: Domain,
    pub to: Domain,
}

impl AxisTransition {
    #[must_use]
    pub fn new(from: Domain, to: Domain) -> Self {
        Self { from, to }
    }

    #[must_use]
    fn sample(self, eased: f64) -> Domain {
        self.from.lerp(self.to, eased)
    }
}

/// Domains to write for one animation frame. Axes that are not animating
/// are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub x: Option<Domain>,
    pub y: Option<Domain>,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveAnimation {
    x: Option<AxisTransition>,
    y: Option<AxisTransition>,
    started_at_ms: f64,
    frame: FrameRequestId,
}

/// Fixed-duration eased transition between domains.
///
/// At most one animation runs at a time: starting a new one cancels the
/// scheduled frame of the previous one. Frames are delivered by the host via
/// [`AnimationDriver::on_frame`]; ids that do not belong to the running
/// animation are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    duration_ms: f64,
    active: Option<ActiveAnimation>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            active: None,
        }
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a transition, replacing any running one.
    ///
    /// Returns `false` and leaves the running animation untouched when neither
    /// axis has a transition.
    pub fn start<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        x: Option<AxisTransition>,
        y: Option<AxisTransition>,
    ) -> bool {
        if x.is_none() && y.is_none() {
            return false;
        }

        self.cancel(clock);
        let frame = clock.request_frame();
        self.active = Some(ActiveAnimation {
            x,
            y,
            started_at_ms: clock.now_ms(),
            frame,
        });
        trace!(
            frame = frame.raw(),
            animates_x = x.is_some(),
            animates_y = y.is_some(),
            "zoom animation started"
        );
        true
    }

    /// Drops the running animation and its scheduled frame.
    pub fn cancel<C: FrameClock + ?Sized>(&mut self, clock: &mut C) {
        if let Some(active) = self.active.take() {
            clock.cancel_frame(active.frame);
            trace!(frame = active.frame.raw(), "zoom animation cancelled");
        }
    }

    /// Advances the animation for a delivered frame.
    ///
    /// Intermediate frames schedule the next frame; the final frame yields
    /// the exact target domains and clears the animation.
    pub fn on_frame<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        frame: FrameRequestId,
    ) -> Option<AnimationFrame> {
        let active = self.active?;
        if active.frame != frame {
            return None;
        }

        let progress = if self.duration_ms > 0.0 {
            ((clock.now_ms() - active.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress < 1.0 {
            let eased = ease_out_cubic(progress);
            let next = clock.request_frame();
            self.active = Some(ActiveAnimation {
                frame: next,
                ..active
            });
            return Some(AnimationFrame {
                x: active.x.map(|transition| transition.sample(eased)),
                y: active.y.map(|transition| transition.sample(eased)),
                finished: false,
            });
        }

        self.active = None;
        trace!(frame = frame.raw(), "zoom animation finished");
        Some(AnimationFrame {
            x: active.x.map(|transition| transition.to),
            y: active.y.map(|transition| transition.to),
            finished: true,
        })
    }
}
