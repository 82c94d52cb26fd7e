/// Handle of one scheduled animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(u64);

impl FrameRequestId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Time source and per-frame scheduler used by the animation driver.
///
/// Hosts back this with their display-refresh callback; the host then calls
/// the controller's `on_animation_frame` with the returned id when the frame
/// fires. Cancelled ids must never be delivered.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
}

/// Deterministic clock for headless hosts and tests.
///
/// Time only moves when `advance` or `set_now` is called; requested frames
/// are queued until the host takes them.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameClock {
    now_ms: f64,
    next_id: u64,
    pending: Vec<FrameRequestId>,
}

impl ManualFrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }

    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Most recently requested frame that is still outstanding.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending.last().copied()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the oldest outstanding frame.
    pub fn take_frame(&mut self) -> Option<FrameRequestId> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }
}

impl FrameClock for ManualFrameClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId::new(self.next_id);
        self.next_id += 1;
        self.pending.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.pending.retain(|pending| *pending != id);
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameClock, ManualFrameClock};

    #[test]
    fn cancelled_frames_are_not_pending() {
        let mut clock = ManualFrameClock::new();
        let first = clock.request_frame();
        let second = clock.request_frame();
        clock.cancel_frame(first);
        assert_eq!(clock.pending_count(), 1);
        assert_eq!(clock.take_frame(), Some(second));
        assert_eq!(clock.take_frame(), None);
    }

    #[test]
    fn time_moves_only_when_advanced() {
        let mut clock = ManualFrameClock::starting_at(10.0);
        assert_eq!(clock.now_ms(), 10.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 26.0);
    }
}
