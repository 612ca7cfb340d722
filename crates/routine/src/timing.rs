//! Timing value types shared by routines.

/// Relative countdown advanced by frame deltas.
///
/// A `Timer` with a non-positive duration is finished immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    remaining: f32,
}

impl Timer {
    /// Creates a timer that finishes after `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Advances the timer by `dt` seconds and returns `true` once finished.
    ///
    /// Ticking a finished timer keeps returning `true`.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.finished()
    }

    /// Returns `true` if the timer has run out.
    pub fn finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Seconds left on the timer (clamped to zero).
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

/// Absolute-clock deadline for interval scheduling.
///
/// Cooldowns compare against a monotonically increasing clock instead of
/// accumulating deltas, so intervals stay anchored to the timestamps at which
/// they were last scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    ready_at: f64,
}

impl Cooldown {
    /// A cooldown that is ready immediately.
    pub fn ready_now() -> Self {
        Self { ready_at: 0.0 }
    }

    /// A cooldown that becomes ready `delay` seconds after `now`.
    pub fn after(now: f64, delay: f32) -> Self {
        Self {
            ready_at: now + delay as f64,
        }
    }

    /// Returns `true` if the deadline has passed.
    pub fn ready(&self, now: f64) -> bool {
        now >= self.ready_at
    }

    /// Re-arms the cooldown `delay` seconds from `now`.
    pub fn schedule(&mut self, now: f64, delay: f32) {
        self.ready_at = now + delay as f64;
    }
}
