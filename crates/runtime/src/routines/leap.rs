//! Parabolic leap interpolation.

use encounter_core::{EncounterConfig, Vec2};
use routine::Step;

/// Moves a position along a parabolic arc from start to destination.
///
/// Horizontal motion is a straight lerp; the vertical arc `4t(1-t)` peaks at
/// the midpoint with the configured height. The final frame snaps exactly to
/// the destination.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LeapMotion {
    start: Vec2,
    dest: Vec2,
    duration: f32,
    arc_height: f32,
    elapsed: f32,
}

impl LeapMotion {
    /// Shortest permitted leap, guarding against zero division.
    const MIN_DURATION: f32 = 0.05;

    pub fn new(start: Vec2, dest: Vec2, cfg: &EncounterConfig) -> Self {
        Self {
            start,
            dest,
            duration: cfg.leap_duration.max(Self::MIN_DURATION),
            arc_height: cfg.leap_arc_height,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, position: &mut Vec2, dt: f32) -> Step {
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        if t >= 1.0 {
            *position = self.dest;
            return Step::Complete;
        }
        let mut pos = self.start.lerp(self.dest, t);
        pos.y += 4.0 * t * (1.0 - t) * self.arc_height;
        *position = pos;
        Step::Running
    }
}
