//! Health-driven phase tracking.
//!
//! The boss moves through three phases gated by its health ratio. Automatic
//! tracking is monotonic: once a later phase is reached it is never revisited,
//! even if health is restored. Only explicit debug overrides move backwards.

use strum::Display;

/// Encounter phase.
///
/// Ordering matters: later phases compare greater, which is what the
/// monotonic advance check relies on.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[strum(serialize = "phase 1")]
    One,
    #[strum(serialize = "phase 2")]
    Two,
    #[strum(serialize = "phase 3")]
    Three,
}

impl Phase {
    /// Health-ratio threshold below which phase 1 ends.
    pub const PHASE2_THRESHOLD: f32 = 0.70;
    /// Health-ratio threshold at or below which phase 3 begins.
    pub const PHASE3_THRESHOLD: f32 = 0.40;

    /// Maps a health ratio to a phase using the fixed thresholds.
    ///
    /// Exactly 70% is still phase 1; exactly 40% is already phase 3.
    pub fn for_ratio(ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        if ratio >= Self::PHASE2_THRESHOLD {
            Phase::One
        } else if ratio > Self::PHASE3_THRESHOLD {
            Phase::Two
        } else {
            Phase::Three
        }
    }

    /// 1-based phase number, for logs and debug commands.
    pub fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
            Phase::Three => 3,
        }
    }

    /// Phase from a 1-based number, if valid.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Phase::One),
            2 => Some(Phase::Two),
            3 => Some(Phase::Three),
            _ => None,
        }
    }
}

/// A phase change reported by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: Phase,
    pub to: Phase,
}

/// Monotonic phase tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTracker {
    current: Phase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            current: Phase::One,
        }
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Observes the current vitals and advances the phase if warranted.
    ///
    /// Never regresses: a restored health bar keeps the current phase.
    /// Returns the transition when one occurred.
    pub fn observe(&mut self, health: f32, max_health: f32) -> Option<PhaseTransition> {
        if max_health <= 0.0 {
            return None;
        }
        let candidate = Phase::for_ratio(health / max_health);
        if candidate > self.current {
            let transition = PhaseTransition {
                from: self.current,
                to: candidate,
            };
            self.current = candidate;
            return Some(transition);
        }
        None
    }

    /// Debug override: jumps to any phase, in either direction.
    ///
    /// Returns the transition, or `None` when already in the target phase.
    pub fn force(&mut self, phase: Phase) -> Option<PhaseTransition> {
        if phase == self.current {
            return None;
        }
        let transition = PhaseTransition {
            from: self.current,
            to: phase,
        };
        self.current = phase;
        Some(transition)
    }

    /// Returns to phase 1 (encounter reset).
    pub fn reset(&mut self) {
        self.current = Phase::One;
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_table() {
        // Boundary cases pinned by the balance sheet.
        assert_eq!(Phase::for_ratio(1.00), Phase::One);
        assert_eq!(Phase::for_ratio(0.70), Phase::One);
        assert_eq!(Phase::for_ratio(0.69), Phase::Two);
        assert_eq!(Phase::for_ratio(0.41), Phase::Two);
        assert_eq!(Phase::for_ratio(0.40), Phase::Three);
        assert_eq!(Phase::for_ratio(0.39), Phase::Three);
        assert_eq!(Phase::for_ratio(0.0), Phase::Three);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(Phase::for_ratio(1.7), Phase::One);
        assert_eq!(Phase::for_ratio(-0.3), Phase::Three);
    }

    #[test]
    fn phase_is_non_decreasing_as_health_drops() {
        let mut tracker = PhaseTracker::new();
        let mut last = tracker.current();
        for health in (0..=100).rev() {
            tracker.observe(health as f32, 100.0);
            assert!(tracker.current() >= last);
            last = tracker.current();
        }
        assert_eq!(tracker.current(), Phase::Three);
    }

    #[test]
    fn observe_reports_each_transition_once() {
        let mut tracker = PhaseTracker::new();
        assert_eq!(tracker.observe(100.0, 100.0), None);
        assert_eq!(
            tracker.observe(69.0, 100.0),
            Some(PhaseTransition {
                from: Phase::One,
                to: Phase::Two,
            })
        );
        assert_eq!(tracker.observe(69.0, 100.0), None);
        assert_eq!(
            tracker.observe(39.0, 100.0),
            Some(PhaseTransition {
                from: Phase::Two,
                to: Phase::Three,
            })
        );
    }

    #[test]
    fn healing_does_not_regress_the_phase() {
        let mut tracker = PhaseTracker::new();
        tracker.observe(39.0, 100.0);
        assert_eq!(tracker.current(), Phase::Three);
        assert_eq!(tracker.observe(100.0, 100.0), None);
        assert_eq!(tracker.current(), Phase::Three);
    }

    #[test]
    fn skipping_a_phase_is_reported_as_one_transition() {
        let mut tracker = PhaseTracker::new();
        let transition = tracker.observe(10.0, 100.0).unwrap();
        assert_eq!(transition.from, Phase::One);
        assert_eq!(transition.to, Phase::Three);
    }

    #[test]
    fn force_moves_in_both_directions() {
        let mut tracker = PhaseTracker::new();
        tracker.force(Phase::Three);
        assert_eq!(tracker.current(), Phase::Three);
        let back = tracker.force(Phase::One).unwrap();
        assert_eq!(back.from, Phase::Three);
        assert_eq!(back.to, Phase::One);
        assert_eq!(tracker.force(Phase::One), None);
    }

    #[test]
    fn zero_max_health_is_a_no_op() {
        let mut tracker = PhaseTracker::new();
        assert_eq!(tracker.observe(0.0, 0.0), None);
        assert_eq!(tracker.current(), Phase::One);
    }
}
