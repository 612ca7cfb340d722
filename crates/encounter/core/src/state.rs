//! Boss entity state.

use glam::Vec2;

/// What the boss is currently busy doing.
///
/// Exactly one activity is active at a time; the stun flag lives next to it
/// because a stun interrupts whatever activity was running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    #[default]
    Idle,
    Leaping,
    MeleeSequence,
    SpinCharge,
    Spinning,
    Returning,
    Barrage,
}

/// Result of applying damage to the boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageIntake {
    /// False when the hit was ignored (invulnerability, already defeated).
    pub applied: bool,
    /// True when this hit reduced health to zero.
    pub lethal: bool,
}

/// Mutable state of the boss entity.
///
/// Mutated exclusively from the single per-frame tick that owns it; there is
/// no concurrent access by design.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossState {
    pub health: f32,
    pub max_health: f32,
    pub position: Vec2,
    pub start_position: Vec2,
    /// Successful phase-3 parries counted toward the next stun.
    pub combo_count: u32,
    pub stunned: bool,
    pub defeated: bool,
    activity: Activity,
}

impl BossState {
    pub fn new(max_health: f32, start_position: Vec2) -> Self {
        Self {
            health: max_health,
            max_health,
            position: start_position,
            start_position,
            combo_count: 0,
            stunned: false,
            defeated: false,
            activity: Activity::Idle,
        }
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// True while any sequence (melee, spin, leap, barrage) is in flight.
    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Enters an activity stage. Stages within one routine overwrite each
    /// other; the single-value field is what keeps busy states exclusive.
    pub fn set_activity(&mut self, activity: Activity) {
        self.activity = activity;
    }

    /// Abrupt termination: clears the activity and both interrupt flags.
    pub fn clear_transient_flags(&mut self) {
        self.activity = Activity::Idle;
        self.stunned = false;
    }

    /// Subtracts health, saturating at zero.
    pub fn apply_damage(&mut self, amount: f32) -> DamageIntake {
        if self.defeated {
            return DamageIntake {
                applied: false,
                lethal: false,
            };
        }
        self.health = (self.health - amount).max(0.0);
        let lethal = self.health <= 0.0;
        if lethal {
            self.defeated = true;
        }
        DamageIntake {
            applied: true,
            lethal,
        }
    }

    /// Full reset back to encounter-start values.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.position = self.start_position;
        self.combo_count = 0;
        self.defeated = false;
        self.clear_transient_flags();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_saturates_and_marks_defeat() {
        let mut boss = BossState::new(100.0, Vec2::ZERO);
        let intake = boss.apply_damage(30.0);
        assert!(intake.applied);
        assert!(!intake.lethal);
        assert_eq!(boss.health, 70.0);

        let intake = boss.apply_damage(500.0);
        assert!(intake.lethal);
        assert_eq!(boss.health, 0.0);
        assert!(boss.defeated);

        // Further hits are ignored.
        let intake = boss.apply_damage(1.0);
        assert!(!intake.applied);
    }

    #[test]
    fn one_activity_at_a_time() {
        let mut boss = BossState::new(100.0, Vec2::ZERO);
        assert!(!boss.is_busy());

        boss.set_activity(Activity::MeleeSequence);
        assert!(boss.is_busy());
        boss.set_activity(Activity::Spinning);
        assert_eq!(boss.activity(), Activity::Spinning);

        boss.clear_transient_flags();
        assert!(!boss.is_busy());
        assert!(!boss.stunned);
    }

    #[test]
    fn reset_restores_start_values() {
        let start = Vec2::new(3.0, 1.0);
        let mut boss = BossState::new(80.0, start);
        boss.position = Vec2::new(-5.0, 2.0);
        boss.apply_damage(80.0);
        boss.combo_count = 2;
        boss.stunned = true;

        boss.reset();
        assert_eq!(boss.health, 80.0);
        assert_eq!(boss.position, start);
        assert_eq!(boss.combo_count, 0);
        assert!(!boss.defeated);
        assert!(!boss.stunned);
        assert!(!boss.is_busy());
    }

    #[test]
    fn health_ratio_is_clamped() {
        let mut boss = BossState::new(100.0, Vec2::ZERO);
        boss.health = 150.0;
        assert_eq!(boss.health_ratio(), 1.0);
        boss.max_health = 0.0;
        assert_eq!(boss.health_ratio(), 0.0);
    }
}
