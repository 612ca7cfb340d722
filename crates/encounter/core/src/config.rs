//! Encounter configuration constants and tunable parameters.

use glam::Vec2;

use crate::rng::{Dice, RngOracle};

/// Inclusive integer sampling range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Samples a value in `[min, max]`.
    pub fn sample<R: RngOracle>(&self, dice: &mut Dice<R>) -> u32 {
        dice.range_u32(self.min, self.max)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Half-open float sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Samples a value in `[min, max)`.
    pub fn sample<R: RngOracle>(&self, dice: &mut Dice<R>) -> f32 {
        dice.range_f32(self.min, self.max)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.min >= 0.0
    }
}

/// Animation cue names handed to the host's animation boundary.
///
/// Cues are fire-and-forget; the host owns playback and blending.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSet {
    pub idle: String,
    pub hurt: String,
    pub death: String,
    pub upper_attack: String,
    pub lower_attack: String,
    pub spin_charge: String,
    pub spin: String,
    pub leap: String,
    pub barrage_charge: String,
    pub stunned: String,
    pub phase2_transition: String,
    pub phase3_transition: String,
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self {
            idle: "BossIdle".into(),
            hurt: "BossHurt".into(),
            death: "BossDeath".into(),
            upper_attack: "BossUpperAttack".into(),
            lower_attack: "BossLowerAttack".into(),
            spin_charge: "BossSpinCharge".into(),
            spin: "BossSpin".into(),
            leap: "BossLeap".into(),
            barrage_charge: "BossBarrageCharge".into(),
            stunned: "BossStunned".into(),
            phase2_transition: "BossPhase2Transition".into(),
            phase3_transition: "BossPhase3Transition".into(),
        }
    }
}

/// Configuration error raised by [`EncounterConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("range `{name}` has min greater than max (or negative bound)")]
    InvalidRange { name: &'static str },

    #[error("`{name}` must be greater than zero")]
    NonPositive { name: &'static str },

    #[error("`block_ratio` must lie in [0, 1], got {value}")]
    BlockRatioOutOfBounds { value: f32 },
}

/// All encounter tunables.
///
/// Defaults reproduce the shipped boss fight; hosts override individual
/// fields through a tuning file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterConfig {
    // ===== vitals =====
    pub max_health: f32,
    /// Optional phase-1 invulnerability (damage is silently ignored).
    pub phase1_invulnerable: bool,

    // ===== ranged cadence =====
    /// Seconds between shots in phases 1 and 2.
    pub shot_interval: FloatRange,
    /// Shrunk cadence for phase 3.
    pub shot_interval_phase3: FloatRange,
    /// Shots fired before leaping into melee (resampled per cycle).
    pub shots_before_leap: IntRange,
    pub shots_before_leap_phase3: IntRange,
    pub shot_speed: f32,
    pub shot_damage: f32,
    pub shot_lifetime: f32,
    /// Max absolute aim jitter added to the normalized shot direction.
    pub aim_jitter: Vec2,

    // ===== melee =====
    pub melee_range: f32,
    pub melee_damage: f32,
    pub strike_windup: f32,
    pub strike_recover: f32,
    /// Strikes per melee pattern, inclusive; default [2, 3].
    pub melee_strikes: IntRange,

    // ===== parry / stun =====
    pub block_ratio: f32,
    pub stun_duration_phase1: f32,
    pub stun_duration_phase2: f32,
    /// Successful parries needed to stun in phase 3.
    pub combo_threshold: u32,

    // ===== minions (phase 2) =====
    pub minion_cooldown: f32,
    pub minion_count: IntRange,
    pub minion_shot_interval: FloatRange,
    pub minion_lifetime: f32,

    // ===== spin (phase 3) =====
    pub spin_charge: f32,
    pub spin_duration: f32,
    pub spin_radius: f32,
    pub spin_damage: f32,
    /// Homing speed toward the player while spinning.
    pub spin_homing_speed: f32,
    /// Percent chance to append a spin to a phase-3 melee pattern.
    pub spin_chance_percent: u32,

    // ===== leap =====
    pub leap_duration: f32,
    pub leap_arc_height: f32,
    /// Walk-back speed when returning to the start position.
    pub return_speed: f32,

    // ===== leap-barrage (phase 3) =====
    pub barrage_cooldown: f32,
    pub barrage_activation_range: FloatRange,
    pub barrage_charge: f32,
    pub barrage_approach_speed: f32,
    pub barrage_min_approach: f32,
    pub barrage_count: u32,
    pub barrage_interval: f32,
    pub barrage_range: f32,
    pub barrage_damage: f32,
    /// Timed defends during the charge window needed to stun the boss.
    pub barrage_required_dodges: u32,
    pub barrage_land_offset: f32,
    pub barrage_final_range: f32,
    pub barrage_final_pause: f32,
    pub barrage_final_damage: f32,

    pub animations: AnimationSet,
}

impl EncounterConfig {
    /// Lower bound enforced on the minion spawn cooldown.
    pub const MIN_MINION_COOLDOWN: f32 = 2.0;

    /// Distance at which the return walk is considered finished.
    pub const RETURN_EPSILON: f32 = 0.05;

    pub fn new() -> Self {
        Self {
            max_health: 100.0,
            phase1_invulnerable: false,

            shot_interval: FloatRange::new(0.5, 1.0),
            shot_interval_phase3: FloatRange::new(0.35, 0.8),
            shots_before_leap: IntRange::new(4, 7),
            shots_before_leap_phase3: IntRange::new(3, 5),
            shot_speed: 8.0,
            shot_damage: 25.0,
            shot_lifetime: 5.0,
            aim_jitter: Vec2::new(0.3, 0.2),

            melee_range: 2.5,
            melee_damage: 20.0,
            strike_windup: 0.25,
            strike_recover: 0.15,
            melee_strikes: IntRange::new(2, 3),

            block_ratio: 0.3,
            stun_duration_phase1: 1.0,
            stun_duration_phase2: 1.0,
            combo_threshold: 3,

            minion_cooldown: 8.0,
            minion_count: IntRange::new(2, 3),
            minion_shot_interval: FloatRange::new(2.0, 3.0),
            minion_lifetime: 10.0,

            spin_charge: 3.0,
            spin_duration: 2.0,
            spin_radius: 4.0,
            spin_damage: 50.0,
            spin_homing_speed: 1.5,
            spin_chance_percent: 50,

            leap_duration: 0.8,
            leap_arc_height: 2.5,
            return_speed: 6.0,

            barrage_cooldown: 12.0,
            barrage_activation_range: FloatRange::new(0.0, 12.0),
            barrage_charge: 2.0,
            barrage_approach_speed: 3.0,
            barrage_min_approach: 3.5,
            barrage_count: 6,
            barrage_interval: 0.2,
            barrage_range: 1.2,
            barrage_damage: 10.0,
            barrage_required_dodges: 3,
            barrage_land_offset: 1.2,
            barrage_final_range: 1.5,
            barrage_final_pause: 0.15,
            barrage_final_damage: 30.0,

            animations: AnimationSet::default(),
        }
    }

    /// Shot cadence range for the given phase.
    pub fn shot_interval_for(&self, phase: crate::Phase) -> FloatRange {
        match phase {
            crate::Phase::Three => self.shot_interval_phase3,
            _ => self.shot_interval,
        }
    }

    /// Shots-before-leap range for the given phase.
    pub fn shots_before_leap_for(&self, phase: crate::Phase) -> IntRange {
        match phase {
            crate::Phase::Three => self.shots_before_leap_phase3,
            _ => self.shots_before_leap,
        }
    }

    /// Stun duration for the phase in which the stun was earned.
    pub fn stun_duration_for(&self, phase: crate::Phase) -> f32 {
        match phase {
            crate::Phase::One => self.stun_duration_phase1,
            _ => self.stun_duration_phase2,
        }
    }

    /// Minion cooldown clamped to the enforced minimum.
    pub fn effective_minion_cooldown(&self) -> f32 {
        self.minion_cooldown.max(Self::MIN_MINION_COOLDOWN)
    }

    /// Checks every tunable for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges: [(&'static str, bool); 7] = [
            ("shot_interval", self.shot_interval.is_valid()),
            ("shot_interval_phase3", self.shot_interval_phase3.is_valid()),
            ("shots_before_leap", self.shots_before_leap.is_valid()),
            (
                "shots_before_leap_phase3",
                self.shots_before_leap_phase3.is_valid(),
            ),
            ("melee_strikes", self.melee_strikes.is_valid()),
            ("minion_count", self.minion_count.is_valid()),
            (
                "barrage_activation_range",
                self.barrage_activation_range.is_valid(),
            ),
        ];
        for (name, ok) in ranges {
            if !ok {
                return Err(ConfigError::InvalidRange { name });
            }
        }
        if !self.minion_shot_interval.is_valid() {
            return Err(ConfigError::InvalidRange {
                name: "minion_shot_interval",
            });
        }

        let positives: [(&'static str, f32); 8] = [
            ("max_health", self.max_health),
            ("melee_range", self.melee_range),
            ("leap_duration", self.leap_duration),
            ("return_speed", self.return_speed),
            ("spin_duration", self.spin_duration),
            ("spin_radius", self.spin_radius),
            ("barrage_interval", self.barrage_interval),
            ("barrage_charge", self.barrage_charge),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name });
            }
        }
        if self.combo_threshold == 0 {
            return Err(ConfigError::NonPositive {
                name: "combo_threshold",
            });
        }
        if self.barrage_required_dodges == 0 {
            return Err(ConfigError::NonPositive {
                name: "barrage_required_dodges",
            });
        }

        if !(0.0..=1.0).contains(&self.block_ratio) {
            return Err(ConfigError::BlockRatioOutOfBounds {
                value: self.block_ratio,
            });
        }

        Ok(())
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        EncounterConfig::default().validate().unwrap();
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut cfg = EncounterConfig::default();
        cfg.melee_strikes = IntRange::new(4, 2);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidRange {
                name: "melee_strikes"
            })
        );
    }

    #[test]
    fn block_ratio_bounds_are_enforced() {
        let mut cfg = EncounterConfig::default();
        cfg.block_ratio = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BlockRatioOutOfBounds { .. })
        ));
    }

    #[test]
    fn minion_cooldown_is_clamped() {
        let mut cfg = EncounterConfig::default();
        cfg.minion_cooldown = 0.5;
        assert_eq!(
            cfg.effective_minion_cooldown(),
            EncounterConfig::MIN_MINION_COOLDOWN
        );
    }

    #[test]
    fn phase_three_shrinks_the_cadence() {
        let cfg = EncounterConfig::default();
        let p3 = cfg.shot_interval_for(crate::Phase::Three);
        assert!(p3.max <= cfg.shot_interval.max);
        assert!(p3.min <= cfg.shot_interval.min);
    }
}
