//! Attack pattern selection.
//!
//! The selector is the per-phase decision layer: it watches the monotonic
//! clock and decides which attack sequence the boss commits to next. It owns
//! the cadence cooldowns (shot intervals, minion waves, barrage) and the
//! shots-before-leap counter; the runtime executes whatever sequence it hands
//! back.
//!
//! # Edge policy
//!
//! While the boss is mid-sequence (busy) or stunned, no new pattern is
//! selected. A missing target defers target-dependent picks to a later tick
//! without consuming their slot.

use arrayvec::ArrayVec;
use routine::Cooldown;

use crate::config::EncounterConfig;
use crate::phase::Phase;
use crate::rng::{Dice, RngOracle};

/// Maximum steps in one attack sequence.
pub const MAX_SEQUENCE_STEPS: usize = 8;

/// Projectile flavor fired by the boss and its minions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectileVariant {
    Red,
    Blue,
}

/// One discrete step of an attack sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStep {
    RangedShot,
    UpperMelee,
    LowerMelee,
    SpinAttack,
    SpawnMinions,
    LeapBarrage,
}

impl AttackStep {
    /// True for the two melee strike steps; the payload says which guard the
    /// defender has to use.
    pub fn melee_guard(self) -> Option<bool> {
        match self {
            AttackStep::UpperMelee => Some(true),
            AttackStep::LowerMelee => Some(false),
            _ => None,
        }
    }

    /// Nominal wall-clock duration of the step, for logs and pacing checks.
    pub fn nominal_duration(self, cfg: &EncounterConfig) -> f32 {
        match self {
            AttackStep::RangedShot | AttackStep::SpawnMinions => 0.0,
            AttackStep::UpperMelee | AttackStep::LowerMelee => {
                cfg.strike_windup + cfg.strike_recover
            }
            AttackStep::SpinAttack => cfg.spin_charge + cfg.spin_duration,
            AttackStep::LeapBarrage => cfg.barrage_charge + cfg.barrage_final_pause,
        }
    }
}

/// An ordered, bounded list of attack steps.
///
/// Created when the selector picks a pattern, consumed step-by-step by the
/// executing routine, and discarded on completion or interruption (stun).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackSequence {
    steps: ArrayVec<AttackStep, MAX_SEQUENCE_STEPS>,
    cursor: usize,
}

impl AttackSequence {
    /// A sequence of exactly one step.
    pub fn single(step: AttackStep) -> Self {
        let mut steps = ArrayVec::new();
        steps.push(step);
        Self { steps, cursor: 0 }
    }

    pub fn from_steps(steps: impl IntoIterator<Item = AttackStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Builds a melee pattern: 2-3 strikes, each upper or lower with even
    /// odds, with a chance of a closing spin in phase 3.
    pub fn melee_pattern<R: RngOracle>(
        phase: Phase,
        cfg: &EncounterConfig,
        dice: &mut Dice<R>,
    ) -> Self {
        let mut steps = ArrayVec::new();
        let strikes = cfg.melee_strikes.sample(dice);
        for _ in 0..strikes.min(MAX_SEQUENCE_STEPS as u32 - 1) {
            if dice.coin() {
                steps.push(AttackStep::UpperMelee);
            } else {
                steps.push(AttackStep::LowerMelee);
            }
        }
        if phase == Phase::Three && dice.chance(cfg.spin_chance_percent) {
            steps.push(AttackStep::SpinAttack);
        }
        Self { steps, cursor: 0 }
    }

    /// Consumes and returns the next step.
    pub fn next_step(&mut self) -> Option<AttackStep> {
        let step = self.steps.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(step)
    }

    /// Discards all remaining steps (stun interruption).
    pub fn interrupt(&mut self) {
        self.cursor = self.steps.len();
    }

    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    pub fn steps(&self) -> &[AttackStep] {
        &self.steps
    }
}

/// Per-phase attack pattern selector.
///
/// Deterministic given the same clock, phase inputs, and dice seed.
#[derive(Clone, Debug)]
pub struct PatternSelector {
    next_shot: Cooldown,
    shots_fired: u32,
    shots_target: u32,
    /// Set once the shot counter fills; the leap is issued on the next
    /// selection so the triggering shot still goes out.
    pending_melee: bool,
    minion_wave: Cooldown,
    barrage: Cooldown,
}

impl PatternSelector {
    pub fn new<R: RngOracle>(now: f64, cfg: &EncounterConfig, dice: &mut Dice<R>) -> Self {
        Self {
            next_shot: Cooldown::after(now, cfg.shot_interval.sample(dice)),
            shots_fired: 0,
            shots_target: cfg.shots_before_leap.sample(dice),
            pending_melee: false,
            // First minion wave / barrage fire as soon as their phase opens.
            minion_wave: Cooldown::ready_now(),
            barrage: Cooldown::ready_now(),
        }
    }

    /// Re-arms all cadence state (encounter reset, forced phase 1).
    pub fn reset<R: RngOracle>(&mut self, now: f64, cfg: &EncounterConfig, dice: &mut Dice<R>) {
        *self = Self::new(now, cfg, dice);
    }

    /// Picks the next attack sequence, if any is due this tick.
    ///
    /// `busy`/`stunned` implement the mid-sequence edge policy; a missing
    /// target defers rather than skips.
    #[allow(clippy::too_many_arguments)]
    pub fn select<R: RngOracle>(
        &mut self,
        now: f64,
        phase: Phase,
        busy: bool,
        stunned: bool,
        target_present: bool,
        cfg: &EncounterConfig,
        dice: &mut Dice<R>,
    ) -> Option<AttackSequence> {
        if busy || stunned {
            return None;
        }

        if self.pending_melee {
            if !target_present {
                return None;
            }
            self.pending_melee = false;
            return Some(AttackSequence::melee_pattern(phase, cfg, dice));
        }

        if phase == Phase::Two && self.minion_wave.ready(now) {
            self.minion_wave.schedule(now, cfg.effective_minion_cooldown());
            return Some(AttackSequence::single(AttackStep::SpawnMinions));
        }

        if phase == Phase::Three && self.barrage.ready(now) && target_present {
            self.barrage.schedule(now, cfg.barrage_cooldown);
            return Some(AttackSequence::single(AttackStep::LeapBarrage));
        }

        if self.next_shot.ready(now) {
            if !target_present {
                return None;
            }
            self.shots_fired += 1;
            self.next_shot
                .schedule(now, cfg.shot_interval_for(phase).sample(dice));
            if self.shots_fired >= self.shots_target {
                self.shots_fired = 0;
                self.shots_target = cfg.shots_before_leap_for(phase).sample(dice);
                self.pending_melee = true;
            }
            return Some(AttackSequence::single(AttackStep::RangedShot));
        }

        None
    }
}
