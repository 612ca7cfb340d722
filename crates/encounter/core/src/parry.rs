//! Parry, block, and stun resolution.
//!
//! This module provides pure functions for resolving a defensive input
//! against a single incoming strike. All resolution is deterministic and
//! side-effect free; callers apply the returned outcome to their state.
//!
//! # Rules (priority order)
//!
//! 1. **Perfect parry** (timed input at the resolution instant): zero damage.
//!    Phases 1 and 2 stun the attacker immediately; phase 3 counts a combo
//!    and stuns only when the combo reaches the configured threshold, which
//!    also resets the counter.
//! 2. **Block** (input held through the window, strike not unavoidable):
//!    damage is multiplied by the block ratio.
//! 3. Otherwise: full damage, combo unchanged.

use crate::Phase;

/// Defensive input state at the resolution instant.
///
/// `timed` is edge-triggered (pressed this tick), `held` is level-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefenseInput {
    pub timed: bool,
    pub held: bool,
}

impl DefenseInput {
    pub const NONE: Self = Self {
        timed: false,
        held: false,
    };

    pub fn timed() -> Self {
        Self {
            timed: true,
            held: true,
        }
    }

    pub fn held() -> Self {
        Self {
            timed: false,
            held: true,
        }
    }
}

/// A single incoming strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeleeAttack {
    pub base_damage: f32,
    /// Unavoidable strikes ignore blocks (spin damage, barrage finisher).
    pub unavoidable: bool,
}

impl MeleeAttack {
    pub fn new(base_damage: f32) -> Self {
        Self {
            base_damage,
            unavoidable: false,
        }
    }

    pub fn unavoidable(base_damage: f32) -> Self {
        Self {
            base_damage,
            unavoidable: true,
        }
    }
}

/// Tunables consulted during resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParryRules {
    pub combo_threshold: u32,
    pub block_ratio: f32,
}

/// Result of resolving one strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParryOutcome {
    pub final_damage: f32,
    pub attacker_stunned: bool,
    /// Updated combo counter (phase 3 only; passthrough otherwise).
    pub combo_count: u32,
}

/// Parry window opened when a melee strike begins its windup.
///
/// Surfaced to hosts through the runtime's event stream (UI flashes,
/// practice tooling) and consumed at the resolution instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParryWindow {
    pub attack: MeleeAttack,
    pub is_upper: bool,
    pub opened_at: f64,
    pub duration: f32,
}

/// Resolves a defensive input against a strike.
pub fn resolve_parry(
    input: DefenseInput,
    attack: MeleeAttack,
    phase: Phase,
    combo_count: u32,
    rules: ParryRules,
) -> ParryOutcome {
    if input.timed {
        if phase < Phase::Three {
            return ParryOutcome {
                final_damage: 0.0,
                attacker_stunned: true,
                combo_count,
            };
        }
        let next_combo = combo_count + 1;
        if next_combo >= rules.combo_threshold {
            return ParryOutcome {
                final_damage: 0.0,
                attacker_stunned: true,
                combo_count: 0,
            };
        }
        return ParryOutcome {
            final_damage: 0.0,
            attacker_stunned: false,
            combo_count: next_combo,
        };
    }

    if input.held && !attack.unavoidable {
        return ParryOutcome {
            final_damage: attack.base_damage * rules.block_ratio,
            attacker_stunned: false,
            combo_count,
        };
    }

    ParryOutcome {
        final_damage: attack.base_damage,
        attacker_stunned: false,
        combo_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: ParryRules = ParryRules {
        combo_threshold: 3,
        block_ratio: 0.3,
    };

    #[test]
    fn perfect_parry_stuns_in_early_phases() {
        for phase in [Phase::One, Phase::Two] {
            let outcome = resolve_parry(
                DefenseInput::timed(),
                MeleeAttack::new(20.0),
                phase,
                0,
                RULES,
            );
            assert_eq!(outcome.final_damage, 0.0);
            assert!(outcome.attacker_stunned);
            assert_eq!(outcome.combo_count, 0);
        }
    }

    #[test]
    fn block_applies_exact_ratio() {
        let outcome = resolve_parry(
            DefenseInput::held(),
            MeleeAttack::new(20.0),
            Phase::One,
            0,
            RULES,
        );
        assert_eq!(outcome.final_damage, 6.0);
        assert!(!outcome.attacker_stunned);
    }

    #[test]
    fn no_input_takes_full_damage() {
        let outcome = resolve_parry(
            DefenseInput::NONE,
            MeleeAttack::new(20.0),
            Phase::Two,
            2,
            RULES,
        );
        assert_eq!(outcome.final_damage, 20.0);
        assert!(!outcome.attacker_stunned);
        assert_eq!(outcome.combo_count, 2);
    }

    #[test]
    fn phase3_counts_combo_instead_of_stunning() {
        let outcome = resolve_parry(
            DefenseInput::timed(),
            MeleeAttack::new(20.0),
            Phase::Three,
            0,
            RULES,
        );
        assert_eq!(outcome.final_damage, 0.0);
        assert!(!outcome.attacker_stunned);
        assert_eq!(outcome.combo_count, 1);
    }

    #[test]
    fn phase3_stun_triggers_exactly_at_threshold_and_resets() {
        let mut combo = 0;
        for parry in 1..=3 {
            let outcome = resolve_parry(
                DefenseInput::timed(),
                MeleeAttack::new(20.0),
                Phase::Three,
                combo,
                RULES,
            );
            combo = outcome.combo_count;
            if parry < 3 {
                assert!(!outcome.attacker_stunned);
                assert_eq!(combo, parry);
            } else {
                assert!(outcome.attacker_stunned);
                assert_eq!(combo, 0, "counter resets immediately after the stun");
            }
        }
    }

    #[test]
    fn unavoidable_strike_ignores_block_but_not_parry() {
        let blocked = resolve_parry(
            DefenseInput::held(),
            MeleeAttack::unavoidable(30.0),
            Phase::One,
            0,
            RULES,
        );
        assert_eq!(blocked.final_damage, 30.0);

        let parried = resolve_parry(
            DefenseInput::timed(),
            MeleeAttack::unavoidable(30.0),
            Phase::One,
            0,
            RULES,
        );
        assert_eq!(parried.final_damage, 0.0);
    }

    #[test]
    fn timed_input_wins_over_held() {
        // A timed press is also held for that tick; the perfect parry rule
        // must take priority.
        let outcome = resolve_parry(
            DefenseInput {
                timed: true,
                held: true,
            },
            MeleeAttack::new(20.0),
            Phase::One,
            0,
            RULES,
        );
        assert_eq!(outcome.final_damage, 0.0);
        assert!(outcome.attacker_stunned);
    }
}
