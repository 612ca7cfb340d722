//! Melee engagement: leap to the player, strike, return home.
//!
//! Sub-machine per strike: Striking (windup + attack animation) → Resolving
//! (range check + parry window at the exact resolution instant) → Recovering.
//! A perfect parry stuns the boss and discards the rest of the sequence.

use encounter_core::{
    Activity, AttackStep, AttackSequence, EncounterConfig, MeleeAttack, ParryRules, ParryWindow,
    Vec2, resolve_parry,
};
use routine::{Routine, Step, Timer};

use crate::events::{DamageKind, EncounterEvent};
use crate::routines::spin::SpinRoutine;
use crate::routines::{LeapMotion, TickCtx};

enum Stage {
    Leaping(LeapMotion),
    /// Pull the next step off the sequence.
    NextStep,
    Striking {
        window: ParryWindow,
        windup: Timer,
    },
    Recovering(Timer),
    Spin(SpinRoutine),
    Returning,
}

pub(crate) struct MeleeEngagement {
    sequence: AttackSequence,
    stage: Stage,
}

impl MeleeEngagement {
    pub fn new(sequence: AttackSequence, from: Vec2, target: Vec2, cfg: &EncounterConfig) -> Self {
        Self {
            sequence,
            stage: Stage::Leaping(LeapMotion::new(from, target, cfg)),
        }
    }

    /// Resolution instant: hit check plus parry resolution, all in one step.
    fn resolve_strike(&mut self, ctx: &mut TickCtx<'_>, window: ParryWindow) {
        let Some(distance) = ctx.target_distance() else {
            return; // no player: the strike whiffs
        };
        if distance > ctx.cfg.melee_range {
            return;
        }

        let rules = ParryRules {
            combo_threshold: ctx.cfg.combo_threshold,
            block_ratio: ctx.cfg.block_ratio,
        };
        let input = ctx.input.defense_for(window.is_upper);
        let outcome = resolve_parry(
            input,
            window.attack,
            ctx.phase,
            ctx.state.combo_count,
            rules,
        );

        ctx.state.combo_count = outcome.combo_count;
        if outcome.final_damage > 0.0 {
            let kind = if window.is_upper {
                DamageKind::Upper
            } else {
                DamageKind::Lower
            };
            ctx.damage_player(outcome.final_damage, kind);
        }
        if outcome.attacker_stunned {
            ctx.trigger_stun();
        }
    }
}

impl<'a> Routine<TickCtx<'a>> for MeleeEngagement {
    fn tick(&mut self, ctx: &mut TickCtx<'a>, dt: f32) -> Step {
        match &mut self.stage {
            Stage::Leaping(leap) => {
                ctx.state.set_activity(Activity::Leaping);
                if leap.tick(&mut ctx.state.position, dt).is_complete() {
                    self.stage = Stage::NextStep;
                }
                Step::Running
            }

            Stage::NextStep => {
                match self.sequence.next_step() {
                    Some(AttackStep::SpinAttack) => {
                        self.stage = Stage::Spin(SpinRoutine::new(ctx.cfg));
                    }
                    Some(step) => {
                        if let Some(is_upper) = step.melee_guard() {
                            ctx.state.set_activity(Activity::MeleeSequence);
                            let cue = if is_upper {
                                ctx.cfg.animations.upper_attack.clone()
                            } else {
                                ctx.cfg.animations.lower_attack.clone()
                            };
                            ctx.animate(&cue);
                            let window = ParryWindow {
                                attack: MeleeAttack::new(ctx.cfg.melee_damage),
                                is_upper,
                                opened_at: ctx.now,
                                duration: ctx.cfg.strike_windup,
                            };
                            ctx.events
                                .push(EncounterEvent::ParryWindowOpened { window });
                            self.stage = Stage::Striking {
                                window,
                                windup: Timer::new(ctx.cfg.strike_windup),
                            };
                        }
                        // Non-melee steps never appear in melee patterns;
                        // anything else is skipped.
                    }
                    None => {
                        ctx.state.set_activity(Activity::Returning);
                        self.stage = Stage::Returning;
                    }
                }
                Step::Running
            }

            Stage::Striking { window, windup } => {
                if windup.tick(dt) {
                    let window = *window;
                    self.resolve_strike(ctx, window);
                    if ctx.stun_pending.is_some() {
                        self.sequence.interrupt();
                        return Step::Complete;
                    }
                    self.stage = Stage::Recovering(Timer::new(ctx.cfg.strike_recover));
                }
                Step::Running
            }

            Stage::Recovering(timer) => {
                if timer.tick(dt) {
                    let cue = ctx.cfg.animations.idle.clone();
                    ctx.animate(&cue);
                    self.stage = Stage::NextStep;
                }
                Step::Running
            }

            Stage::Spin(spin) => {
                if spin.tick(ctx, dt).is_complete() {
                    ctx.state.set_activity(Activity::Returning);
                    self.stage = Stage::Returning;
                }
                Step::Running
            }

            Stage::Returning => {
                let to_start = ctx.state.start_position - ctx.state.position;
                let dist = to_start.length();
                if dist <= EncounterConfig::RETURN_EPSILON {
                    ctx.state.position = ctx.state.start_position;
                    return Step::Complete;
                }
                let step_len = (ctx.cfg.return_speed * dt).min(dist);
                ctx.state.position += to_start.normalize_or_zero() * step_len;
                Step::Running
            }
        }
    }
}
