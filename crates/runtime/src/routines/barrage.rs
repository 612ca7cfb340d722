//! Phase-3 leap barrage: a charge window the player can break with timed
//! defends, rapid close strikes, then an unavoidable lunging finisher.

use encounter_core::{Activity, EncounterConfig};
use routine::{Routine, Step, Timer};

use crate::events::DamageKind;
use crate::routines::TickCtx;

enum BarrageStage {
    /// Charge window: the boss closes in and strikes at a fixed cadence
    /// while counting the player's timed defends.
    Charging {
        window: Timer,
        shots_done: u32,
        next_shot: Timer,
    },
    /// Brief pause after the lunge, then the finisher resolves.
    Landing(Timer),
}

pub(crate) struct BarrageRoutine {
    stage: BarrageStage,
    dodges: u32,
    announced: bool,
}

impl BarrageRoutine {
    pub fn new(cfg: &EncounterConfig) -> Self {
        Self {
            stage: BarrageStage::Charging {
                window: Timer::new(cfg.barrage_charge),
                shots_done: 0,
                // First strike is due immediately.
                next_shot: Timer::new(0.0),
            },
            dodges: 0,
            announced: false,
        }
    }
}

impl<'a> Routine<TickCtx<'a>> for BarrageRoutine {
    fn tick(&mut self, ctx: &mut TickCtx<'a>, dt: f32) -> Step {
        if !self.announced {
            self.announced = true;
            ctx.state.set_activity(Activity::Barrage);
            let cue = ctx.cfg.animations.barrage_charge.clone();
            ctx.animate(&cue);
        }

        match &mut self.stage {
            BarrageStage::Charging {
                window,
                shots_done,
                next_shot,
            } => {
                // Timed defends break the barrage.
                if ctx.input.any_defend_pressed() {
                    self.dodges += 1;
                    if self.dodges >= ctx.cfg.barrage_required_dodges {
                        ctx.trigger_stun();
                        return Step::Complete;
                    }
                }

                // Close in, but never past the minimum approach distance.
                if let Some(target) = ctx.target {
                    let to = target - ctx.state.position;
                    let dist = to.length();
                    if dist > ctx.cfg.barrage_min_approach {
                        let advance =
                            (ctx.cfg.barrage_approach_speed * dt).min(dist - ctx.cfg.barrage_min_approach);
                        ctx.state.position += to.normalize_or_zero() * advance;
                    }
                }

                if *shots_done < ctx.cfg.barrage_count && next_shot.tick(dt) {
                    *shots_done += 1;
                    *next_shot = Timer::new(ctx.cfg.barrage_interval);
                    let in_range = ctx
                        .target_distance()
                        .is_some_and(|d| d <= ctx.cfg.barrage_range);
                    // A timed defend on the strike frame evades it outright.
                    if in_range && !ctx.input.any_defend_pressed() {
                        let kind = if ctx.dice.coin() {
                            DamageKind::Upper
                        } else {
                            DamageKind::Lower
                        };
                        ctx.damage_player(ctx.cfg.barrage_damage, kind);
                    }
                }

                if window.tick(dt) {
                    let Some(target) = ctx.target else {
                        return Step::Complete;
                    };
                    // Instant lunge to just short of the player.
                    let dir = (target - ctx.state.position).normalize_or_zero();
                    ctx.state.position = target - dir * ctx.cfg.barrage_land_offset;
                    let cue = ctx.cfg.animations.leap.clone();
                    ctx.animate(&cue);
                    self.stage = BarrageStage::Landing(Timer::new(ctx.cfg.barrage_final_pause));
                }
                Step::Running
            }

            BarrageStage::Landing(pause) => {
                if pause.tick(dt) {
                    let in_range = ctx
                        .target_distance()
                        .is_some_and(|d| d <= ctx.cfg.barrage_final_range);
                    if in_range {
                        ctx.damage_player(ctx.cfg.barrage_final_damage, DamageKind::Unblockable);
                    }
                    return Step::Complete;
                }
                Step::Running
            }
        }
    }
}
