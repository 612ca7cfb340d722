//! Spin attack: long telegraphed charge, then an unblockable whirl.

use encounter_core::{Activity, EncounterConfig, Phase};
use routine::{Routine, Step, Timer};

use crate::events::DamageKind;
use crate::routines::TickCtx;

enum SpinStage {
    Charging(Timer),
    Spinning {
        timer: Timer,
        /// Re-arms when the target leaves the radius; at most one hit per
        /// entry into the damage zone.
        hit_armed: bool,
    },
}

/// Charge-then-whirl routine nested inside a melee engagement.
///
/// While spinning the hit ignores guards entirely; in phase 3 the boss also
/// drifts toward the player.
pub(crate) struct SpinRoutine {
    stage: SpinStage,
    announced: bool,
}

impl SpinRoutine {
    pub fn new(cfg: &EncounterConfig) -> Self {
        Self {
            stage: SpinStage::Charging(Timer::new(cfg.spin_charge)),
            announced: false,
        }
    }
}

impl<'a> Routine<TickCtx<'a>> for SpinRoutine {
    fn tick(&mut self, ctx: &mut TickCtx<'a>, dt: f32) -> Step {
        if !self.announced {
            self.announced = true;
            ctx.state.set_activity(Activity::SpinCharge);
            let cue = ctx.cfg.animations.spin_charge.clone();
            ctx.animate(&cue);
        }

        match &mut self.stage {
            SpinStage::Charging(timer) => {
                if timer.tick(dt) {
                    ctx.state.set_activity(Activity::Spinning);
                    let cue = ctx.cfg.animations.spin.clone();
                    ctx.animate(&cue);
                    self.stage = SpinStage::Spinning {
                        timer: Timer::new(ctx.cfg.spin_duration),
                        hit_armed: true,
                    };
                }
                Step::Running
            }

            SpinStage::Spinning { timer, hit_armed } => {
                if let Some(target) = ctx.target {
                    if ctx.phase == Phase::Three {
                        let dir = (target - ctx.state.position).normalize_or_zero();
                        ctx.state.position += dir * ctx.cfg.spin_homing_speed * dt;
                    }
                    let in_radius = ctx.state.position.distance(target) <= ctx.cfg.spin_radius;
                    if in_radius && *hit_armed {
                        *hit_armed = false;
                        ctx.damage_player(ctx.cfg.spin_damage, DamageKind::Unblockable);
                    } else if !in_radius {
                        *hit_armed = true;
                    }
                }
                if timer.tick(dt) {
                    Step::Complete
                } else {
                    Step::Running
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EncounterEvent;
    use crate::routines::testutil::CtxHarness;
    use encounter_core::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn run_to_completion(spin: &mut SpinRoutine, harness: &mut CtxHarness) -> f32 {
        let mut elapsed = 0.0;
        loop {
            let mut ctx = harness.ctx();
            let step = spin.tick(&mut ctx, DT);
            elapsed += DT;
            if step.is_complete() {
                return elapsed;
            }
            assert!(elapsed < 10.0, "spin must finish");
        }
    }

    fn spin_hits(harness: &CtxHarness) -> usize {
        harness
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    EncounterEvent::PlayerDamaged {
                        kind: DamageKind::Unblockable,
                        ..
                    }
                )
            })
            .count()
    }

    #[test]
    fn target_in_radius_is_hit_exactly_once() {
        let mut harness = CtxHarness::new(Some(Vec2::new(1.0, 0.0)));
        let mut spin = SpinRoutine::new(&harness.cfg);

        let elapsed = run_to_completion(&mut spin, &mut harness);
        assert_eq!(spin_hits(&harness), 1);
        let expected = harness.cfg.spin_charge + harness.cfg.spin_duration;
        assert!((elapsed - expected).abs() < 0.1);
    }

    #[test]
    fn no_damage_during_the_charge() {
        let mut harness = CtxHarness::new(Some(Vec2::new(1.0, 0.0)));
        let mut spin = SpinRoutine::new(&harness.cfg);

        let ticks = (harness.cfg.spin_charge / DT) as usize - 2;
        for _ in 0..ticks {
            let mut ctx = harness.ctx();
            assert!(spin.tick(&mut ctx, DT).is_running());
        }
        assert_eq!(spin_hits(&harness), 0);
    }

    #[test]
    fn target_outside_radius_is_spared() {
        let mut harness = CtxHarness::new(Some(Vec2::new(50.0, 0.0)));
        let mut spin = SpinRoutine::new(&harness.cfg);

        run_to_completion(&mut spin, &mut harness);
        assert_eq!(spin_hits(&harness), 0);
    }

    #[test]
    fn phase3_spin_homes_toward_the_target() {
        let mut harness = CtxHarness::new(Some(Vec2::new(50.0, 0.0)));
        harness.phase = Phase::Three;
        let mut spin = SpinRoutine::new(&harness.cfg);

        run_to_completion(&mut spin, &mut harness);
        let moved = harness.state.position.x;
        let expected = harness.cfg.spin_homing_speed * harness.cfg.spin_duration;
        assert!(moved > 0.0, "boss must drift toward the player");
        assert!((moved - expected).abs() < 0.2);
    }
}
