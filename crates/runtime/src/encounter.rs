//! Encounter orchestrator and per-frame tick pipeline.
//!
//! [`Encounter`] owns the boss state, the phase tracker, the pattern selector,
//! and at most one in-flight attack routine. Each frame the host calls
//! [`Encounter::tick`] with the frame delta, an input snapshot, and the
//! boundary bundle, and drains the returned events.

use encounter_core::{
    Activity, AttackSequence, AttackStep, BossState, ConfigError, Dice, EncounterConfig,
    PatternSelector, Phase, PhaseTracker, PhaseTransition, ProjectileVariant, Vec2, compute_seed,
};
use tracing::{debug, info};

use crate::env::EncounterEnv;
use crate::events::{EncounterEvent, MinionSpawn};
use crate::input::InputFrame;
use crate::routines::{ActiveRoutine, BarrageRoutine, MeleeEngagement, StunRoutine, TickCtx};

/// Nonce mixed into the encounter seed so the boss dice stream stays
/// independent of any other consumer of the session seed.
const DICE_NONCE: u64 = 0xB055;

/// Lateral spread of minion spawn offsets.
const MINION_OFFSET_X: f32 = 1.0;
/// Vertical band of minion spawn offsets.
const MINION_OFFSET_Y: (f32, f32) = (0.5, 1.5);

#[derive(Debug, thiserror::Error)]
pub enum EncounterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Debug overrides, kept apart from the regular tick inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    /// Jump to a phase, in either direction, cancelling any active sequence.
    ForcePhase(Phase),
    /// Restore encounter-start state: full health, phase 1, start position.
    ResetEncounter,
    /// Defeat the boss outright.
    Kill,
}

/// The boss encounter state machine.
pub struct Encounter {
    cfg: EncounterConfig,
    state: BossState,
    tracker: PhaseTracker,
    selector: PatternSelector,
    dice: Dice,
    /// Monotonic encounter clock, summed frame deltas.
    clock: f64,
    active: Option<ActiveRoutine>,
}

impl Encounter {
    pub fn new(
        cfg: EncounterConfig,
        seed: u64,
        start_position: Vec2,
    ) -> Result<Self, EncounterError> {
        cfg.validate()?;
        let mut dice = Dice::new(compute_seed(seed, DICE_NONCE));
        let selector = PatternSelector::new(0.0, &cfg, &mut dice);
        let state = BossState::new(cfg.max_health, start_position);
        info!(seed, max_health = cfg.max_health, "encounter created");
        Ok(Self {
            cfg,
            state,
            tracker: PhaseTracker::new(),
            selector,
            dice,
            clock: 0.0,
            active: None,
        })
    }

    pub fn state(&self) -> &BossState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.tracker.current()
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.cfg
    }

    /// Seconds of encounter time elapsed.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advances the encounter by one frame.
    ///
    /// Runs the active routine if there is one, otherwise asks the selector
    /// for the next pattern. A defeated boss ignores ticks entirely.
    pub fn tick(&mut self, dt: f32, input: &InputFrame, env: &EncounterEnv<'_>) -> Vec<EncounterEvent> {
        let mut events = Vec::new();
        if self.state.defeated {
            return events;
        }
        self.clock += dt as f64;
        let target = env.target.player_position();
        let phase = self.tracker.current();

        if let Some(mut routine) = self.active.take() {
            let mut ctx = TickCtx {
                state: &mut self.state,
                cfg: &self.cfg,
                dice: &mut self.dice,
                events: &mut events,
                input,
                target,
                now: self.clock,
                phase,
                stun_pending: None,
            };
            let step = routine.tick(&mut ctx, dt);
            let stun_pending = ctx.stun_pending;

            if let Some(duration) = stun_pending {
                debug!(routine = routine.name(), duration, "routine broken by stun");
                self.state.set_activity(Activity::Idle);
                self.active = Some(ActiveRoutine::Stun(StunRoutine::new(duration)));
            } else if step.is_complete() {
                debug!(routine = routine.name(), "routine finished");
                self.state.set_activity(Activity::Idle);
            } else {
                self.active = Some(routine);
            }
        } else if let Some(seq) = self.selector.select(
            self.clock,
            phase,
            self.state.is_busy(),
            self.state.stunned,
            target.is_some(),
            &self.cfg,
            &mut self.dice,
        ) {
            self.launch(seq, target, &mut events);
        }

        events
    }

    /// Commits to a selected sequence: instantaneous steps execute on the
    /// spot, everything else installs a routine.
    fn launch(&mut self, seq: AttackSequence, target: Option<Vec2>, events: &mut Vec<EncounterEvent>) {
        let Some(&first) = seq.steps().first() else {
            return;
        };
        match first {
            AttackStep::RangedShot => self.fire_shot(target, events),
            AttackStep::SpawnMinions => self.spawn_minions(events),
            AttackStep::LeapBarrage => {
                let Some(t) = target else { return };
                let distance = self.state.position.distance(t);
                let range = self.cfg.barrage_activation_range;
                if distance < range.min || distance > range.max {
                    debug!(distance, "barrage skipped, target outside activation range");
                    return;
                }
                debug!(distance, "leap barrage engaged");
                self.active = Some(ActiveRoutine::Barrage(BarrageRoutine::new(&self.cfg)));
                self.state.set_activity(Activity::Barrage);
            }
            AttackStep::UpperMelee | AttackStep::LowerMelee | AttackStep::SpinAttack => {
                let Some(t) = target else { return };
                debug!(steps = seq.remaining(), "melee engagement started");
                events.push(EncounterEvent::AnimationRequested {
                    cue: self.cfg.animations.leap.clone(),
                });
                self.active = Some(ActiveRoutine::Melee(MeleeEngagement::new(
                    seq,
                    self.state.position,
                    t,
                    &self.cfg,
                )));
                self.state.set_activity(Activity::Leaping);
            }
        }
    }

    /// Single aimed projectile with sampled jitter.
    fn fire_shot(&mut self, target: Option<Vec2>, events: &mut Vec<EncounterEvent>) {
        let Some(t) = target else { return };
        let aim = (t - self.state.position).normalize_or_zero();
        let jitter = Vec2::new(
            self.dice
                .range_f32(-self.cfg.aim_jitter.x, self.cfg.aim_jitter.x),
            self.dice
                .range_f32(-self.cfg.aim_jitter.y, self.cfg.aim_jitter.y),
        );
        let direction = (aim + jitter).normalize_or_zero();
        let variant = if self.dice.coin() {
            ProjectileVariant::Red
        } else {
            ProjectileVariant::Blue
        };
        events.push(EncounterEvent::ProjectileSpawned {
            origin: self.state.position,
            direction,
            speed: self.cfg.shot_speed,
            damage: self.cfg.shot_damage,
            lifetime: self.cfg.shot_lifetime,
            variant,
        });
    }

    /// One wave of ranged minions scattered near the boss.
    fn spawn_minions(&mut self, events: &mut Vec<EncounterEvent>) {
        let count = self.cfg.minion_count.sample(&mut self.dice);
        let mut spawns = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let offset = Vec2::new(
                self.dice.range_f32(-MINION_OFFSET_X, MINION_OFFSET_X),
                self.dice.range_f32(MINION_OFFSET_Y.0, MINION_OFFSET_Y.1),
            );
            let variant = if self.dice.coin() {
                ProjectileVariant::Red
            } else {
                ProjectileVariant::Blue
            };
            spawns.push(MinionSpawn {
                position: self.state.position + offset,
                variant,
                shot_interval: self.cfg.minion_shot_interval,
                lifetime: self.cfg.minion_lifetime,
            });
        }
        debug!(count, "minion wave spawned");
        events.push(EncounterEvent::MinionsSpawned { spawns });
    }

    /// Applies incoming damage to the boss and advances the phase machine.
    ///
    /// Phase-1 invulnerability (when configured) swallows the hit silently.
    pub fn apply_damage(&mut self, amount: f32) -> Vec<EncounterEvent> {
        let mut events = Vec::new();
        if self.state.defeated {
            return events;
        }
        if self.cfg.phase1_invulnerable && self.tracker.current() == Phase::One {
            debug!(amount, "hit ignored, phase 1 invulnerability");
            return events;
        }

        let intake = self.state.apply_damage(amount);
        if !intake.applied {
            return events;
        }
        events.push(EncounterEvent::BossDamaged {
            amount,
            health_after: self.state.health,
        });

        if intake.lethal {
            info!("boss defeated");
            self.cancel_active(&mut events);
            events.push(EncounterEvent::AnimationRequested {
                cue: self.cfg.animations.death.clone(),
            });
            events.push(EncounterEvent::BossDefeated);
            return events;
        }

        events.push(EncounterEvent::AnimationRequested {
            cue: self.cfg.animations.hurt.clone(),
        });
        if let Some(transition) = self
            .tracker
            .observe(self.state.health, self.state.max_health)
        {
            self.on_phase_transition(transition, false, &mut events);
        }
        events
    }

    /// Executes a debug override.
    pub fn execute(&mut self, command: DebugCommand) -> Vec<EncounterEvent> {
        let mut events = Vec::new();
        match command {
            DebugCommand::ForcePhase(phase) => {
                self.cancel_active(&mut events);
                if let Some(transition) = self.tracker.force(phase) {
                    self.on_phase_transition(transition, true, &mut events);
                }
            }
            DebugCommand::ResetEncounter => {
                info!("encounter reset");
                self.cancel_active(&mut events);
                self.state.reset();
                self.tracker.reset();
                self.selector.reset(self.clock, &self.cfg, &mut self.dice);
            }
            DebugCommand::Kill => {
                if !self.state.defeated {
                    let remaining = self.state.health;
                    events.extend(self.apply_damage(remaining.max(1.0)));
                }
            }
        }
        events
    }

    fn on_phase_transition(
        &mut self,
        transition: PhaseTransition,
        forced: bool,
        events: &mut Vec<EncounterEvent>,
    ) {
        info!(from = %transition.from, to = %transition.to, forced, "phase transition");
        events.push(EncounterEvent::PhaseChanged {
            from: transition.from,
            to: transition.to,
            forced,
        });
        match transition.to {
            Phase::One => {
                // Only reachable through a forced override; behave like a
                // partial reset so phase 1 starts from a clean slate.
                self.state.position = self.state.start_position;
                self.selector.reset(self.clock, &self.cfg, &mut self.dice);
            }
            Phase::Two => events.push(EncounterEvent::AnimationRequested {
                cue: self.cfg.animations.phase2_transition.clone(),
            }),
            Phase::Three => {
                self.state.combo_count = 0;
                events.push(EncounterEvent::AnimationRequested {
                    cue: self.cfg.animations.phase3_transition.clone(),
                });
            }
        }
    }

    /// Drops the active routine and clears the busy flags.
    fn cancel_active(&mut self, events: &mut Vec<EncounterEvent>) {
        let had_routine = self.active.take().is_some();
        if had_routine || self.state.is_busy() {
            debug!("active sequence cancelled");
            events.push(EncounterEvent::SequenceCancelled);
        }
        self.state.clear_transient_flags();
    }
}
