//! Time-sliced attack routines.
//!
//! Each routine is an explicit state machine advanced once per frame, the
//! portable replacement for engine coroutines: it mutates boss state through
//! [`TickCtx`], pushes events, and reports [`Step::Running`] until its
//! sequence is done. Cancellation is abrupt (the routine is dropped); the
//! encounter resets the busy flags itself.

mod barrage;
mod leap;
mod melee;
mod spin;
mod stun;

pub(crate) use barrage::BarrageRoutine;
pub(crate) use leap::LeapMotion;
pub(crate) use melee::MeleeEngagement;
pub(crate) use stun::StunRoutine;

use encounter_core::{BossState, Dice, EncounterConfig, Phase, Vec2};
use routine::Step;

use crate::events::{DamageKind, EncounterEvent};
use crate::input::InputFrame;

/// Everything a routine may touch during one frame.
pub(crate) struct TickCtx<'a> {
    pub state: &'a mut BossState,
    pub cfg: &'a EncounterConfig,
    pub dice: &'a mut Dice,
    pub events: &'a mut Vec<EncounterEvent>,
    pub input: &'a InputFrame,
    pub target: Option<Vec2>,
    pub now: f64,
    pub phase: Phase,
    /// Set when a parry/dodge stunned the boss this frame; the encounter
    /// swaps in the stun routine after the tick.
    pub stun_pending: Option<f32>,
}

impl TickCtx<'_> {
    /// Queues a fire-and-forget animation cue.
    pub fn animate(&mut self, cue: &str) {
        self.events.push(EncounterEvent::AnimationRequested {
            cue: cue.to_owned(),
        });
    }

    /// Queues player damage.
    pub fn damage_player(&mut self, amount: f32, kind: DamageKind) {
        self.events
            .push(EncounterEvent::PlayerDamaged { amount, kind });
    }

    /// Marks the boss stunned for the phase-appropriate duration.
    ///
    /// The active sequence must complete (abort) in the same frame; the
    /// encounter installs the stun routine afterwards.
    pub fn trigger_stun(&mut self) {
        let duration = self.cfg.stun_duration_for(self.phase);
        self.state.stunned = true;
        self.stun_pending = Some(duration);
        self.events.push(EncounterEvent::BossStunned { duration });
        let cue = self.cfg.animations.stunned.clone();
        self.animate(&cue);
    }

    /// Distance from the boss to the target, if one exists.
    pub fn target_distance(&self) -> Option<f32> {
        self.target.map(|t| self.state.position.distance(t))
    }
}

/// The single routine slot owned by the encounter.
///
/// One boss entity never runs two routines concurrently; starting a new one
/// replaces (cancels) the old.
pub(crate) enum ActiveRoutine {
    Melee(MeleeEngagement),
    Barrage(BarrageRoutine),
    Stun(StunRoutine),
}

impl ActiveRoutine {
    pub fn tick(&mut self, ctx: &mut TickCtx<'_>, dt: f32) -> Step {
        use routine::Routine as _;
        match self {
            ActiveRoutine::Melee(r) => r.tick(ctx, dt),
            ActiveRoutine::Barrage(r) => r.tick(ctx, dt),
            ActiveRoutine::Stun(r) => r.tick(ctx, dt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActiveRoutine::Melee(_) => "melee_engagement",
            ActiveRoutine::Barrage(_) => "leap_barrage",
            ActiveRoutine::Stun(_) => "stun",
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use encounter_core::EncounterConfig;

    /// Owned bundle from which a `TickCtx` can be borrowed in routine tests.
    pub struct CtxHarness {
        pub state: BossState,
        pub cfg: EncounterConfig,
        pub dice: Dice,
        pub events: Vec<EncounterEvent>,
        pub input: InputFrame,
        pub target: Option<Vec2>,
        pub now: f64,
        pub phase: Phase,
    }

    impl CtxHarness {
        pub fn new(target: Option<Vec2>) -> Self {
            let cfg = EncounterConfig::default();
            Self {
                state: BossState::new(cfg.max_health, Vec2::ZERO),
                cfg,
                dice: Dice::new(7),
                events: Vec::new(),
                input: InputFrame::empty(),
                target,
                now: 0.0,
                phase: Phase::One,
            }
        }

        pub fn ctx(&mut self) -> TickCtx<'_> {
            TickCtx {
                state: &mut self.state,
                cfg: &self.cfg,
                dice: &mut self.dice,
                events: &mut self.events,
                input: &self.input,
                target: self.target,
                now: self.now,
                phase: self.phase,
                stun_pending: None,
            }
        }
    }
}
