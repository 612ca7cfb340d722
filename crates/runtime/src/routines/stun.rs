//! Stun recovery routine.

use routine::{Routine, Step, Timer};

use crate::events::EncounterEvent;
use crate::routines::TickCtx;

/// Holds the boss in place until the stun wears off.
///
/// The stunned flag is raised by [`TickCtx::trigger_stun`] before this
/// routine is installed; this routine only times the recovery.
pub(crate) struct StunRoutine {
    timer: Timer,
}

impl StunRoutine {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::new(duration),
        }
    }
}

impl<'a> Routine<TickCtx<'a>> for StunRoutine {
    fn tick(&mut self, ctx: &mut TickCtx<'a>, dt: f32) -> Step {
        if self.timer.tick(dt) {
            ctx.state.stunned = false;
            ctx.events.push(EncounterEvent::BossRecovered);
            let cue = ctx.cfg.animations.idle.clone();
            ctx.animate(&cue);
            Step::Complete
        } else {
            Step::Running
        }
    }
}
