//! Core routine trait.
//!
//! This module defines the [`Routine`] trait, the fundamental abstraction for
//! all time-sliced sequences. The trait is generic over a context type `C`,
//! allowing routines to read and mutate game state between suspensions.

use crate::Step;

/// A cooperative routine advanced once per frame.
///
/// Routines are stateful: each call to [`tick`](Routine::tick) resumes where
/// the previous frame left off. A routine that returned [`Step::Complete`]
/// must not be ticked again.
pub trait Routine<C>: Send {
    /// Advance this routine by one frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context. Routines read game state
    ///   and apply their effects through it.
    /// * `dt` - Frame delta time in seconds.
    fn tick(&mut self, ctx: &mut C, dt: f32) -> Step;
}
