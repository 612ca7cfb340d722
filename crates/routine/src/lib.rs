//! Minimal cooperative routine library for frame-ticked games.
//!
//! This library replaces engine-level coroutines (yield/resume between
//! frames) with explicit state machines driven by an external tick function.
//!
//! - **Frame-based**: a routine is ticked once per frame with the frame delta
//! - **Cancellation**: dropping a routine terminates it abruptly; there are no
//!   cleanup callbacks, callers reset their own flags
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Routine`]: core trait for all tickable state machines
//! - [`Step`]: Running or Complete
//! - Value types: [`Timer`] (relative countdown), [`Cooldown`] (absolute
//!   clock deadline for interval scheduling)

pub mod step;
pub mod timing;

mod routine;

pub use crate::routine::Routine;
pub use step::Step;
pub use timing::{Cooldown, Timer};
