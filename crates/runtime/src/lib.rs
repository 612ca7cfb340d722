//! Runtime orchestration for the boss encounter.
//!
//! This crate wires the pure rules from `encounter-core` into a per-frame
//! tick pipeline. Consumers embed [`Encounter`], feed it frame deltas, input
//! snapshots, and a target oracle, and drain the [`EncounterEvent`]s it emits
//! for their own integration layer (spawning, animation, damage application).
//!
//! Modules are organized by responsibility:
//! - [`encounter`] hosts the orchestrator and the tick pipeline
//! - [`env`] exposes the read-side boundaries (target oracle)
//! - [`input`] defines the per-tick input snapshot
//! - [`events`] defines the outbound event stream
//! - [`tuning`] loads config overrides from RON files
//! - `routines` keeps the time-sliced attack sequences internal to the crate

pub mod encounter;
pub mod env;
pub mod events;
pub mod input;
pub mod tuning;

mod routines;

pub use encounter::{DebugCommand, Encounter, EncounterError};
pub use env::{EncounterEnv, FixedTarget, TargetOracle};
pub use events::{DamageKind, EncounterEvent, MinionSpawn};
pub use input::{InputFlags, InputFrame};
pub use tuning::{TuningError, load_tuning};
