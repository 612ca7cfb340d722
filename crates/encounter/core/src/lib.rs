//! Deterministic boss-encounter rules shared across hosts.
//!
//! `encounter-core` defines the canonical combat rules (phase thresholds,
//! parry resolution, attack pattern selection) and exposes pure APIs that can
//! be reused by the runtime and offline balancing tools. Nothing in this
//! crate performs I/O or talks to a game engine; hosts apply the decisions
//! made here through their own integration layer.

pub mod config;
pub mod parry;
pub mod pattern;
pub mod phase;
pub mod rng;
pub mod state;

pub use config::{AnimationSet, ConfigError, EncounterConfig, FloatRange, IntRange};
pub use parry::{DefenseInput, MeleeAttack, ParryOutcome, ParryRules, ParryWindow, resolve_parry};
pub use pattern::{
    AttackSequence, AttackStep, MAX_SEQUENCE_STEPS, PatternSelector, ProjectileVariant,
};
pub use phase::{Phase, PhaseTracker, PhaseTransition};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use state::{Activity, BossState, DamageIntake};

/// 2D position/direction type used throughout the encounter rules.
pub use glam::Vec2;
