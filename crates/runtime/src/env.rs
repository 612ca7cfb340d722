//! Read-side boundaries consumed by the encounter.

use encounter_core::Vec2;

/// Target oracle: where the player currently is, if one exists.
///
/// Absence is a normal state (player dead, not yet spawned); the encounter
/// defers target-dependent actions rather than failing.
pub trait TargetOracle: Send + Sync {
    fn player_position(&self) -> Option<Vec2>;
}

/// Oracle returning a fixed position, for tests and scripted scenarios.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedTarget(pub Option<Vec2>);

impl FixedTarget {
    pub fn at(position: Vec2) -> Self {
        Self(Some(position))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl TargetOracle for FixedTarget {
    fn player_position(&self) -> Option<Vec2> {
        self.0
    }
}

/// Bundle of boundaries passed into each tick.
#[derive(Clone, Copy)]
pub struct EncounterEnv<'a> {
    pub target: &'a dyn TargetOracle,
}

impl<'a> EncounterEnv<'a> {
    pub fn new(target: &'a dyn TargetOracle) -> Self {
        Self { target }
    }
}
