//! Outbound encounter events.
//!
//! Events are the write-side boundary: everything the encounter wants the
//! host engine to do (spawn a projectile, play an animation, hurt the player)
//! is expressed as a fire-and-forget event drained from `tick`. There is no
//! return or await contract; a host that drops an event simply skips the
//! effect.

use encounter_core::{FloatRange, ParryWindow, Phase, ProjectileVariant, Vec2};

/// How a hit should be presented/guarded on the receiving side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageKind {
    Upper,
    Lower,
    /// Ignores blocks entirely (spin contact, barrage finisher).
    Unblockable,
}

/// Spawn request for one ranged minion.
#[derive(Clone, Debug, PartialEq)]
pub struct MinionSpawn {
    pub position: Vec2,
    pub variant: ProjectileVariant,
    /// Seconds between minion shots.
    pub shot_interval: FloatRange,
    /// Seconds until the minion despawns on its own.
    pub lifetime: f32,
}

/// Everything the encounter asks of its host, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum EncounterEvent {
    /// The boss entered a new phase. `forced` marks debug overrides.
    PhaseChanged {
        from: Phase,
        to: Phase,
        forced: bool,
    },

    /// Fire-and-forget animation cue.
    AnimationRequested { cue: String },

    /// Fire a projectile toward the player.
    ProjectileSpawned {
        origin: Vec2,
        direction: Vec2,
        speed: f32,
        damage: f32,
        lifetime: f32,
        variant: ProjectileVariant,
    },

    /// Spawn a wave of ranged minions near the boss.
    MinionsSpawned { spawns: Vec<MinionSpawn> },

    /// A melee strike began its windup; hosts flash the parry prompt off
    /// this.
    ParryWindowOpened { window: ParryWindow },

    /// The player should take damage.
    PlayerDamaged { amount: f32, kind: DamageKind },

    /// The boss took damage.
    BossDamaged { amount: f32, health_after: f32 },

    /// A successful parry (or dodge combo) stunned the boss.
    BossStunned { duration: f32 },

    /// The stun wore off.
    BossRecovered,

    /// An in-flight attack sequence was cancelled (debug override or defeat).
    SequenceCancelled,

    /// Health reached zero; the encounter is over.
    BossDefeated,
}

impl EncounterEvent {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            EncounterEvent::PhaseChanged { .. } => "phase_changed",
            EncounterEvent::AnimationRequested { .. } => "animation",
            EncounterEvent::ProjectileSpawned { .. } => "projectile",
            EncounterEvent::MinionsSpawned { .. } => "minions",
            EncounterEvent::ParryWindowOpened { .. } => "parry_window",
            EncounterEvent::PlayerDamaged { .. } => "player_damaged",
            EncounterEvent::BossDamaged { .. } => "boss_damaged",
            EncounterEvent::BossStunned { .. } => "boss_stunned",
            EncounterEvent::BossRecovered => "boss_recovered",
            EncounterEvent::SequenceCancelled => "sequence_cancelled",
            EncounterEvent::BossDefeated => "boss_defeated",
        }
    }
}
