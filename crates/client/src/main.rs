//! Headless encounter simulator.
//!
//! Runs a scripted player against the boss encounter at a fixed 60 Hz and
//! logs every event the encounter emits. Useful for balancing passes and for
//! eyeballing phase pacing without a game engine attached.
//!
//! ```bash
//! # Default tuning, random seed
//! cargo run -p encounter-client
//!
//! # With a RON tuning file
//! cargo run -p encounter-client -- demos/aggressive.ron
//! RUST_LOG=runtime=debug cargo run -p encounter-client
//! ```

use anyhow::{Context, Result};
use encounter_core::{EncounterConfig, Vec2};
use runtime::{
    Encounter, EncounterEnv, EncounterEvent, FixedTarget, InputFlags, InputFrame, load_tuning,
};

const DT: f32 = 1.0 / 60.0;
/// Hard cap on simulated time.
const MAX_SECONDS: f64 = 300.0;
/// Chip damage the scripted player lands per swing.
const PLAYER_SWING_DAMAGE: f32 = 3.0;
const PLAYER_SWING_PERIOD: f64 = 0.7;

/// Scripted stand-in for a human: orbits between close and far range,
/// occasionally timing a defend.
struct ScriptedPlayer {
    frame: u64,
}

impl ScriptedPlayer {
    fn new() -> Self {
        Self { frame: 0 }
    }

    fn advance(&mut self) {
        self.frame += 1;
    }

    /// Oscillates between 2 and 6 units from the arena origin.
    fn position(&self) -> Vec2 {
        let t = self.frame as f32 * DT;
        Vec2::new(4.0 + 2.0 * (t * 0.4).sin(), 0.0)
    }

    /// Periodic timed defends on both guards, offset so they interleave, and
    /// a held lower guard half the time.
    fn input(&self) -> InputFrame {
        let mut pressed = InputFlags::empty();
        if self.frame % 47 == 0 {
            pressed |= InputFlags::UPPER_DEFEND;
        }
        if self.frame % 61 == 0 {
            pressed |= InputFlags::LOWER_DEFEND;
        }
        let mut held = pressed;
        if (self.frame / 120) % 2 == 0 {
            held |= InputFlags::LOWER_DEFEND;
        }
        InputFrame { pressed, held }
    }
}

fn log_event(event: &EncounterEvent, now: f64) {
    match event {
        EncounterEvent::AnimationRequested { cue } => {
            tracing::debug!(t = format!("{now:.2}"), cue, "animation")
        }
        other => tracing::info!(t = format!("{now:.2}"), event = other.label(), detail = ?other),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path).with_context(|| format!("loading tuning `{path}`"))?,
        None => EncounterConfig::default(),
    };
    let seed: u64 = rand::random();
    tracing::info!(seed, "starting simulated encounter");

    let mut encounter = Encounter::new(cfg, seed, Vec2::ZERO)?;
    let mut player = ScriptedPlayer::new();
    let mut next_swing = PLAYER_SWING_PERIOD;

    while !encounter.state().defeated {
        player.advance();
        let oracle = FixedTarget::at(player.position());
        let env = EncounterEnv::new(&oracle);
        let input = player.input();

        for event in encounter.tick(DT, &input, &env) {
            log_event(&event, encounter.clock());
        }

        if encounter.clock() >= next_swing {
            next_swing += PLAYER_SWING_PERIOD;
            for event in encounter.apply_damage(PLAYER_SWING_DAMAGE) {
                log_event(&event, encounter.clock());
            }
        }

        if encounter.clock() > MAX_SECONDS {
            tracing::warn!("time cap reached before the boss fell");
            break;
        }
    }

    tracing::info!(
        t = format!("{:.2}", encounter.clock()),
        phase = %encounter.phase(),
        "simulation finished"
    );
    Ok(())
}
