//! End-to-end encounter scenarios.
//!
//! These drive a real [`Encounter`] at 60 Hz through whole fights: chip
//! damage pushes the boss through its phases, scripted input exercises the
//! parry and dodge paths, and debug overrides exercise cancellation.

use encounter_core::{EncounterConfig, Phase, Vec2};
use runtime::{
    DebugCommand, Encounter, EncounterEnv, EncounterEvent, FixedTarget, InputFlags, InputFrame,
};

const DT: f32 = 1.0 / 60.0;

fn encounter(seed: u64) -> Encounter {
    Encounter::new(EncounterConfig::default(), seed, Vec2::ZERO).expect("default config is valid")
}

fn phase_changes(events: &[EncounterEvent]) -> Vec<(Phase, Phase, bool)> {
    events
        .iter()
        .filter_map(|e| match e {
            EncounterEvent::PhaseChanged { from, to, forced } => Some((*from, *to, *forced)),
            _ => None,
        })
        .collect()
}

fn has_cue(events: &[EncounterEvent], cue: &str) -> bool {
    events
        .iter()
        .any(|e| matches!(e, EncounterEvent::AnimationRequested { cue: c } if c == cue))
}

/// A full fight: steady chip damage from full health to defeat, with the
/// player standing in leap range the whole time.
#[test]
fn full_fight_walks_through_all_three_phases() {
    let mut enc = encounter(42);
    let oracle = FixedTarget::at(Vec2::new(4.0, 0.0));
    let env = EncounterEnv::new(&oracle);
    let input = InputFrame::empty();

    let mut all = Vec::new();
    let mut since_hit = 0.0;
    let mut elapsed = 0.0;
    while !enc.state().defeated {
        all.extend(enc.tick(DT, &input, &env));
        since_hit += DT;
        if since_hit >= 0.5 {
            since_hit = 0.0;
            all.extend(enc.apply_damage(2.0));
        }
        elapsed += DT;
        assert!(elapsed < 60.0, "4 hp/s must end the fight well within 60s");
    }

    // Phases advanced in order, each exactly once, none forced.
    assert_eq!(
        phase_changes(&all),
        vec![
            (Phase::One, Phase::Two, false),
            (Phase::Two, Phase::Three, false),
        ]
    );
    assert!(has_cue(&all, "BossPhase2Transition"));
    assert!(has_cue(&all, "BossPhase3Transition"));

    // Every phase contributed its signature offense.
    assert!(
        all.iter()
            .any(|e| matches!(e, EncounterEvent::ProjectileSpawned { .. })),
        "ranged pressure should run from phase 1"
    );
    assert!(
        all.iter()
            .any(|e| matches!(e, EncounterEvent::MinionsSpawned { .. })),
        "phase 2 should spawn minions"
    );
    assert!(
        has_cue(&all, "BossBarrageCharge"),
        "phase 3 should attempt a leap barrage"
    );

    // The fight ends exactly once.
    let defeats = all
        .iter()
        .filter(|e| matches!(e, EncounterEvent::BossDefeated))
        .count();
    assert_eq!(defeats, 1);
    assert!(has_cue(&all, "BossDeath"));

    // And a dead boss stays quiet.
    assert!(enc.tick(DT, &input, &env).is_empty());
}

/// Forcing a phase mid-sequence must drop the sequence and leave the boss in
/// a clean idle state.
#[test]
fn forced_phase_cancels_the_running_sequence() {
    let mut enc = encounter(7);
    let oracle = FixedTarget::at(Vec2::new(3.0, 0.0));
    let env = EncounterEnv::new(&oracle);
    let input = InputFrame::empty();

    // Let the shot counter fill until the boss commits to a melee leap.
    let mut elapsed = 0.0;
    while !enc.state().is_busy() {
        enc.tick(DT, &input, &env);
        elapsed += DT;
        assert!(elapsed < 20.0, "a melee engagement should start within 20s");
    }

    let events = enc.execute(DebugCommand::ForcePhase(Phase::Three));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, EncounterEvent::SequenceCancelled))
    );
    assert_eq!(
        phase_changes(&events),
        vec![(Phase::One, Phase::Three, true)]
    );
    assert_eq!(enc.phase(), Phase::Three);
    assert!(!enc.state().is_busy());
    assert!(!enc.state().stunned);
    assert_eq!(enc.state().combo_count, 0, "phase 3 entry resets the combo");
}

/// A player who parries everything stuns the boss and then sees it recover.
#[test]
fn perfect_parries_stun_then_release_the_boss() {
    let mut enc = encounter(13);
    let oracle = FixedTarget::at(Vec2::new(2.0, 0.0));
    let env = EncounterEnv::new(&oracle);
    // Both guards go down fresh every tick: any strike is perfectly parried.
    let input = InputFrame::press(InputFlags::UPPER_DEFEND | InputFlags::LOWER_DEFEND);

    let mut all = Vec::new();
    let mut elapsed = 0.0;
    while !all
        .iter()
        .any(|e| matches!(e, EncounterEvent::BossRecovered))
    {
        all.extend(enc.tick(DT, &input, &env));
        elapsed += DT;
        assert!(elapsed < 30.0, "a stun cycle should complete within 30s");
    }

    assert!(
        all.iter()
            .any(|e| matches!(e, EncounterEvent::BossStunned { .. }))
    );
    assert!(
        !all.iter()
            .any(|e| matches!(e, EncounterEvent::PlayerDamaged { .. })),
        "perfect parries let no melee damage through"
    );
    assert!(!enc.state().stunned);
    assert!(!enc.state().is_busy());
}

/// Phase 3 opens with a leap barrage; three timed defends break it.
#[test]
fn barrage_dodges_break_the_charge() {
    let mut enc = encounter(5);
    let oracle = FixedTarget::at(Vec2::new(5.0, 0.0));
    let env = EncounterEnv::new(&oracle);
    let input = InputFrame::press(InputFlags::LOWER_DEFEND);

    enc.execute(DebugCommand::ForcePhase(Phase::Three));

    let mut all = Vec::new();
    let mut elapsed = 0.0;
    while !enc.state().stunned {
        all.extend(enc.tick(DT, &input, &env));
        elapsed += DT;
        assert!(
            elapsed < 1.0,
            "the barrage fires immediately and three presses break it"
        );
    }

    assert!(has_cue(&all, "BossBarrageCharge"));
    assert!(
        all.iter()
            .any(|e| matches!(e, EncounterEvent::BossStunned { .. }))
    );
    assert!(
        !all.iter()
            .any(|e| matches!(e, EncounterEvent::PlayerDamaged { .. })),
        "a broken barrage deals no damage"
    );
}

/// Reset puts everything back, including cadence state, mid-fight.
#[test]
fn reset_mid_fight_restores_the_opening_book() {
    let mut enc = encounter(27);
    let oracle = FixedTarget::at(Vec2::new(4.0, 0.0));
    let env = EncounterEnv::new(&oracle);
    let input = InputFrame::empty();

    enc.apply_damage(45.0);
    for _ in 0..120 {
        enc.tick(DT, &input, &env);
    }
    assert_eq!(enc.phase(), Phase::Two);

    enc.execute(DebugCommand::ResetEncounter);
    assert_eq!(enc.phase(), Phase::One);
    assert_eq!(enc.state().health, enc.config().max_health);
    assert_eq!(enc.state().position, Vec2::ZERO);
    assert!(!enc.state().is_busy());

    // Phase 1 behavior resumes: shots, no minions.
    let mut after = Vec::new();
    for _ in 0..(5.0 / DT) as usize {
        after.extend(enc.tick(DT, &input, &env));
    }
    assert!(
        after
            .iter()
            .any(|e| matches!(e, EncounterEvent::ProjectileSpawned { .. }))
    );
    assert!(
        !after
            .iter()
            .any(|e| matches!(e, EncounterEvent::MinionsSpawned { .. }))
    );
}
