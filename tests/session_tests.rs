//! Session and persistence tests.
//!
//! Covers saving a game mid-turn, loading it back (bytes and JSON) and
//! continuing play as if nothing happened.

use memory_match::core::{CardId, GameConfig, GameSnapshot, GameState, ManualClock};
use memory_match::error::MatchError;
use memory_match::games::memorize::{MemorizeSession, Theme, ThemeCatalog};
use memory_match::rules::{MatchingEngine, TimeBonusScoring};

fn engine(seed: u64) -> MatchingEngine {
    MatchingEngine::new(GameConfig::builder().seed(seed).build())
}

// =============================================================================
// Snapshots
// =============================================================================

/// A game saved mid-turn continues identically after loading.
#[test]
fn test_saved_game_replays_identically() {
    let engine = engine(99);
    let mut live = engine.create(6, |pair| format!("c{pair}")).unwrap();

    let ids: Vec<CardId> = live.cards().iter().map(|c| c.id).collect();
    engine.choose(&mut live, ids[0]);
    engine.choose(&mut live, ids[1]);
    engine.choose(&mut live, ids[2]);

    let bytes = live.snapshot().to_bytes().unwrap();
    let mut loaded = GameState::restore(GameSnapshot::<String>::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(loaded.pending(), live.pending());
    assert_eq!(loaded.score(), live.score());
    assert_eq!(loaded.history().len(), live.history().len());

    // Shuffles draw from the same RNG position.
    engine.shuffle(&mut live);
    engine.shuffle(&mut loaded);
    assert_eq!(live.cards(), loaded.cards());

    for id in ids.iter().rev() {
        assert_eq!(engine.choose(&mut live, *id), engine.choose(&mut loaded, *id));
    }
    assert_eq!(live.snapshot(), loaded.snapshot());
}

/// Snapshots are plain serde values, so JSON works too.
#[test]
fn test_snapshot_json() {
    let engine = engine(3);
    let mut game = engine.create(3, |pair| ["x", "y", "z"][pair].to_string()).unwrap();
    let first = game.cards()[0].id;
    engine.choose(&mut game, first);

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let back: GameSnapshot<String> = serde_json::from_str(&json).unwrap();
    let restored = GameState::restore(back).unwrap();

    assert_eq!(restored.pending(), Some(first));
    assert_eq!(restored.cards(), game.cards());
}

/// Edited saves are rejected instead of producing an unreachable state.
#[test]
fn test_tampered_snapshot_rejected() {
    let engine = engine(3);
    let game = engine.create(4, |pair| pair as u8).unwrap();

    let mut snapshot = game.snapshot();
    snapshot.cards[0].is_face_up = true;
    snapshot.cards[1].is_face_up = true;
    snapshot.cards[2].is_face_up = true;
    let err = GameState::restore(snapshot).unwrap_err();
    assert!(matches!(err, MatchError::CorruptSnapshot(_)));
    assert!(!err.is_recoverable());

    assert!(matches!(
        GameSnapshot::<u8>::from_bytes(&[1, 2, 3]),
        Err(MatchError::Codec(_))
    ));
}

// =============================================================================
// Sessions
// =============================================================================

/// Successive games in one session come from the same seeded stream.
#[test]
fn test_new_game_sequence_is_reproducible() {
    let deals = |seed| {
        let mut session = MemorizeSession::start(engine(seed), ThemeCatalog::builtin()).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push((session.theme().name.clone(), session.cards().to_vec()));
            session.new_game().unwrap();
        }
        seen
    };

    let a = deals(17);
    assert_eq!(a, deals(17));
    assert!(a.windows(2).any(|w| w[0] != w[1]));
}

/// A custom single-theme catalog deals only that theme's contents.
#[test]
fn test_custom_catalog() {
    let theme = Theme::new("Letters", &["A", "B", "C", "D"], "black").with_pair_count(3);
    let catalog = ThemeCatalog::new(vec![theme]).unwrap();

    let mut session = MemorizeSession::start(engine(5), catalog).unwrap();
    assert_eq!(session.theme().name, "Letters");
    assert_eq!(session.game().pair_count(), 3);
    assert!(session
        .cards()
        .iter()
        .all(|c| ["A", "B", "C", "D"].contains(&c.content.as_str())));

    session.new_game().unwrap();
    assert_eq!(session.cards().len(), 6);
}

/// Bad catalogs fail when built, not when dealing.
#[test]
fn test_invalid_catalogs() {
    assert!(matches!(ThemeCatalog::new(Vec::new()), Err(MatchError::EmptyCatalog)));

    let too_many = Theme::new("Tiny", &["A", "B"], "red").with_pair_count(5);
    assert!(matches!(
        ThemeCatalog::new(vec![too_many]),
        Err(MatchError::InvalidTheme { .. })
    ));

    let repeats = Theme::new("Echo", &["A", "A", "B"], "red");
    assert!(ThemeCatalog::new(vec![repeats]).is_err());
}

/// Catalogs loaded from JSON are validated before any game is dealt.
#[test]
fn test_catalog_from_json() {
    let bad = r#"{"themes": [{"name": "Tiny", "contents": ["a", "b"], "pair_count": 5}]}"#;
    assert!(serde_json::from_str::<ThemeCatalog>(bad).is_err());

    let good = r#"{"themes": [{"name": "Tiny", "contents": ["a", "b"], "pair_count": 2}]}"#;
    let catalog: ThemeCatalog = serde_json::from_str(good).unwrap();
    let session = MemorizeSession::start(engine(1), catalog).unwrap();
    assert_eq!(session.theme().color, "orange");
    assert_eq!(session.cards().len(), 4);
}

/// A saved session resumes with the same theme and keeps scoring bonus time.
#[test]
fn test_session_save_and_resume() {
    let clock = ManualClock::new(1_000);
    let make_engine = || {
        MatchingEngine::with_scoring(
            GameConfig::builder().seed(12).bonus_time_limit_ms(4_000).build(),
            TimeBonusScoring::default(),
        )
        .with_clock(clock.clone())
    };

    let mut session = MemorizeSession::start(make_engine(), ThemeCatalog::builtin()).unwrap();
    let first = session.cards()[0].clone();
    let partner = session
        .cards()
        .iter()
        .find(|c| c.id != first.id && c.content == first.content)
        .map(|c| c.id)
        .unwrap();

    session.choose(first.id);
    clock.advance(2_000);

    let bytes = session.game().snapshot().to_bytes().unwrap();
    let theme = session.theme().name.clone();
    let snapshot = GameSnapshot::from_bytes(&bytes).unwrap();
    let mut resumed = MemorizeSession::resume(make_engine(), ThemeCatalog::builtin(), &theme, snapshot).unwrap();

    assert_eq!(resumed.theme(), session.theme());
    let outcome = resumed.choose(partner);
    // 2 + floor(10 * 0.5) + floor(10 * 1.0)
    assert_eq!(outcome.points(), 17);
    assert_eq!(resumed.score(), 17);
}
