//! Property tests for game invariants.
//!
//! Random sequences of choices and shuffles, checked after every step.

use std::collections::HashMap;

use proptest::prelude::*;

use memory_match::core::{CardId, ChoiceOutcome, GameConfig, GameState};
use memory_match::rules::MatchingEngine;

#[derive(Clone, Debug)]
enum Step {
    /// Choose by raw id. May be out of range on purpose.
    Choose(u32),
    Shuffle,
}

fn step_strategy(max_id: u32) -> impl Strategy<Value = Step> {
    prop_oneof![
        8 => (0..max_id).prop_map(Step::Choose),
        1 => Just(Step::Shuffle),
    ]
}

fn check_invariants(state: &GameState<usize>, pairs: usize, flip_matched_down: bool) {
    let cards = state.cards();
    assert_eq!(cards.len(), pairs * 2);

    // Every content appears on exactly two cards, both matched or neither.
    let mut by_content: HashMap<usize, Vec<bool>> = HashMap::new();
    for card in cards {
        by_content.entry(card.content).or_default().push(card.is_matched);
    }
    assert_eq!(by_content.len(), pairs);
    for flags in by_content.values() {
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0], flags[1]);
    }

    // Position index agrees with display order.
    for (idx, card) in cards.iter().enumerate() {
        assert_eq!(state.position_of(card.id), Some(idx));
    }

    if !flip_matched_down {
        assert!(cards.iter().filter(|c| c.is_matched).all(|c| c.is_face_up));
    }

    let up: Vec<_> = cards.iter().filter(|c| c.is_face_up && !c.is_matched).collect();
    match state.pending() {
        Some(id) => {
            assert_eq!(up.len(), 1);
            assert_eq!(up[0].id, id);
            assert_eq!(state.cards()[state.index_of_pending().unwrap()].id, id);
        }
        None => match up.as_slice() {
            [] => {}
            [a, b] => assert_ne!(a.content, b.content),
            other => panic!("{} face-up unmatched cards with nothing pending", other.len()),
        },
    }

    // Score is the sum of recorded points, and records are numbered in order.
    let total: i64 = state.history().iter().map(|r| r.outcome.points()).sum();
    assert_eq!(state.score(), total);
    for (i, record) in state.history().iter().enumerate() {
        assert_eq!(record.sequence as usize, i);
    }
}

fn run(seed: u64, pairs: usize, flip_matched_down: bool, steps: &[Step]) {
    let config = GameConfig::builder()
        .seed(seed)
        .flip_matched_down(flip_matched_down)
        .build();
    let engine = MatchingEngine::new(config);
    let mut state = engine.create(pairs, |pair| pair).unwrap();
    check_invariants(&state, pairs, flip_matched_down);

    for step in steps {
        match step {
            Step::Choose(raw) => {
                let before = state.snapshot();
                let outcome = engine.choose(&mut state, CardId(*raw));
                if let ChoiceOutcome::Ignored(_) = outcome {
                    assert_eq!(state.snapshot(), before);
                }
            }
            Step::Shuffle => {
                let mut before: Vec<_> = state.cards().to_vec();
                let pending = state.pending();
                engine.shuffle(&mut state);

                let mut after: Vec<_> = state.cards().to_vec();
                before.sort_by_key(|c| c.id);
                after.sort_by_key(|c| c.id);
                assert_eq!(before, after);
                assert_eq!(state.pending(), pending);
            }
        }
        check_invariants(&state, pairs, flip_matched_down);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_invariants_hold(
        seed in any::<u64>(),
        pairs in 1usize..10,
        flip in any::<bool>(),
        steps in prop::collection::vec(step_strategy(22), 0..80),
    ) {
        run(seed, pairs, flip, &steps);
    }

    #[test]
    fn test_same_seed_same_game(
        seed in any::<u64>(),
        pairs in 1usize..10,
        steps in prop::collection::vec(step_strategy(20), 0..40),
    ) {
        let engine = MatchingEngine::new(GameConfig::builder().seed(seed).build());
        let mut a = engine.create(pairs, |pair| pair).unwrap();
        let mut b = engine.create(pairs, |pair| pair).unwrap();

        for step in &steps {
            match step {
                Step::Choose(raw) => {
                    let x = engine.choose(&mut a, CardId(*raw));
                    let y = engine.choose(&mut b, CardId(*raw));
                    prop_assert_eq!(x, y);
                }
                Step::Shuffle => {
                    engine.shuffle(&mut a);
                    engine.shuffle(&mut b);
                }
            }
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}

/// Choosing every card in id order eventually finds every pair.
#[test]
fn test_sweep_completes_game() {
    let engine = MatchingEngine::new(GameConfig::builder().seed(11).build());
    let mut state = engine.create(6, |pair| pair).unwrap();

    for pair in 0..6u32 {
        let (a, b) = CardId::pair(pair);
        assert!(matches!(engine.choose(&mut state, a), ChoiceOutcome::Revealed { .. }));
        assert!(matches!(engine.choose(&mut state, b), ChoiceOutcome::Matched { .. }));
    }

    assert!(state.is_complete());
    assert_eq!(state.matched_pairs(), 6);
    assert_eq!(state.score(), 12);
    check_invariants(&state, 6, false);
}
