//! Property tests over arbitrary command sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use tally_engine::{Cell, GameEngine, Player, PlayResult, RoundOutcome, WinningLine};

#[derive(Debug, Clone, Copy)]
enum Command {
    Play(i64),
    ResetRound,
    ResetMatch,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        12 => (-2i64..11).prop_map(Command::Play),
        1 => Just(Command::ResetRound),
        1 => Just(Command::ResetMatch),
    ]
}

fn line_owners(engine: &GameEngine) -> HashSet<Player> {
    WinningLine::ALL
        .iter()
        .filter_map(|line| line.owner(engine.board()))
        .collect()
}

proptest! {
    #[test]
    fn prop_marks_alternate_and_at_most_one_winner(indices in prop::collection::vec(0i64..9, 0..40)) {
        let mut engine = GameEngine::new();
        for idx in indices {
            engine.play(idx).expect("index in range");

            let x = engine.board().count(Player::X);
            let o = engine.board().count(Player::O);
            prop_assert!(x == o || x == o + 1);
            prop_assert!(line_owners(&engine).len() <= 1);
        }
    }

    #[test]
    fn prop_scores_track_wins_between_match_resets(commands in prop::collection::vec(command(), 0..80)) {
        let mut engine = GameEngine::new();
        let mut expected = (0u32, 0u32);

        for cmd in commands {
            let before = engine.scores();
            match cmd {
                Command::Play(idx) => {
                    if let Ok(PlayResult::Accepted { outcome: RoundOutcome::Win { player, .. }, .. }) = engine.play(idx) {
                        match player {
                            Player::X => expected.0 += 1,
                            Player::O => expected.1 += 1,
                        }
                    }
                    let after = engine.scores();
                    prop_assert!(after.0 >= before.0 && after.1 >= before.1);
                    prop_assert!((after.0 + after.1) - (before.0 + before.1) <= 1);
                }
                Command::ResetRound => {
                    engine.reset_round();
                    prop_assert_eq!(engine.scores(), before);
                }
                Command::ResetMatch => {
                    engine.reset_match();
                    expected = (0, 0);
                }
            }
            prop_assert_eq!(engine.scores(), expected);
        }
    }

    #[test]
    fn prop_rejected_moves_never_mutate(commands in prop::collection::vec(command(), 0..80)) {
        let mut engine = GameEngine::new();
        for cmd in commands {
            match cmd {
                Command::Play(idx) => {
                    let before = engine.clone();
                    match engine.play(idx) {
                        Ok(PlayResult::Accepted { .. }) => {
                            prop_assert!(before.is_active());
                            prop_assert_eq!(
                                before.board().get(tally_engine::Position::try_from(idx).expect("accepted index")),
                                Cell::Empty
                            );
                        }
                        Ok(PlayResult::Rejected(_)) | Err(_) => {
                            prop_assert_eq!(&engine, &before);
                        }
                    }
                }
                Command::ResetRound => engine.reset_round(),
                Command::ResetMatch => engine.reset_match(),
            }
        }
    }

    #[test]
    fn prop_terminal_round_is_frozen(indices in prop::collection::vec(0i64..9, 9..40), attempts in prop::collection::vec(-2i64..11, 1..20)) {
        let mut engine = GameEngine::new();
        for idx in indices {
            engine.play(idx).expect("index in range");
        }
        prop_assume!(!engine.is_active());

        let frozen = engine.clone();
        for idx in attempts {
            let _ = engine.play(idx);
            prop_assert_eq!(&engine, &frozen);
        }
    }

    #[test]
    fn prop_resets_restore_round_start(indices in prop::collection::vec(0i64..9, 0..40), full in any::<bool>()) {
        let mut engine = GameEngine::new();
        for idx in indices {
            engine.play(idx).expect("index in range");
        }
        let scores = engine.scores();

        if full {
            engine.reset_match();
            prop_assert_eq!(engine.scores(), (0, 0));
        } else {
            engine.reset_round();
            prop_assert_eq!(engine.scores(), scores);
        }
        prop_assert_eq!(engine.current_player(), Player::X);
        prop_assert_eq!(engine.outcome(), RoundOutcome::InProgress);
        prop_assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
    }
}
