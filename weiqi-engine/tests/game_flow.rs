use weiqi_engine::{AiOutcome, Captures, Engine, GameConfig, GameState, GoError, Goban, Stage, Stone};

fn config() -> GameConfig {
    GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    }
}

/// Pad a top-left layout out to a full 9x9 board.
fn nine_by_nine(layout: &[&str]) -> Goban {
    let rows: Vec<String> = (0..9)
        .map(|r| format!("{:+<9}", layout.get(r).copied().unwrap_or("")))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Goban::from_layout(&rows)
}

#[test]
fn corner_capture_then_ko_then_release() {
    let board = nine_by_nine(&["+WB", "+B"]);
    let mut engine = Engine::from_state(config().two_player(), GameState::from_board(board));

    let out = engine.place_stone((0, 0)).unwrap();
    assert_eq!(out.captured, vec![(0, 1)]);
    assert_eq!(out.ko, Some((0, 1)));
    assert_eq!(out.next_turn, Stone::White);

    assert_eq!(engine.place_stone((0, 1)), Err(GoError::KoViolation));

    engine.place_stone((6, 6)).unwrap();
    assert_eq!(engine.ko(), None);
    // Two turns later the point is playable again.
    assert!(engine.place_stone((0, 1)).is_ok());
}

#[test]
fn human_against_ai_until_both_pass() {
    let mut engine = Engine::new(config());
    let human_moves = [(2, 2), (6, 6), (2, 6), (6, 2)];

    for p in human_moves {
        let p = if engine.is_legal(p) {
            p
        } else {
            engine.legal_moves(Stone::Black)[0]
        };
        engine.place_stone(p).unwrap();
        assert!(engine.awaiting_ai());
        engine.ai_turn().unwrap();
        assert_eq!(engine.stage(), Stage::BlackToPlay);
    }

    assert_eq!(engine.move_count(), 8);
    assert_eq!(
        engine.board().count(Stone::Black) as u32 + engine.captures().white,
        4
    );

    engine.pass().unwrap();
    engine.set_ai(None);
    let out = engine.pass().unwrap();
    assert!(out.game_over);
    assert_eq!(engine.stage(), Stage::Over);
}

#[test]
fn ai_self_play_accounts_for_every_stone() {
    let mut engine = Engine::new(GameConfig {
        size: 5,
        seed: Some(11),
        ..GameConfig::default()
    });
    let mut placed = Captures::new();

    for _ in 0..300 {
        if engine.is_over() {
            break;
        }
        let ai = engine.turn();
        engine.set_ai(Some(ai));
        match engine.ai_turn().unwrap() {
            AiOutcome::Play(out) => {
                assert_eq!(out.stone, ai);
                match ai {
                    Stone::Black => placed.black += 1,
                    Stone::White => placed.white += 1,
                }
            }
            AiOutcome::Pass(out) => assert_eq!(out.stone, ai),
        }
    }

    let board = engine.board();
    let captures = engine.captures();
    assert!(board.board().iter().all(|&v| (-1..=1).contains(&v)));
    assert_eq!(board.count(Stone::Black) as u32 + captures.white, placed.black);
    assert_eq!(board.count(Stone::White) as u32 + captures.black, placed.white);
}

#[test]
fn undo_all_the_way_back() {
    let mut engine = Engine::new(config().two_player());
    for p in [(4, 4), (4, 5), (3, 5), (5, 5), (4, 6), (8, 8), (5, 4)] {
        engine.place_stone(p).unwrap();
    }
    assert_eq!(engine.captures().black, 0);

    while engine.undo().restored {}
    assert!(engine.board().is_empty());
    assert_eq!(engine.turn(), Stone::Black);
    assert_eq!(engine.last_move(), None);
}
