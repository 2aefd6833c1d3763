use rand::RngExt;

use crate::Point;
use crate::rules::check_move;
use crate::state::GameState;
use crate::stone::Stone;
use crate::turn::Turn;

const CAPTURE_WEIGHT: f64 = 40.0;
const CENTER_BONUS: f64 = 2.0;
const EDGE_PENALTY: f64 = 2.0;
const NOISE: f64 = 5.0;

/// Pick a move for `stone` with a greedy one-ply heuristic: captures first,
/// then the center, avoiding the first line, with random noise to vary play.
///
/// Ties go to the first candidate in row-major order. Passes only when no
/// legal placement exists.
pub fn choose_move<R: RngExt>(state: &GameState, stone: Stone, rng: &mut R) -> Turn {
    let mut best: Option<(Point, f64)> = None;

    for point in state.board.points() {
        let Ok(mv) = check_move(state, point, stone) else {
            continue;
        };
        let score = rng.random_range(0.0..NOISE)
            + CAPTURE_WEIGHT * mv.captured().len() as f64
            + positional_bonus(point, state.size());
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((point, score));
        }
    }

    match best {
        Some((point, _)) => Turn::play(stone, point),
        None => Turn::pass(stone),
    }
}

/// `+2` inside the outer two rings, `-2` on the first line, `0` on the second line.
fn positional_bonus((row, col): Point, size: u8) -> f64 {
    let last = size.saturating_sub(1);
    let inner = |v: u8| v >= 2 && v < last.saturating_sub(1);
    if inner(row) && inner(col) {
        CENTER_BONUS
    } else if row == 0 || col == 0 || row == last || col == last {
        -EDGE_PENALTY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goban::Goban;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bonus_regions_on_nine_by_nine() {
        assert_eq!(positional_bonus((4, 4), 9), 2.0);
        assert_eq!(positional_bonus((2, 6), 9), 2.0);
        assert_eq!(positional_bonus((1, 4), 9), 0.0);
        assert_eq!(positional_bonus((7, 7), 9), 0.0);
        assert_eq!(positional_bonus((0, 4), 9), -2.0);
        assert_eq!(positional_bonus((5, 8), 9), -2.0);
    }

    #[test]
    fn bonus_near_the_far_edge_of_a_huge_board() {
        assert_eq!(positional_bonus((254, 100), 255), -2.0);
        assert_eq!(positional_bonus((253, 100), 255), 0.0);
        assert_eq!(positional_bonus((252, 100), 255), 2.0);
        assert_eq!(positional_bonus((0, 0), 1), -2.0);
    }

    #[test]
    fn never_passes_on_empty_board() {
        let state = GameState::new(9);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let turn = choose_move(&state, Stone::White, &mut rng);
            assert!(!turn.is_pass());
            assert_eq!(turn.stone, Stone::White);
        }
    }

    #[test]
    fn opening_move_lands_in_center_region() {
        // First-line points score below 3; with 25 center points scoring 2..7 the
        // best one clears that for any of these seeds.
        let state = GameState::new(9);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (row, col) = choose_move(&state, Stone::White, &mut rng).pos.unwrap();
            assert!(row != 0 && row != 8 && col != 0 && col != 8);
        }
    }

    #[test]
    fn prefers_capture() {
        let mut state = GameState::from_board(Goban::from_layout(&[
            "+WB+++", "WB++++", "+W++++", "++++++", "++++++", "++++++",
        ]));
        state.turn = Stone::White;
        // White (0,3) captures nothing; White takes Black (1,1) by playing (1,2).
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let turn = choose_move(&state, Stone::White, &mut rng);
            assert_eq!(turn.pos, Some((1, 2)));
        }
    }

    #[test]
    fn passes_without_legal_moves() {
        let state = GameState::from_board(Goban::from_layout(&["BW", "WB"]));
        let mut rng = StdRng::seed_from_u64(7);
        assert!(choose_move(&state, Stone::White, &mut rng).is_pass());
    }

    #[test]
    fn respects_ko() {
        let mut state = GameState::from_board(Goban::from_layout(&["+B", "BW"]));
        state.ko = Some((0, 0));
        // (0,0) is the only empty point and it is locked.
        let mut rng = StdRng::seed_from_u64(1);
        assert!(choose_move(&state, Stone::White, &mut rng).is_pass());
    }
}
