use serde::{Deserialize, Serialize};

use crate::Point;
use crate::goban::Goban;
use crate::rules::LegalMove;
use crate::stone::Stone;

/// Stones captured, indexed by the color that captured them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Everything needed to continue a game from a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Goban,
    pub turn: Stone,
    pub captures: Captures,
    /// The single stone taken by the previous placement; nobody may play here next move.
    pub ko: Option<Point>,
    pub last_move: Option<Point>,
    pub pass_streak: u8,
    pub game_over: bool,
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new(size: u8) -> Self {
        Self::from_board(Goban::with_size(size))
    }

    /// Start from an existing position with Black to move.
    pub fn from_board(board: Goban) -> Self {
        GameState {
            board,
            turn: Stone::Black,
            captures: Captures::new(),
            ko: None,
            last_move: None,
            pass_streak: 0,
            game_over: false,
        }
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Apply a validated placement: place the stone, lift the captured
    /// stones, update ko and counters, and hand the turn over.
    pub fn apply(&mut self, mv: &LegalMove) {
        self.board.set_stone(mv.point, mv.stone);
        for &p in &mv.captured {
            self.board.clear_stone(p);
        }
        self.captures.add(mv.stone, mv.captured.len() as u32);
        self.ko = match mv.captured.as_slice() {
            [single] => Some(*single),
            _ => None,
        };
        self.last_move = Some(mv.point);
        self.pass_streak = 0;
        self.turn = mv.stone.opp();
    }

    /// Record a pass for the side to move. Returns true when this pass ends the game.
    pub(crate) fn pass(&mut self) -> bool {
        self.pass_streak += 1;
        self.ko = None;
        if self.pass_streak >= 2 {
            self.game_over = true;
        } else {
            self.turn = self.turn.opp();
        }
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_move;

    #[test]
    fn fresh_state() {
        let state = GameState::new(9);
        assert!(state.board.is_empty());
        assert_eq!(state.turn, Stone::Black);
        assert_eq!(state.captures, Captures { black: 0, white: 0 });
        assert_eq!(state.ko, None);
        assert_eq!(state.last_move, None);
        assert_eq!(state.pass_streak, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn apply_places_and_flips_turn() {
        let mut state = GameState::new(9);
        let mv = check_move(&state, (2, 3), Stone::Black).unwrap();
        state.apply(&mv);
        assert_eq!(state.board.stone_at((2, 3)), Some(Stone::Black));
        assert_eq!(state.last_move, Some((2, 3)));
        assert_eq!(state.turn, Stone::White);
        assert_eq!(state.ko, None);
    }

    #[test]
    fn single_capture_sets_ko() {
        let mut state = GameState::from_board(Goban::from_layout(&[
            "+BW+", "BW+W", "+BW+", "++++",
        ]));
        let mv = check_move(&state, (1, 2), Stone::Black).unwrap();
        state.apply(&mv);
        assert_eq!(state.board.stone_at((1, 1)), None);
        assert_eq!(state.captures.get(Stone::Black), 1);
        assert_eq!(state.ko, Some((1, 1)));
    }

    #[test]
    fn multi_capture_clears_ko() {
        let mut state = GameState::from_board(Goban::from_layout(&[
            "+BW+", "BW++", "W+++", "++++",
        ]));
        state.ko = Some((3, 3));
        state.turn = Stone::White;
        let mv = check_move(&state, (0, 0), Stone::White).unwrap();
        state.apply(&mv);
        assert_eq!(state.captures.white, 2);
        assert_eq!(state.ko, None);
        assert_eq!(state.board.stone_at((0, 1)), None);
        assert_eq!(state.board.stone_at((1, 0)), None);
        assert_eq!(state.board.stone_at((1, 1)), Some(Stone::White));
    }

    #[test]
    fn placement_resets_pass_streak() {
        let mut state = GameState::new(9);
        assert!(!state.pass());
        assert_eq!(state.pass_streak, 1);
        let mv = check_move(&state, (0, 0), Stone::White).unwrap();
        state.apply(&mv);
        assert_eq!(state.pass_streak, 0);
    }

    #[test]
    fn second_pass_ends_game_without_flipping() {
        let mut state = GameState::new(9);
        assert!(!state.pass());
        assert_eq!(state.turn, Stone::White);
        assert!(state.pass());
        assert!(state.game_over);
        assert_eq!(state.turn, Stone::White);
    }

    #[test]
    fn json_shape() {
        let state = GameState::new(2);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["board"]["board"], serde_json::json!([0, 0, 0, 0]));
        assert_eq!(json["turn"], 1);
        assert!(json["ko"].is_null());
        assert_eq!(json["captures"]["white"], 0);
    }
}
