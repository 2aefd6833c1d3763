use std::collections::BTreeSet;

use crate::Point;
use crate::error::GoError;
use crate::group;
use crate::state::GameState;
use crate::stone::Stone;

/// A placement that passed validation, together with the opponent stones it captures.
///
/// Only [`check_move`] constructs these, so [`GameState::apply`] never sees an
/// unchecked move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMove {
    pub(crate) point: Point,
    pub(crate) stone: Stone,
    pub(crate) captured: Vec<Point>,
}

impl LegalMove {
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Captured points in row-major order.
    pub fn captured(&self) -> &[Point] {
        &self.captured
    }
}

/// Decide whether `stone` may be placed at `point` and which stones it would capture.
///
/// Works on a copy of the board, so each call is O(N²).
pub fn check_move(state: &GameState, point: Point, stone: Stone) -> Result<LegalMove, GoError> {
    let board = &state.board;
    if !board.on_board(point) {
        return Err(GoError::NotOnBoard);
    }
    if !board.is_vacant(point) {
        return Err(GoError::Occupied);
    }
    if state.ko == Some(point) {
        return Err(GoError::KoViolation);
    }

    let mut hypothetical = board.clone();
    hypothetical.set_stone(point, stone);

    // Captures are resolved before suicide: taking stones creates liberties.
    let mut captured: BTreeSet<Point> = BTreeSet::new();
    for n in hypothetical.neighbors(point) {
        if hypothetical.stone_at(n) != Some(stone.opp()) || captured.contains(&n) {
            continue;
        }
        if let Some(chain) = group::analyze(&hypothetical, n) {
            if chain.is_dead() {
                captured.extend(chain.stones);
            }
        }
    }

    if captured.is_empty() && group::analyze(&hypothetical, point).is_some_and(|g| g.is_dead()) {
        return Err(GoError::Suicide);
    }

    Ok(LegalMove {
        point,
        stone,
        captured: captured.into_iter().collect(),
    })
}

/// Whether `stone` has at least one legal placement.
pub fn has_legal_move(state: &GameState, stone: Stone) -> bool {
    state
        .board
        .points()
        .any(|p| check_move(state, p, stone).is_ok())
}
