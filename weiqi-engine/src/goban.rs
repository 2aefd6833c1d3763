use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// A square Go board stored as a flat row-major array of cells
/// (`1` = Black, `-1` = White, `0` = empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
}

impl Goban {
    /// Create an empty board of `size` × `size` cells.
    pub fn with_size(size: u8) -> Self {
        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
        }
    }

    /// Create a board from a square matrix of cell values.
    pub fn new(rows: Vec<Vec<i8>>) -> Self {
        let size = rows.len();
        assert!(
            size <= u8::MAX as usize && rows.iter().all(|row| row.len() == size),
            "board matrix must be square"
        );

        Goban {
            board: rows.into_iter().flatten().collect(),
            size: size as u8,
        }
    }

    /// Build a board from an ASCII layout. 'B' = Black, 'W' = White, anything else is empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let rows = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'B' => Stone::Black.to_cell(),
                        'W' => Stone::White.to_cell(),
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Goban::new(rows)
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// The stone at `point`; `None` for empty cells and off-board points.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn is_vacant(&self, point: Point) -> bool {
        self.on_board(point) && self.board[self.idx(point)] == 0
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.board.iter().filter(|&&v| v == stone.to_cell()).count()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// The orthogonal neighbors of `point` that lie on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    // -- Mutation --

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = stone.to_cell();
        }
    }

    pub(crate) fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = 0;
        }
    }

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.stone_at((row, col)).map_or('+', Stone::glyph))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
