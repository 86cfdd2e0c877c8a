//! Shared board fixtures for the unit test suites.
//! This module exists to avoid repeating grid and unit setup across many tests.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::grid::Grid;
use crate::types::{Job, Pos, UnitId};

pub(crate) fn open_grid(width: usize, height: usize) -> Grid {
    Grid::new(width, height).expect("fixture dimensions are positive")
}

/// Builds a position set from `(x, y)` pairs.
pub(crate) fn positions(coords: &[(i32, i32)]) -> BTreeSet<Pos> {
    coords.iter().map(|&(x, y)| Pos { y, x }).collect()
}

/// 3x3 open board. A stands at (0, 1), B at (1, 0), both with movement 2.
/// The cursor starts at the origin, which is empty.
pub(crate) fn two_unit_board() -> (Board, UnitId, UnitId) {
    let mut board = Board::new(open_grid(3, 3));
    let a = board.spawn_unit(Job::Noble, Pos { y: 1, x: 0 }, 2).expect("spawn A");
    let b = board.spawn_unit(Job::Smallfolk, Pos { y: 0, x: 1 }, 2).expect("spawn B");
    (board, a, b)
}

/// 5x1 corridor with a single movement-2 unit under the cursor at the origin.
pub(crate) fn corridor_board() -> Board {
    let mut board = Board::new(open_grid(5, 1));
    board.spawn_unit(Job::Smallfolk, Pos::ORIGIN, 2).expect("spawn");
    board
}
