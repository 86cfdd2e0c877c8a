//! Error types for the turn core.
//!
//! `BoardError` covers broken contracts (a coordinate or id the caller should
//! never have produced). Game-logic rejections such as an illegal move are not
//! errors; they are reported through [`ConfirmOutcome`](crate::ConfirmOutcome).

use thiserror::Error;

use crate::types::{Pos, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Pos, width: usize, height: usize },

    #[error("unit {0} does not exist")]
    UnitNotFound(UnitId),

    #[error("cell {pos} is already occupied by unit {occupant}")]
    CellOccupied { pos: Pos, occupant: UnitId },

    /// A cell and a unit disagree about where the unit stands.
    #[error("cell {pos} and unit {unit} disagree about occupancy")]
    OccupancyMismatch { pos: Pos, unit: UnitId },
}

/// Invalid setup data supplied before the first tick.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid {width}x{height} exceeds the {max} cell limit")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("terrain has {found} rows, expected {expected}")]
    TerrainHeight { expected: usize, found: usize },

    #[error("terrain row {row} has {found} cells, expected {expected}")]
    TerrainWidth { row: usize, expected: usize, found: usize },

    #[error("unknown terrain glyph {glyph:?} in row {row}")]
    UnknownTerrain { row: usize, glyph: char },

    #[error("unit {index} is placed at {pos}, outside the {width}x{height} grid")]
    UnitOutOfBounds { index: usize, pos: Pos, width: usize, height: usize },

    #[error("unit {index} is placed at {pos}, which unit {occupant} already occupies")]
    DuplicatePlacement { index: usize, pos: Pos, occupant: UnitId },

    #[error("unit {index} has negative movement {movement}")]
    NegativeMovement { index: usize, movement: i32 },

    #[error("cursor start {pos} is outside the {width}x{height} grid")]
    CursorOutOfBounds { pos: Pos, width: usize, height: usize },

    #[error("scenario produced an inconsistent board: {0}")]
    Board(#[from] BoardError),

    #[error("invalid scenario document: {0}")]
    Parse(#[from] toml::de::Error),
}
