use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinate: `x` is the column, `y` the row, both 0-indexed.
///
/// Field order makes the derived `Ord` row-major, so sets of positions
/// iterate top-to-bottom, left-to-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { y: 0, x: 0 };

    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.offset();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stable unit identity. Assigned by the registry at creation and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Open,
    Blocking,
}

impl TerrainKind {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocking),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocking => '#',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    #[default]
    Smallfolk,
    Noble,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dx, dy)` in grid space; up is towards row 0.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The active phase. Governs what a confirm input means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    SelectUnit,
    UnitMovement,
    UnitActions,
}

/// One discrete, edge-triggered input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveCursor(Direction),
    Confirm,
    Undo,
    Redo,
}

/// Result of interpreting a confirm input against the current turn state.
///
/// Everything except `Moved` leaves history untouched. Rejections
/// (`NoUnit`, `IllegalMove`, `Occupied`) leave the board untouched as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Selected { unit: UnitId, legal_count: usize },
    NoUnit { pos: Pos },
    Deselected { unit: UnitId },
    Moved { unit: UnitId, from: Pos, to: Pos },
    IllegalMove { unit: UnitId, target: Pos },
    Occupied { unit: UnitId, target: Pos, occupant: UnitId },
    ActionsClosed { unit: UnitId },
    SelectionLost { state: TurnState },
}

impl ConfirmOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    CursorMoved { from: Pos, to: Pos },
    CursorBlocked { direction: Direction },
    Confirm(ConfirmOutcome),
    HistoryMoved { index: usize, len: usize },
}
