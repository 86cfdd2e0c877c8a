//! The live game board: grid, cursor, units, turn phase and selection.
//! A clone of a `Board` is a full snapshot for undo/redo.

use std::collections::BTreeSet;

use crate::cursor::Cursor;
use crate::error::{BoardError, SetupError};
use crate::grid::Grid;
use crate::types::{Direction, Job, Pos, TurnState, UnitId};
use crate::units::{Unit, UnitRegistry};

mod hash;

/// The unit being commanded and where it may go this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub unit: UnitId,
    pub legal_positions: BTreeSet<Pos>,
}

/// A full, immutable copy of board state captured for undo/redo.
pub type Snapshot = Board;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    cursor: Cursor,
    units: UnitRegistry,
    pub(crate) turn_state: TurnState,
    pub(crate) selection: Option<Selection>,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        let cursor = Cursor::new(grid.width(), grid.height());
        Self {
            grid,
            cursor,
            units: UnitRegistry::new(),
            turn_state: TurnState::SelectUnit,
            selection: None,
        }
    }

    pub fn with_cursor(mut self, pos: Pos) -> Result<Self, SetupError> {
        let (width, height) = (self.grid.width(), self.grid.height());
        self.cursor = Cursor::at(pos, width, height)
            .map_err(|_| SetupError::CursorOutOfBounds { pos, width, height })?;
        Ok(self)
    }

    /// Places a new unit during setup.
    pub fn spawn_unit(&mut self, job: Job, pos: Pos, movement: i32) -> Result<UnitId, SetupError> {
        let index = self.units.len();
        let (width, height) = (self.grid.width(), self.grid.height());
        let occupant = self
            .grid
            .occupant_at(pos)
            .map_err(|_| SetupError::UnitOutOfBounds { index, pos, width, height })?;
        if let Some(occupant) = occupant {
            return Err(SetupError::DuplicatePlacement { index, pos, occupant });
        }
        if movement < 0 {
            return Err(SetupError::NegativeMovement { index, movement });
        }
        let id = self.units.spawn(job, pos, movement);
        self.grid
            .set_occupant(pos, Some(id))
            .map_err(|_| SetupError::UnitOutOfBounds { index, pos, width, height })?;
        Ok(id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit, BoardError> {
        self.units.get(id)
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_unit(&self) -> Option<UnitId> {
        self.selection.as_ref().map(|selection| selection.unit)
    }

    /// Legal destinations to show. Empty outside `UnitMovement`.
    pub fn legal_positions(&self) -> Vec<Pos> {
        match (self.turn_state, &self.selection) {
            (TurnState::UnitMovement, Some(selection)) => {
                selection.legal_positions.iter().copied().collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.cursor.step(direction)
    }

    /// The only code path that relocates a unit. Updates the old cell, the new
    /// cell and the unit's own position and history together.
    pub(crate) fn move_unit(&mut self, id: UnitId, to: Pos) -> Result<Pos, BoardError> {
        let from = self.units.get(id)?.pos();
        if let Some(occupant) = self.grid.occupant_at(to)?
            && occupant != id
        {
            return Err(BoardError::CellOccupied { pos: to, occupant });
        }
        if self.grid.occupant_at(from)? != Some(id) {
            return Err(BoardError::OccupancyMismatch { pos: from, unit: id });
        }
        self.grid.set_occupant(from, None)?;
        self.grid.set_occupant(to, Some(id))?;
        self.units.get_mut(id)?.relocate(to);
        Ok(from)
    }

    /// Verifies that cells and units agree: every occupant points at a unit
    /// recorded on that cell, and every unit is named by its cell.
    pub fn check_occupancy(&self) -> Result<(), BoardError> {
        for cell in self.grid.cells() {
            if let Some(id) = cell.occupant
                && self.units.get(id)?.pos() != cell.pos
            {
                return Err(BoardError::OccupancyMismatch { pos: cell.pos, unit: id });
            }
        }
        for unit in self.units.iter() {
            if self.grid.occupant_at(unit.pos())? != Some(unit.id()) {
                return Err(BoardError::OccupancyMismatch { pos: unit.pos(), unit: unit.id() });
            }
        }
        Ok(())
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection = None;
        self.turn_state = TurnState::SelectUnit;
    }

    /// Falls back to `SelectUnit` when a selection phase has nothing selected.
    /// Returns the state that had to be abandoned, if any.
    pub(crate) fn normalize_turn_state(&mut self) -> Option<TurnState> {
        match (self.turn_state, &self.selection) {
            (TurnState::SelectUnit, None) => None,
            (TurnState::SelectUnit, Some(_)) => {
                self.selection = None;
                None
            }
            (TurnState::UnitMovement | TurnState::UnitActions, Some(_)) => None,
            (state @ (TurnState::UnitMovement | TurnState::UnitActions), None) => {
                self.turn_state = TurnState::SelectUnit;
                Some(state)
            }
        }
    }
}
