//! Turn controller: interprets a confirm input against the current phase.
//!
//! | phase          | cursor                          | result                        |
//! |----------------|---------------------------------|-------------------------------|
//! | `SelectUnit`   | on a unit                       | select it, enter `UnitMovement` |
//! | `SelectUnit`   | on an empty cell                | `NoUnit`                      |
//! | `UnitMovement` | on the selected unit            | deselect, back to `SelectUnit` |
//! | `UnitMovement` | on a free legal cell            | move, enter `UnitActions`     |
//! | `UnitMovement` | on a legal cell holding a unit  | `Occupied`                    |
//! | `UnitMovement` | anywhere else                   | `IllegalMove`                 |
//! | `UnitActions`  | anywhere                        | close, back to `SelectUnit`   |
//!
//! A selection phase with nothing selected falls back to `SelectUnit`.

use tracing::{debug, info, warn};

use crate::board::{Board, Selection};
use crate::error::BoardError;
use crate::reachability::reachable_cells;
use crate::types::{ConfirmOutcome, TurnState};

impl Board {
    /// Applies one confirm input. `Err` means a broken contract (cursor or
    /// selection naming something that does not exist), never a rejected move.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, BoardError> {
        if let Some(abandoned) = self.normalize_turn_state() {
            warn!(state = ?abandoned, "selection missing; returning to unit selection");
            return Ok(ConfirmOutcome::SelectionLost { state: abandoned });
        }

        let cursor = self.cursor().position();
        let outcome = match self.turn_state {
            TurnState::SelectUnit => self.select_at_cursor()?,
            TurnState::UnitMovement => self.move_selected_to_cursor()?,
            TurnState::UnitActions => match self.selected_unit() {
                Some(unit) => {
                    self.clear_selection();
                    ConfirmOutcome::ActionsClosed { unit }
                }
                None => ConfirmOutcome::SelectionLost { state: TurnState::UnitActions },
            },
        };

        debug!(?cursor, ?outcome, state = ?self.turn_state, "confirm");
        Ok(outcome)
    }

    fn select_at_cursor(&mut self) -> Result<ConfirmOutcome, BoardError> {
        let pos = self.cursor().position();
        let Some(unit_id) = self.grid().occupant_at(pos)? else {
            return Ok(ConfirmOutcome::NoUnit { pos });
        };
        let unit = self.unit(unit_id)?;
        let legal_positions = reachable_cells(self.grid(), unit.pos(), unit.movement());
        let legal_count = legal_positions.len();
        self.selection = Some(Selection { unit: unit_id, legal_positions });
        self.turn_state = TurnState::UnitMovement;
        Ok(ConfirmOutcome::Selected { unit: unit_id, legal_count })
    }

    fn move_selected_to_cursor(&mut self) -> Result<ConfirmOutcome, BoardError> {
        let target = self.cursor().position();
        let Some(selection) = &self.selection else {
            return Ok(ConfirmOutcome::SelectionLost { state: self.turn_state });
        };
        let unit = selection.unit;
        let is_legal = selection.legal_positions.contains(&target);
        let unit_pos = self.unit(unit)?.pos();

        if target == unit_pos {
            self.clear_selection();
            return Ok(ConfirmOutcome::Deselected { unit });
        }
        if !is_legal {
            return Ok(ConfirmOutcome::IllegalMove { unit, target });
        }
        if let Some(occupant) = self.grid().occupant_at(target)? {
            return Ok(ConfirmOutcome::Occupied { unit, target, occupant });
        }

        let from = self.move_unit(unit, target)?;
        self.turn_state = TurnState::UnitActions;
        info!(%unit, %from, to = %target, "unit moved");
        Ok(ConfirmOutcome::Moved { unit, from, to: target })
    }
}
