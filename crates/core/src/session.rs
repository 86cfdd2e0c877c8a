//! Single owner of all mutable match state.
//!
//! This module exists so that the board, its undo/redo timeline, the action
//! and tick counters and the input journal live in one value the frontend
//! holds, rather than in process-wide globals. Only `Session` mutates the
//! board after setup.

use tracing::{debug, warn};

use crate::board::Board;
use crate::error::{BoardError, SetupError};
use crate::history::HistoryLog;
use crate::journal::InputJournal;
use crate::scenario::Scenario;
use crate::types::{Command, CommandOutcome, Direction, Job, Pos, TurnState, UnitId};

/// Edge-triggered commands collected during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub moves: Vec<Direction>,
    pub confirm: bool,
    pub undo: bool,
    pub redo: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && !self.confirm && !self.undo && !self.redo
    }

    /// Commands in application order: moves, confirm, undo, redo. Each
    /// direction appears at most once, in the order it was first pressed.
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.moves.len() + 3);
        for (index, &direction) in self.moves.iter().enumerate() {
            if !self.moves[..index].contains(&direction) {
                commands.push(Command::MoveCursor(direction));
            }
        }
        if self.confirm {
            commands.push(Command::Confirm);
        }
        if self.undo {
            commands.push(Command::Undo);
        }
        if self.redo {
            commands.push(Command::Redo);
        }
        commands
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitView {
    pub id: UnitId,
    pub job: Job,
    pub pos: Pos,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameView {
    pub cursor: Pos,
    pub turn_state: TurnState,
    pub selected_unit: Option<UnitId>,
    /// Empty unless `turn_state` is `UnitMovement`.
    pub legal_positions: Vec<Pos>,
    pub units: Vec<UnitView>,
    pub history_index: usize,
    pub history_len: usize,
    pub actions_committed: u64,
}

#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    history: HistoryLog,
    actions_committed: u64,
    tick: u64,
    journal: InputJournal,
}

impl Session {
    /// Starts a match from a fully set-up board. The board becomes the first
    /// history entry.
    pub fn new(board: Board) -> Result<Self, BoardError> {
        board.check_occupancy()?;
        let journal = InputJournal::new(board.snapshot_hash());
        let history = HistoryLog::new(board.clone());
        Ok(Self { board, history, actions_committed: 0, tick: 0, journal })
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SetupError> {
        Ok(Self::new(scenario.build_board()?)?)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn into_journal(self) -> InputJournal {
        self.journal
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn actions_committed(&self) -> u64 {
        self.actions_committed
    }

    pub fn snapshot_hash(&self) -> u64 {
        self.board.snapshot_hash()
    }

    /// Applies one frame of input, then advances the tick counter.
    pub fn tick(&mut self, input: &TickInput) -> Result<Vec<CommandOutcome>, BoardError> {
        let outcomes = input
            .commands()
            .into_iter()
            .map(|command| self.apply(command))
            .collect::<Result<Vec<_>, _>>()?;
        self.advance_tick();
        Ok(outcomes)
    }

    /// Applies a single command at the current tick and records it.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, BoardError> {
        let outcome = match command {
            Command::MoveCursor(direction) => {
                let from = self.board.cursor().position();
                if self.board.move_cursor(direction) {
                    CommandOutcome::CursorMoved { from, to: self.board.cursor().position() }
                } else {
                    CommandOutcome::CursorBlocked { direction }
                }
            }
            Command::Confirm => {
                let outcome = self.board.confirm()?;
                if outcome.is_commit() {
                    self.history.commit(self.board.clone());
                    self.actions_committed += 1;
                    debug!(
                        actions = self.actions_committed,
                        history_len = self.history.len(),
                        "action committed"
                    );
                }
                CommandOutcome::Confirm(outcome)
            }
            Command::Undo => {
                self.board = self.history.undo().clone();
                self.after_restore()
            }
            Command::Redo => {
                self.board = self.history.redo().clone();
                self.after_restore()
            }
        };
        self.journal.append(self.tick, command);
        Ok(outcome)
    }

    pub fn frame(&self) -> FrameView {
        FrameView {
            cursor: self.board.cursor().position(),
            turn_state: self.board.turn_state(),
            selected_unit: self.board.selected_unit(),
            legal_positions: self.board.legal_positions(),
            units: self
                .board
                .units()
                .iter()
                .map(|unit| UnitView { id: unit.id(), job: unit.job(), pos: unit.pos() })
                .collect(),
            history_index: self.history.index(),
            history_len: self.history.len(),
            actions_committed: self.actions_committed,
        }
    }

    pub(crate) fn advance_tick(&mut self) {
        self.tick += 1;
        self.journal.ticks = self.tick;
    }

    /// Jumps the tick counter forward to `tick` without iterating over the gap.
    /// Earlier ticks are ignored.
    pub(crate) fn skip_to_tick(&mut self, tick: u64) {
        if tick > self.tick {
            self.tick = tick;
            self.journal.ticks = tick;
        }
    }

    fn after_restore(&mut self) -> CommandOutcome {
        if let Some(abandoned) = self.board.normalize_turn_state() {
            warn!(state = ?abandoned, "restored snapshot had no selection; returning to unit selection");
        }
        CommandOutcome::HistoryMoved { index: self.history.index(), len: self.history.len() }
    }
}
