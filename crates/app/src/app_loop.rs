use macroquad::prelude::KeyCode;
use tactics_core::{CommandOutcome, Direction, Session, TickInput, TurnState};
use tracing::error;

use crate::camera::Camera;
use crate::outcome_message;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Running,
    Quit,
    /// The core reported a broken contract; input is ignored from here on.
    Failed(String),
}

const CURSOR_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::W, Direction::Up),
    (KeyCode::S, Direction::Down),
    (KeyCode::A, Direction::Left),
    (KeyCode::D, Direction::Right),
];

const PAN_KEYS: [(KeyCode, f32, f32); 4] = [
    (KeyCode::Up, 0.0, -1.0),
    (KeyCode::Down, 0.0, 1.0),
    (KeyCode::Left, -1.0, 0.0),
    (KeyCode::Right, 1.0, 0.0),
];

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub camera: Camera,
    pub last_message: Option<String>,
    /// Whether the latest `tick` applied at least one command. Recomputed every
    /// frame; the caller persists the journal when it is set.
    pub journal_dirty: bool,
}

impl AppState {
    pub fn new(camera: Camera) -> Self {
        Self { camera, ..Self::default() }
    }

    /// Maps edge-triggered keys to the core's per-tick command set.
    pub fn tick_input(keys_pressed: &[KeyCode]) -> TickInput {
        TickInput {
            moves: CURSOR_KEYS
                .iter()
                .filter(|(key, _)| keys_pressed.contains(key))
                .map(|(_, direction)| *direction)
                .collect(),
            confirm: keys_pressed.contains(&KeyCode::Enter),
            undo: keys_pressed.contains(&KeyCode::C),
            redo: keys_pressed.contains(&KeyCode::V),
        }
    }

    /// Process input and logic for a single frame. `keys_pressed` holds keys
    /// that went down this frame, `keys_down` keys that are held.
    pub fn tick(&mut self, session: &mut Session, keys_pressed: &[KeyCode], keys_down: &[KeyCode]) {
        if self.mode != AppMode::Running {
            return;
        }
        if keys_pressed.contains(&KeyCode::Q) {
            self.mode = AppMode::Quit;
            return;
        }

        if keys_pressed.contains(&KeyCode::Z) {
            self.camera.zoom_in();
        }
        if keys_pressed.contains(&KeyCode::X) {
            self.camera.zoom_out();
        }
        // The camera stays put while the action menu is open.
        if session.board().turn_state() != TurnState::UnitActions {
            for (key, dx, dy) in PAN_KEYS {
                if keys_down.contains(&key) {
                    self.camera.pan(dx, dy);
                }
            }
        }

        let input = Self::tick_input(keys_pressed);
        self.journal_dirty = !input.is_empty();
        match session.tick(&input) {
            Ok(outcomes) => self.note_outcomes(&outcomes),
            Err(err) => {
                error!(%err, tick = session.current_tick(), "turn core rejected input");
                self.mode = AppMode::Failed(err.to_string());
            }
        }
    }

    fn note_outcomes(&mut self, outcomes: &[CommandOutcome]) {
        for outcome in outcomes {
            match outcome {
                CommandOutcome::Confirm(confirm) => {
                    self.last_message = Some(outcome_message(confirm));
                }
                CommandOutcome::HistoryMoved { index, len } => {
                    self.last_message = Some(format!("History {}/{}", index + 1, len));
                }
                CommandOutcome::CursorMoved { .. } | CommandOutcome::CursorBlocked { .. } => {}
            }
        }
    }
}
