//! Text for the debug HUD.

use app::app_loop::{AppMode, AppState};
use app::{format_snapshot_hash, turn_state_label};
use tactics_core::Session;

const KEY_HELP: [&str; 5] = [
    "Q to quit",
    "Arrow keys to move camera",
    "Z/X zoom in/out",
    "C/V undo/redo",
    "WASD cursor, Enter confirm",
];

pub fn hud_lines(session: &Session, app_state: &AppState) -> Vec<String> {
    let frame = session.frame();
    let mut lines: Vec<String> = KEY_HELP.iter().map(|line| line.to_string()).collect();
    lines.push(format!("Cursor: {}", frame.cursor));
    lines.push(format!("Scale: {:.2}", app_state.camera.scale));
    lines.push(format!("Turn: {}", turn_state_label(frame.turn_state)));
    lines.push(format!("History: {}/{}", frame.history_index + 1, frame.history_len));
    lines.push(format!("Actions: {}", frame.actions_committed));
    lines.push(format!("Snapshot: {}", format_snapshot_hash(session.snapshot_hash())));
    match &app_state.mode {
        AppMode::Failed(reason) => lines.push(format!("Stopped: {reason}")),
        AppMode::Running | AppMode::Quit => {
            if let Some(message) = &app_state.last_message {
                lines.push(message.clone());
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::camera::Camera;
    use tactics_core::Scenario;

    #[test]
    fn hud_shows_help_cursor_and_history() {
        let session = Session::from_scenario(&Scenario::demo()).expect("demo");
        let app = AppState::new(Camera::default());
        let lines = hud_lines(&session, &app);
        assert_eq!(lines[0], "Q to quit");
        assert!(lines.contains(&"Cursor: (1, 3)".to_string()));
        assert!(lines.contains(&"History: 1/1".to_string()));
        assert!(lines.contains(&"Turn: Select unit".to_string()));
    }

    #[test]
    fn failure_reason_replaces_last_message() {
        let session = Session::from_scenario(&Scenario::demo()).expect("demo");
        let mut app = AppState::new(Camera::default());
        app.last_message = Some("Unit #0 is done".to_string());
        app.mode = AppMode::Failed("unit #9 does not exist".to_string());
        let lines = hud_lines(&session, &app);
        assert_eq!(lines.last().map(String::as_str), Some("Stopped: unit #9 does not exist"));
    }
}
