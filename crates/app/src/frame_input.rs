//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const ACTION_KEYS: [KeyCode; 10] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Enter,
    KeyCode::C,
    KeyCode::V,
    KeyCode::Z,
    KeyCode::X,
    KeyCode::Q,
];

const PAN_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

#[derive(Default)]
pub struct FrameInput {
    /// Keys that went down this frame. Drives every discrete command.
    pub keys_pressed: Vec<KeyCode>,
    /// Keys held this frame. Only camera panning reads these.
    pub keys_down: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    let keys_down = PAN_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    FrameInput { keys_pressed, keys_down }
}
