//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

/// Held every tick: movement and clap.
const HELD_KEYS: [KeyCode; 5] = [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D, KeyCode::Space];
/// Edge-triggered: menu navigation and quit.
const PRESSED_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Enter, KeyCode::Escape];

#[derive(Default)]
pub struct FrameInput {
    pub keys_down: Vec<KeyCode>,
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = HELD_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    let mut keys_pressed: Vec<KeyCode> =
        PRESSED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    if is_key_pressed(KeyCode::KpEnter) {
        keys_pressed.push(KeyCode::Enter);
    }
    FrameInput { keys_down, keys_pressed }
}
