//! Text for the HUD, menu and end-of-run screens.

use void_app::APP_NAME;
use void_core::{Difficulty, GameState};

pub const MENU_HELP_LINES: [&str; 2] = ["Use UP/DOWN to select, ENTER to start", "Use WASD keys to play"];

pub fn menu_title() -> &'static str {
    APP_NAME
}

pub fn menu_option_label(difficulty: Difficulty) -> &'static str {
    difficulty.label()
}

pub fn cooldown_text(state: &GameState) -> String {
    format!("SPACE = Clap | Cooldown: {}", state.cooldown_seconds())
}

/// Active note text in quotes, if one is still on screen.
pub fn note_text(state: &GameState) -> Option<String> {
    state.hud.note.map(|note| format!("\"{}\"", note.text))
}

pub fn whisper_text(state: &GameState) -> Option<&'static str> {
    state.hud.whisper
}
