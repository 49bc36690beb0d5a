//! Window configuration for the desktop app.

use macroquad::window::Conf;
use void_app::APP_NAME;
use void_core::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: VIEWPORT_WIDTH as i32,
        window_height: VIEWPORT_HEIGHT as i32,
        // World and HUD are laid out in fixed viewport pixels.
        window_resizable: false,
        ..Default::default()
    }
}
