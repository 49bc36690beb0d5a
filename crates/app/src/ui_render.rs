//! Rendering for the menu, the running world with its HUD, and end-of-run screens.

use macroquad::prelude::*;
use void_app::app_loop::{AppMode, AppState};
use void_app::menu::MenuState;
use void_app::outcome_message;
use void_core::consts::{SANITY_BAR_WARNING, SANITY_MAX, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use void_core::{
    Difficulty, Distortion, Game, GameState, Rect as WorldRect, RunOutcome, Vec2 as WorldVec2,
};

use crate::ui_text::{MENU_HELP_LINES, cooldown_text, menu_option_label, menu_title, note_text, whisper_text};

const PULSE_COLOR: [u8; 3] = [40, 100, 40];
const PLAYER_COLOR: [u8; 3] = [200, 200, 255];
const EXIT_COLOR: [u8; 3] = [0, 180, 255];
const BAR_BACKGROUND: [u8; 3] = [50, 50, 50];
const BAR_CALM: [u8; 3] = [0, 120, 255];
const BAR_WARNING: [u8; 3] = [255, 100, 100];
const COOLDOWN_COLOR: [u8; 3] = [120, 255, 120];
const NOTE_COLOR: [u8; 3] = [180, 180, 180];
const WHISPER_COLOR: [u8; 3] = [224, 255, 255];
const TITLE_COLOR: [u8; 3] = [238, 32, 77];
const OPTION_SELECTED: [u8; 3] = [100, 255, 100];
const OPTION_IDLE: [u8; 3] = [100, 100, 100];
const HELP_COLOR: [u8; 3] = [228, 240, 152];
const LOSS_COLOR: [u8; 3] = [255, 0, 0];
const WIN_COLOR: [u8; 3] = [0, 255, 200];

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 10.0;
const HUD_FONT_SIZE: u16 = 20;
const MENU_FONT_SIZE: u16 = 32;

pub fn draw_frame(app: &AppState) {
    clear_background(BLACK);
    match (app.mode, app.game()) {
        (AppMode::Menu(menu), _) => draw_menu(&menu),
        (AppMode::Playing, Some(game)) => draw_run(game),
        (AppMode::Finished(outcome), _) => draw_outcome(outcome),
        (AppMode::Playing, None) => {}
    }
}

fn draw_menu(menu: &MenuState) {
    draw_centered(menu_title(), 100.0, MENU_FONT_SIZE, TITLE_COLOR);
    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let color = if index == menu.selected_index() { OPTION_SELECTED } else { OPTION_IDLE };
        draw_centered(menu_option_label(difficulty), 200.0 + index as f32 * 40.0, MENU_FONT_SIZE, color);
    }
    for (index, line) in MENU_HELP_LINES.into_iter().enumerate() {
        draw_centered(line, 400.0 + index as f32 * 40.0, HUD_FONT_SIZE, HELP_COLOR);
    }
}

fn draw_run(game: &Game) {
    let state = game.state();
    let shift = frame_shift(state.hud.distortion);
    draw_world(state, shift);
    draw_hud(state, shift);
    if let Some(distortion) = state.hud.distortion {
        let [r, g, b] = distortion.tint;
        draw_rectangle(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT, Color::from_rgba(r, g, b, distortion.alpha));
    }
}

fn draw_world(state: &GameState, shift: (f32, f32)) {
    let camera = &state.camera;
    let screen = |x: f32, y: f32| {
        let point = camera.apply_to_point(WorldVec2::new(x, y));
        (point.x + shift.0, point.y + shift.1)
    };
    let screen_rect = |rect: &WorldRect| {
        let rect = camera.apply_to_rect(rect);
        (rect.x + shift.0, rect.y + shift.1, rect.w, rect.h)
    };

    for pulse in &state.pulses {
        let (x, y) = screen(pulse.origin.x, pulse.origin.y);
        draw_circle_lines(x, y, pulse.radius(), 1.0, rgb(PULSE_COLOR));
    }
    for blip in &state.blips {
        let (x, y) = screen(blip.pos.x, blip.pos.y);
        draw_circle(x, y, 2.0, rgb(blip.color()));
    }
    for fake in &state.fake_enemies {
        let (x, y) = screen(fake.pos.x, fake.pos.y);
        draw_circle(x, y, 10.0, rgb(fake.color()));
    }

    let center = state.player.center();
    let (x, y) = screen(center.x, center.y);
    draw_circle(x, y, 5.0, rgb(PLAYER_COLOR));

    for enemy in state.enemies.values().filter(|enemy| enemy.is_alerted()) {
        let (x, y, w, h) = screen_rect(&enemy.rect);
        draw_rectangle(x, y, w, h, rgb([enemy.alert(), 0, 0]));
    }

    let (x, y, w, h) = screen_rect(&state.exit.rect);
    draw_rectangle(x, y, w, h, rgb(EXIT_COLOR));
}

fn draw_hud(state: &GameState, shift: (f32, f32)) {
    let (dx, dy) = shift;
    draw_rectangle(10.0 + dx, 10.0 + dy, BAR_WIDTH, BAR_HEIGHT, rgb(BAR_BACKGROUND));
    let (fill, color) = sanity_bar(state.sanity.value());
    draw_rectangle(10.0 + dx, 10.0 + dy, fill, BAR_HEIGHT, rgb(color));

    draw_text_top(&cooldown_text(state), 10.0 + dx, 25.0 + dy, HUD_FONT_SIZE, COOLDOWN_COLOR);
    if let Some(text) = note_text(state) {
        let x = centered_x(measure_text(&text, None, HUD_FONT_SIZE, 1.0).width, VIEWPORT_WIDTH);
        draw_text_top(&text, x + dx, VIEWPORT_HEIGHT - 40.0 + dy, HUD_FONT_SIZE, NOTE_COLOR);
    }
    if let Some(line) = whisper_text(state) {
        draw_text_top(line, 20.0 + dx, VIEWPORT_HEIGHT - 20.0 + dy, HUD_FONT_SIZE, WHISPER_COLOR);
    }
}

fn draw_outcome(outcome: RunOutcome) {
    let (size, color) = match outcome {
        RunOutcome::GameOver(_) => (50, LOSS_COLOR),
        RunOutcome::LevelComplete => (40, WIN_COLOR),
    };
    draw_centered(outcome_message(outcome), VIEWPORT_HEIGHT / 2.0, size, color);
}

fn draw_centered(text: &str, top: f32, font_size: u16, color: [u8; 3]) {
    let width = measure_text(text, None, font_size, 1.0).width;
    draw_text_top(text, centered_x(width, VIEWPORT_WIDTH), top, font_size, color);
}

/// `draw_text` positions by baseline; HUD layout is given by top edge.
fn draw_text_top(text: &str, x: f32, top: f32, font_size: u16, color: [u8; 3]) {
    draw_text(text, x, top + f32::from(font_size) * 0.8, f32::from(font_size), rgb(color));
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

fn sanity_bar(sanity: f32) -> (f32, [u8; 3]) {
    let fill = (sanity / SANITY_MAX * BAR_WIDTH).floor().clamp(0.0, BAR_WIDTH);
    let color = if sanity > SANITY_BAR_WARNING { BAR_CALM } else { BAR_WARNING };
    (fill, color)
}

fn frame_shift(distortion: Option<Distortion>) -> (f32, f32) {
    distortion.map_or((0.0, 0.0), |distortion| {
        (f32::from(distortion.shift_x), f32::from(distortion.shift_y))
    })
}

fn centered_x(text_width: f32, viewport_width: f32) -> f32 {
    (viewport_width / 2.0 - text_width / 2.0).floor()
}
