mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;

use env_logger::{Builder, Env};
use macroquad::prelude::{get_frame_time, next_frame};
use macroquad::window::Conf;
use void_app::app_loop::AppState;
use void_app::format_seed;
use void_app::launch_args::{generate_runtime_seed, parse_launch_args};
use void_app::pacing::FixedStep;

use crate::frame_input::capture_frame_input;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let launch = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(launch) => launch,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };
    log::info!("Run seed {} ({:?})", format_seed(launch.seed.value()), launch.seed);

    let mut app = AppState::new(launch.seed.value(), launch.difficulty);
    let mut rate_hz = app.tick_rate_hz();
    let mut pacing = FixedStep::new(rate_hz);

    loop {
        if app.tick_rate_hz() != rate_hz {
            rate_hz = app.tick_rate_hz();
            pacing = FixedStep::new(rate_hz);
        }

        let input = capture_frame_input();
        let steps = pacing.advance(get_frame_time());
        app.tick(&input.keys_down, &input.keys_pressed, steps);
        if app.quit_requested {
            log::info!("Quit requested");
            break;
        }

        ui_render::draw_frame(&app);
        next_frame().await;
    }
}
