use macroquad::prelude::KeyCode;
use void_core::consts::{MENU_RATE_HZ, TICK_RATE_HZ};
use void_core::{Difficulty, Game, GameConfig, RunOutcome, TickInput};

use crate::menu::MenuState;
use crate::outcome_code;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Menu(MenuState),
    Playing,
    Finished(RunOutcome),
}

pub struct AppState {
    pub mode: AppMode,
    pub seed: u64,
    pub quit_requested: bool,
    game: Option<Game>,
}

/// Maps held keys to one tick of movement and clap input.
pub fn tick_input_from_keys(keys_down: &[KeyCode]) -> TickInput {
    TickInput {
        up: keys_down.contains(&KeyCode::W),
        down: keys_down.contains(&KeyCode::S),
        left: keys_down.contains(&KeyCode::A),
        right: keys_down.contains(&KeyCode::D),
        clap: keys_down.contains(&KeyCode::Space),
    }
}

impl AppState {
    /// Opens on the menu, or starts playing straight away with a preset difficulty.
    pub fn new(seed: u64, preset: Option<Difficulty>) -> Self {
        let mut app =
            Self { mode: AppMode::Menu(MenuState::default()), seed, quit_requested: false, game: None };
        if let Some(difficulty) = preset {
            app.start(&GameConfig::for_difficulty(difficulty));
        }
        app
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Simulation rate for the current screen.
    pub fn tick_rate_hz(&self) -> u32 {
        match self.mode {
            AppMode::Menu(_) => MENU_RATE_HZ,
            AppMode::Playing | AppMode::Finished(_) => TICK_RATE_HZ,
        }
    }

    /// One rendered frame: edge-triggered keys first, then `steps` game ticks.
    pub fn tick(&mut self, keys_down: &[KeyCode], keys_pressed: &[KeyCode], steps: u32) {
        if keys_pressed.contains(&KeyCode::Escape) {
            self.quit_requested = true;
            return;
        }

        match self.mode {
            AppMode::Menu(mut menu) => {
                if keys_pressed.contains(&KeyCode::Up) {
                    menu.move_up();
                }
                if keys_pressed.contains(&KeyCode::Down) {
                    menu.move_down();
                }
                self.mode = AppMode::Menu(menu);
                if keys_pressed.contains(&KeyCode::Enter) {
                    self.start(&menu.confirm());
                }
            }
            AppMode::Playing => self.advance_game(tick_input_from_keys(keys_down), steps),
            AppMode::Finished(_) => {}
        }
    }

    fn start(&mut self, config: &GameConfig) {
        log::info!("Starting {} run with seed {}", config.difficulty, self.seed);
        self.game = Some(Game::new(config, self.seed));
        self.mode = AppMode::Playing;
    }

    fn advance_game(&mut self, input: TickInput, steps: u32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        for _ in 0..steps {
            game.tick(&input);
            for event in game.events() {
                log::debug!("tick {}: {event:?}", game.current_tick());
            }
            if let Some(outcome) = game.outcome() {
                log::info!("Run ended after {} ticks: {}", game.current_tick(), outcome_code(outcome));
                self.mode = AppMode::Finished(outcome);
                return;
            }
        }
    }
}
