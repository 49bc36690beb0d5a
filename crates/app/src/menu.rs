//! Pre-game difficulty selection.

use void_core::{Difficulty, GameConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn selected(&self) -> Difficulty {
        Difficulty::ALL[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + Difficulty::ALL.len() - 1) % Difficulty::ALL.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % Difficulty::ALL.len();
    }

    pub fn confirm(&self) -> GameConfig {
        GameConfig::for_difficulty(self.selected())
    }
}
