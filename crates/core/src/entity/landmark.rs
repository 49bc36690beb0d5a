use glam::Vec2;

use crate::consts::{EXIT_SIZE, NOTE_SIZE};
use crate::geometry::Rect;

/// A readable note. Shows its text once, the first time the player touches it.
#[derive(Clone, Debug)]
pub struct Note {
    pub rect: Rect,
    text: &'static str,
    read: bool,
}

impl Note {
    pub fn new(position: Vec2, text: &'static str) -> Self {
        Self { rect: Rect::new(position.x, position.y, NOTE_SIZE, NOTE_SIZE), text, read: false }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Text to show when `player` overlaps an unread note. The caller marks it read.
    pub fn check_read(&self, player: &Rect) -> Option<&'static str> {
        (!self.read && self.rect.intersects(player)).then_some(self.text)
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[derive(Clone, Debug)]
pub struct ExitPoint {
    pub rect: Rect,
}

impl ExitPoint {
    pub fn new(position: Vec2) -> Self {
        Self { rect: Rect::new(position.x, position.y, EXIT_SIZE, EXIT_SIZE) }
    }

    pub fn reached_by(&self, player: &Rect) -> bool {
        self.rect.intersects(player)
    }
}
