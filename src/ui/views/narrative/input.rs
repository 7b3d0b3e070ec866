//! Input handling for NarrativeView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{NarrativeView, StoryAction};

impl NarrativeView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> StoryAction {
        match key.code {
            k if keys::is_move_down(k) => {
                if self.move_down() {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if keys::is_move_up(k) => {
                if self.move_up() {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::GO_TOP => {
                if self.move_to_top() {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::GO_BOTTOM => {
                if self.move_to_bottom() {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::PAGE_DOWN => {
                if self.move_page(1) {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::PAGE_UP => {
                if self.move_page(-1) {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::HALF_PAGE_DOWN => {
                if self.move_half_page(1) {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            k if k == keys::HALF_PAGE_UP => {
                if self.move_half_page(-1) {
                    self.entered()
                } else {
                    StoryAction::None
                }
            }
            // Re-reports the selected step, useful after Show All
            k if k == keys::ENTER_STEP => self.entered(),
            k if k == keys::SHOW_ALL => StoryAction::ShowAll,
            _ => StoryAction::None,
        }
    }

    /// Handle a mouse wheel tick over the narrative pane
    pub fn handle_scroll(&mut self, down: bool) -> StoryAction {
        let moved = if down { self.move_down() } else { self.move_up() };
        if moved {
            self.entered()
        } else {
            StoryAction::None
        }
    }
}
