//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::state::{App, Focus, View};
use crate::keys;
use crate::ui::widgets::max_help_scroll;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    /// Handle mouse events: hover drives the chart tooltip, the wheel
    /// scrolls whichever pane sits under the pointer
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.current_view != View::Story {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.pointer = Some((mouse.column, mouse.row));
                if self.panes.get().chart.contains(position) {
                    self.chart.hover_at(mouse.column, mouse.row);
                } else {
                    self.chart.clear_hover();
                }
            }
            MouseEventKind::ScrollDown => self.route_scroll(position, true),
            MouseEventKind::ScrollUp => self.route_scroll(position, false),
            _ => {}
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.current_view = View::Help;
                self.help_scroll = 0;
                true
            }
            keys::TAB if self.current_view == View::Story => {
                self.toggle_focus();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Story {
            self.quit();
        } else {
            self.current_view = View::Story;
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Story {
            self.current_view = View::Story;
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Story => match self.focus {
                Focus::Narrative => {
                    let action = self.narrative.handle_key(key);
                    self.handle_story_action(action);
                }
                Focus::Files => {
                    self.files.handle_key(key);
                }
            },
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max = max_help_scroll(self.last_frame_height.get());
        let code = key.code;
        if keys::is_move_down(code) {
            self.help_scroll = (self.help_scroll + 1).min(max);
        } else if keys::is_move_up(code) {
            self.help_scroll = self.help_scroll.saturating_sub(1);
        } else if code == keys::GO_TOP {
            self.help_scroll = 0;
        } else if code == keys::GO_BOTTOM {
            self.help_scroll = max;
        }
    }

    fn route_scroll(&mut self, position: Position, down: bool) {
        let panes = self.panes.get();
        if panes.files.contains(position) {
            self.files.handle_scroll(down);
        } else if panes.narrative.contains(position) {
            let action = self.narrative.handle_scroll(down);
            self.handle_story_action(action);
        }
    }
}
