//! Keyboard and mouse handling for FilesView

use crossterm::event::KeyEvent;

use crate::keys;

use super::FilesView;

impl FilesView {
    /// Handle a key while the files pane holds focus. Returns true when
    /// the key was consumed.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        let code = key.code;
        if keys::is_move_down(code) {
            self.scroll_down(1);
            true
        } else if keys::is_move_up(code) {
            self.scroll_up(1);
            true
        } else if code == keys::GO_TOP {
            self.scroll.set(0);
            true
        } else if code == keys::GO_BOTTOM {
            self.scroll.set(self.max_scroll.get());
            true
        } else if code == keys::HALF_PAGE_DOWN {
            self.scroll_down(self.half_page());
            true
        } else if code == keys::HALF_PAGE_UP {
            self.scroll_up(self.half_page());
            true
        } else if code == keys::PAGE_DOWN {
            self.scroll_down(self.page_size.get().max(1));
            true
        } else if code == keys::PAGE_UP {
            self.scroll_up(self.page_size.get().max(1));
            true
        } else {
            false
        }
    }

    /// Mouse wheel over the files pane
    pub fn handle_scroll(&self, down: bool) {
        if down {
            self.scroll_down(1);
        } else {
            self.scroll_up(1);
        }
    }

    fn scroll_down(&self, lines: usize) {
        let next = (self.scroll.get() + lines).min(self.max_scroll.get());
        self.scroll.set(next);
    }

    fn scroll_up(&self, lines: usize) {
        self.scroll.set(self.scroll.get().saturating_sub(lines));
    }

    fn half_page(&self) -> usize {
        (self.page_size.get() / 2).max(1)
    }
}
