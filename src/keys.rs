//! Keybinding definitions for Gitale
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::KeyCode;
use ratatui::style::Color;

use crate::app::{Focus, View};

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch focus between the narrative and the file breakdown
pub const TAB: KeyCode = KeyCode::Tab;

/// Back / dismiss
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Half page down
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char('d');

/// Half page up
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('u');

/// Page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Story keys
// =============================================================================

/// Re-enter the selected step (re-reports its timestamp)
pub const ENTER_STEP: KeyCode = KeyCode::Enter;

/// Drop the story position and show the whole history
pub const SHOW_ALL: KeyCode = KeyCode::Char('a');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch focus (story / files)",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "d/u",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "PgDn/PgUp",
        description: "Page down/up",
    },
];

/// Story key bindings for help display
pub const STORY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Next/previous step (filters chart and files)",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Re-enter selected step",
    },
    KeyBindEntry {
        key: "a",
        description: "Show all commits (drop the filter)",
    },
    KeyBindEntry {
        key: "Wheel",
        description: "Scroll through steps",
    },
];

/// File breakdown key bindings for help display
pub const FILES_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Chart key bindings for help display
pub const CHART_KEYS: &[KeyBindEntry] = &[KeyBindEntry {
    key: "Mouse",
    description: "Hover a dot for commit details",
}];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_STEP: KeyHint = KeyHint {
    key: "j/k",
    label: "Step",
    color: Color::Blue,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Blue,
};
pub const HINT_ENDS: KeyHint = KeyHint {
    key: "g/G",
    label: "First/Last",
    color: Color::Magenta,
};
pub const HINT_ALL: KeyHint = KeyHint {
    key: "a",
    label: "All",
    color: Color::Green,
};
pub const HINT_FOCUS: KeyHint = KeyHint {
    key: "Tab",
    label: "Focus",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};

/// Get the appropriate hints for the current view and focus
pub fn current_hints(view: View, focus: Focus) -> Vec<KeyHint> {
    match view {
        View::Story => match focus {
            Focus::Narrative => vec![HINT_HELP, HINT_STEP, HINT_ENDS, HINT_ALL, HINT_FOCUS, HINT_QUIT],
            Focus::Files => vec![HINT_HELP, HINT_SCROLL, HINT_ENDS, HINT_ALL, HINT_FOCUS, HINT_QUIT],
        },
        View::Help => vec![HINT_SCROLL, HINT_BACK],
    }
}
