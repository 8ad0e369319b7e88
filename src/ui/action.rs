//! Actions that can be triggered by keybindings
//!
//! This module defines all the actions that can be bound to keys.
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Continue to the next step, or submit on the last one
    NextStep,
    /// Go back one step
    PrevStep,
    /// Skip registration (one-shot)
    Skip,

    // ========== Form Navigation ==========
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,
    /// Activate the focused element (cycle selector, open file picker)
    Activate,
    /// Cursor left, or previous option on a selector
    Left,
    /// Cursor right, or next option on a selector
    Right,

    // ========== Text Editing ==========
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Delete word before cursor
    DeleteWordBack,
    /// Delete from cursor to start of line
    DeleteToStart,
    /// Move cursor to start of line
    MoveCursorStart,
    /// Move cursor to end of line
    MoveCursorEnd,

    // ========== File Picker ==========
    /// Attach the file at the entered path
    Confirm,
    /// Close the picker without choosing a file
    Cancel,
}

impl Action {
    /// Short description for hint bars
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::NextStep => "continue",
            Action::PrevStep => "back",
            Action::Skip => "skip",
            Action::FocusNext => "next field",
            Action::FocusPrev => "prev field",
            Action::Activate => "select",
            Action::Left => "left",
            Action::Right => "right",
            Action::Backspace => "backspace",
            Action::Delete => "delete",
            Action::DeleteWordBack => "delete word",
            Action::DeleteToStart => "delete to start",
            Action::MoveCursorStart => "line start",
            Action::MoveCursorEnd => "line end",
            Action::Confirm => "attach",
            Action::Cancel => "cancel",
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "next_step" | "continue" => Some(Action::NextStep),
        "prev_step" | "back" => Some(Action::PrevStep),
        "skip" => Some(Action::Skip),
        "focus_next" => Some(Action::FocusNext),
        "focus_prev" => Some(Action::FocusPrev),
        "activate" => Some(Action::Activate),
        "left" => Some(Action::Left),
        "right" => Some(Action::Right),
        "backspace" => Some(Action::Backspace),
        "delete" => Some(Action::Delete),
        "delete_word_back" => Some(Action::DeleteWordBack),
        "delete_to_start" => Some(Action::DeleteToStart),
        "move_cursor_start" => Some(Action::MoveCursorStart),
        "move_cursor_end" => Some(Action::MoveCursorEnd),
        "confirm" => Some(Action::Confirm),
        "cancel" => Some(Action::Cancel),
        _ => None,
    }
}
