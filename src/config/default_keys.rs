//! Default keybindings
//!
//! This module defines the default keybindings that are used
//! when no user configuration is present.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========

    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-n", Action::NextStep);
    bind(&mut config.global, "<PageDown>", Action::NextStep);
    bind(&mut config.global, "<CR>", Action::NextStep);
    bind(&mut config.global, "C-p", Action::PrevStep);
    bind(&mut config.global, "<PageUp>", Action::PrevStep);
    bind(&mut config.global, "C-s", Action::Skip);

    // Readline shortcuts (apply to whichever text field has focus)
    bind(&mut config.global, "<BS>", Action::Backspace);
    bind(&mut config.global, "C-h", Action::Backspace);
    bind(&mut config.global, "<Del>", Action::Delete);
    bind(&mut config.global, "C-d", Action::Delete);
    bind(&mut config.global, "C-w", Action::DeleteWordBack);
    bind(&mut config.global, "M-<BS>", Action::DeleteWordBack);
    bind(&mut config.global, "C-u", Action::DeleteToStart);
    bind(&mut config.global, "C-a", Action::MoveCursorStart);
    bind(&mut config.global, "<Home>", Action::MoveCursorStart);
    bind(&mut config.global, "C-e", Action::MoveCursorEnd);
    bind(&mut config.global, "<End>", Action::MoveCursorEnd);
    bind(&mut config.global, "<Left>", Action::Left);
    bind(&mut config.global, "C-b", Action::Left);
    bind(&mut config.global, "<Right>", Action::Right);
    bind(&mut config.global, "C-f", Action::Right);

    // ========== Form ==========

    let form = config.context.entry(KeyContext::Form).or_default();
    bind(form, "<Tab>", Action::FocusNext);
    bind(form, "<Down>", Action::FocusNext);
    bind(form, "<BackTab>", Action::FocusPrev);
    bind(form, "<Up>", Action::FocusPrev);
    bind(form, "<CR>", Action::Activate);

    // ========== File Picker ==========

    let picker = config.context.entry(KeyContext::FilePicker).or_default();
    bind(picker, "<CR>", Action::Confirm);
    bind(picker, "<Esc>", Action::Cancel);

    config
}
