//! Keybinding configuration types and parsing
//!
//! This module provides types for representing keyboard shortcuts and
//! parsing vim-style key notation (e.g., "C-x", "M-S-w", "<CR>").

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// This normalizes the key event to match the canonical form used by config parsing:
    /// - Uppercase characters are converted to lowercase + SHIFT modifier
    /// - BackTab drops the SHIFT that terminals report alongside it
    pub fn from_key_event(event: &crossterm::event::KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code: KeyCode::BackTab,
                modifiers: event.modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<BackTab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            _ => format!("{:?}", self.code),
        };

        if parts.is_empty() {
            write!(f, "{}", key_str)
        } else {
            parts.push(&key_str);
            write!(f, "{}", parts.join("-"))
        }
    }
}

/// Context for keybindings (logical grouping of input modes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Keys that work everywhere unless a context overrides them
    Global,
    /// Editing the identity & address step
    Form,
    /// File path prompt for an upload slot
    FilePicker,
}

impl KeyContext {
    /// Map the app's input mode to a binding context.
    ///
    /// Placeholder steps have nothing to edit, so only global bindings apply.
    pub fn from_input_mode(mode: InputMode, editing_form: bool) -> Self {
        match mode {
            InputMode::PickingFile(_) => KeyContext::FilePicker,
            InputMode::Normal if editing_form => KeyContext::Form,
            InputMode::Normal => KeyContext::Global,
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context
    /// First checks context-specific bindings, then falls back to global
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<&Action> {
        if let Some(action) = self.context.get(&context).and_then(|b| b.get(key)) {
            return Some(action);
        }
        self.global.get(key)
    }

    /// First key that triggers `action` in `context`, for hint bars.
    ///
    /// Global keys shadowed by a context binding are never suggested.
    pub fn key_for(&self, action: &Action, context: KeyContext) -> Option<KeyCombo> {
        let mut keys: Vec<&KeyCombo> = self
            .context
            .get(&context)
            .into_iter()
            .flatten()
            .chain(self.global.iter())
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| k)
            .filter(|k| self.get_action(k, context) == Some(action))
            .collect();
        // HashMap order is unstable; pick deterministically
        keys.sort_by_key(|k| k.to_string());
        keys.first().map(|k| (*k).clone())
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        for (key, action) in other.global {
            self.global.insert(key, action);
        }

        for (ctx, bindings) in other.context {
            let entry = self.context.entry(ctx).or_default();
            for (key, action) in bindings {
                entry.insert(key, action);
            }
        }
    }
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x` for Ctrl+x
/// - `M-x` for Alt+x (Meta)
/// - `S-x` for Shift+x
/// - `C-S-x` for Ctrl+Shift+x
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BackTab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<PageUp>`, `<PageDown>`, `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(s);
    }

    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        match *part {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" => modifiers |= KeyModifiers::ALT,
            // S is Shift only when something follows it; otherwise it's the key
            "S" if i < parts.len() - 1 => modifiers |= KeyModifiers::SHIFT,
            _ => key_part = Some(*part),
        }
    }

    let key_str = key_part.ok_or(KeyParseError::NoKey)?;
    let (code, needs_shift) = parse_key_code(key_str)?;

    // Uppercase letters are lowercase + SHIFT ("G" -> S-g)
    if needs_shift {
        modifiers |= KeyModifiers::SHIFT;
    }

    // S-<Tab> is BackTab, same as <S-Tab>
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(KeyCombo::new(
            KeyCode::BackTab,
            modifiers.difference(KeyModifiers::SHIFT),
        ));
    }

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a special key notation like <CR>, <Esc>, <C-CR>
fn parse_special_key(s: &str) -> Result<KeyCombo, KeyParseError> {
    let inner = &s[1..s.len() - 1];
    let parts: Vec<&str> = inner.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_name = inner;

    if parts.len() > 1 {
        for part in &parts[..parts.len() - 1] {
            match *part {
                "C" => modifiers |= KeyModifiers::CONTROL,
                "M" => modifiers |= KeyModifiers::ALT,
                "S" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::InvalidModifier(part.to_string())),
            }
        }
        key_name = parts[parts.len() - 1];
    }

    let code = match key_name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        s if s.starts_with('F') && s.len() > 1 => {
            let num: u8 = s[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidKey(s.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidKey(s.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(key_name.to_string())),
    };

    // <S-Tab> is how most people write BackTab
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(KeyCombo::new(
            KeyCode::BackTab,
            modifiers.difference(KeyModifiers::SHIFT),
        ));
    }

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a single key code (not a special key)
/// Returns the KeyCode and whether SHIFT should be added (for uppercase chars)
fn parse_key_code(s: &str) -> Result<(KeyCode, bool), KeyParseError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok((KeyCode::Char(c.to_ascii_lowercase()), c.is_ascii_uppercase()));
    }
    if s.starts_with('<') && s.ends_with('>') {
        let key = parse_special_key(s)?;
        return Ok((key.code, false));
    }
    match s.to_uppercase().as_str() {
        "SPACE" => Ok((KeyCode::Char(' '), false)),
        "TAB" => Ok((KeyCode::Tab, false)),
        "ENTER" | "CR" | "RETURN" => Ok((KeyCode::Enter, false)),
        "ESC" | "ESCAPE" => Ok((KeyCode::Esc, false)),
        "BS" | "BACKSPACE" => Ok((KeyCode::Backspace, false)),
        _ => Err(KeyParseError::InvalidKey(s.to_string())),
    }
}

/// Error type for key parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UploadSlot;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_parse_modifier_keys() {
        let key = parse_key_notation("C-x").unwrap();
        assert_eq!(key.code, KeyCode::Char('x'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);

        let key = parse_key_notation("M-S-w").unwrap();
        assert_eq!(key.code, KeyCode::Char('w'));
        assert_eq!(key.modifiers, KeyModifiers::ALT | KeyModifiers::SHIFT);

        let key = parse_key_notation("S").unwrap();
        assert_eq!(key.code, KeyCode::Char('s'));
        assert_eq!(key.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_notation("<CR>").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_notation("<Esc>").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_notation("<PageDown>").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_notation("<F12>").unwrap().code, KeyCode::F(12));
        assert_eq!(
            parse_key_notation("<Space>").unwrap().code,
            KeyCode::Char(' ')
        );
        assert!(parse_key_notation("<F13>").is_err());
        assert!(parse_key_notation("<X-CR>").is_err());
        assert_eq!(parse_key_notation(""), Err(KeyParseError::Empty));
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let a = parse_key_notation("<S-Tab>").unwrap();
        let b = parse_key_notation("<BackTab>").unwrap();
        assert_eq!(a, b);
        assert_eq!(parse_key_notation("S-<Tab>").unwrap(), b);

        let combo = KeyCombo::from_key_event(&key_event(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(combo, b);
    }

    #[test]
    fn test_uppercase_normalization() {
        let combo = KeyCombo::from_key_event(&key_event(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(combo, parse_key_notation("G").unwrap());
        assert_ne!(combo, parse_key_notation("g").unwrap());
    }

    #[test]
    fn test_display_round_trips_common_keys() {
        for notation in ["C-q", "C-n", "<CR>", "<Tab>", "<BackTab>", "M-S-j", "<PageUp>"] {
            let combo = parse_key_notation(notation).unwrap();
            assert_eq!(combo.to_string(), notation);
        }
    }

    #[test]
    fn test_context_lookup_falls_back_to_global() {
        let mut config = KeybindingConfig::new();
        let enter = parse_key_notation("<CR>").unwrap();
        config.global.insert(enter.clone(), Action::NextStep);
        config
            .context
            .entry(KeyContext::Form)
            .or_default()
            .insert(enter.clone(), Action::Activate);

        assert_eq!(
            config.get_action(&enter, KeyContext::Form),
            Some(&Action::Activate)
        );
        assert_eq!(
            config.get_action(&enter, KeyContext::Global),
            Some(&Action::NextStep)
        );
        // <CR> is shadowed in the form, so it is not offered as a hint there
        assert_eq!(config.key_for(&Action::NextStep, KeyContext::Form), None);
        assert_eq!(
            config.key_for(&Action::NextStep, KeyContext::Global),
            Some(enter.clone())
        );
        assert_eq!(
            config.key_for(&Action::Activate, KeyContext::Form),
            Some(enter)
        );
    }

    #[test]
    fn test_context_from_input_mode() {
        assert_eq!(
            KeyContext::from_input_mode(InputMode::Normal, true),
            KeyContext::Form
        );
        assert_eq!(
            KeyContext::from_input_mode(InputMode::Normal, false),
            KeyContext::Global
        );
        assert_eq!(
            KeyContext::from_input_mode(InputMode::PickingFile(UploadSlot::CnicFront), true),
            KeyContext::FilePicker
        );
    }
}
