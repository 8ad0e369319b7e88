//! Key event builders for driving `App` in tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use enroll::App;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code));
}

pub fn press_ctrl(app: &mut App, c: char) {
    app.handle_key_event(ctrl(c));
}

/// Press a key `n` times
pub fn repeat(app: &mut App, code: KeyCode, n: usize) {
    for _ in 0..n {
        press(app, code);
    }
}

/// Type text as individual unmodified key presses
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}
