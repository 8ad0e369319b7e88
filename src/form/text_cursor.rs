//! Cursor editing over text owned elsewhere
//!
//! The step form never keeps its own copy of a shared field. It keeps only a
//! cursor, and each edit takes the stored value and returns the edited value
//! for the caller to write back through the form store.

/// Cursor position (in chars) into an externally owned string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    pos: usize,
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl TextCursor {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    /// Cursor at the end of `text`
    pub fn at_end(text: &str) -> Self {
        Self {
            pos: text.chars().count(),
        }
    }

    /// Position clamped to the current text
    pub fn position(&self, text: &str) -> usize {
        self.pos.min(text.chars().count())
    }

    fn clamp(&mut self, text: &str) {
        self.pos = self.position(text);
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, text: &str, c: char) -> String {
        self.clamp(text);
        let mut out = text.to_string();
        out.insert(byte_index(text, self.pos), c);
        self.pos += 1;
        out
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char(&mut self, text: &str) -> String {
        self.clamp(text);
        if self.pos == 0 {
            return text.to_string();
        }
        self.pos -= 1;
        let mut out = text.to_string();
        out.remove(byte_index(text, self.pos));
        out
    }

    /// Delete the character at the cursor
    pub fn delete_forward(&mut self, text: &str) -> String {
        self.clamp(text);
        let mut out = text.to_string();
        if self.pos < text.chars().count() {
            out.remove(byte_index(text, self.pos));
        }
        out
    }

    /// Delete from the cursor back to the start of the line (Ctrl+U)
    pub fn delete_to_start(&mut self, text: &str) -> String {
        self.clamp(text);
        let out = text[byte_index(text, self.pos)..].to_string();
        self.pos = 0;
        out
    }

    /// Delete the word before the cursor (Ctrl+W)
    pub fn delete_word(&mut self, text: &str) -> String {
        self.clamp(text);
        let chars: Vec<char> = text.chars().collect();
        let end = self.pos;
        let mut start = end;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        self.pos = start;
        chars[..start].iter().chain(chars[end..].iter()).collect()
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        if self.pos < text.chars().count() {
            self.pos += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.pos = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.pos = text.chars().count();
    }
}
