//! TUI testing utilities using Ratatui's TestBackend
//!
//! Provides helpers for rendering the app to a test buffer and converting
//! the output to strings for assertions.

use enroll::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Render the app once on a wide terminal and return the screen text
pub fn render_app(app: &App) -> String {
    render_app_sized(app, 120, 30)
}

pub fn render_app_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Check if the rendered screen contains a string anywhere
pub fn screen_contains(app: &App, text: &str) -> bool {
    render_app(app).contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_buffer_to_string() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Hello");
                f.render_widget(para, f.area());
            })
            .unwrap();

        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.starts_with("Hello"));
        assert_eq!(output.lines().count(), 3);
    }
}
