//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(37, 99, 235);
pub const ACCENT_SUCCESS: Color = Color::Rgb(34, 197, 94);
pub const ACCENT_ERROR: Color = Color::Rgb(239, 68, 68);
pub const ACCENT_WARNING: Color = Color::Rgb(234, 179, 8);

pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(190, 190, 190);
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 140);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 90);

pub const BORDER_DEFAULT: Color = Color::Rgb(75, 85, 99);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const TRACK_BG: Color = Color::Rgb(55, 65, 81);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
