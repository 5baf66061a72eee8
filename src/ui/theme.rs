//! Color theme constants for the detail screen.

use ratatui::style::Color;

/// Outer frame border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and other emphasized text
pub const COLOR_ACCENT: Color = Color::White;

/// Low-emphasis text (placeholders, captions)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Section labels above chips
pub const COLOR_LABEL: Color = Color::Gray;

/// Band behind the header buttons, standing in for the cover art
pub const COLOR_COVER_BG: Color = Color::Rgb(24, 28, 40);

pub const COLOR_CHIP_BG: Color = Color::Rgb(40, 44, 52);

pub const COLOR_CHIP_TEXT: Color = Color::White;

/// Rating star - sand yellow
pub const COLOR_STAR: Color = Color::Rgb(250, 225, 138);

/// Filled heart when the book is a favorite
pub const COLOR_FAVORITE: Color = Color::Rgb(230, 80, 90);

pub const COLOR_SPINNER: Color = Color::Yellow;
