//! Loading spinner.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_SPINNER};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// A centered spinner followed by `label`.
pub fn render_spinner_line(frame: usize, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            get_spinner_char(frame).to_string(),
            Style::default()
                .fg(COLOR_SPINNER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)),
    ])
    .centered()
}
