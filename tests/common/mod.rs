//! Shared fixtures for integration tests.
//!
//! Rendering goes through ratatui's `TestBackend` so assertions run against
//! the exact cell buffer a terminal would show.

#![allow(dead_code)]

use bookpedia::i18n::Strings;
use bookpedia::models::{Book, BookDetailState};
use bookpedia::ui::{self, UiContext};
use bookpedia::view_state::BookDetailView;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// A bare "Dune" record: one author, no optional fields.
pub fn dune() -> Book {
    Book {
        id: "OL893415W".to_string(),
        title: "Dune".to_string(),
        image_url: String::new(),
        author: vec!["Frank Herbert".to_string()],
        description: None,
        languages: Vec::new(),
        first_publish_year: None,
        average_rating: None,
        rating_count: None,
        num_pages: None,
        num_editions: 0,
    }
}

pub fn loaded(book: Book) -> BookDetailState {
    BookDetailState::loaded(book)
}

pub fn loading(book: Book) -> BookDetailState {
    BookDetailState {
        book: Some(book),
        is_favorite: false,
        is_loading: true,
    }
}

/// Render `state` with English strings into a fresh buffer.
pub fn render_state(state: &BookDetailState, width: u16, height: u16) -> (Buffer, UiContext) {
    render_with(state, &Strings::english(), width, height)
}

pub fn render_with(
    state: &BookDetailState,
    strings: &Strings,
    width: u16,
    height: u16,
) -> (Buffer, UiContext) {
    let view = BookDetailView::from_state(state, strings);
    let mut ctx = UiContext::new();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| ui::render(f, &view, &mut ctx))
        .unwrap();
    (terminal.backend().buffer().clone(), ctx)
}

/// Buffer rows as plain strings, one char per cell.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}

/// Cell position of the first occurrence of `needle`.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    buffer_lines(buffer).iter().enumerate().find_map(|(y, row)| {
        row.find(needle)
            .map(|byte| (row[..byte].chars().count() as u16, y as u16))
    })
}
