//! View state for the book detail screen.
//!
//! Rendering is split in two steps so the display rules can be tested
//! without a terminal:
//!
//! ```text
//! BookDetailState ──from_state()──▶ BookDetailView ──ui::render()──▶ Frame
//!   (view-model)                     (pure, PartialEq)                (ratatui)
//! ```
//!
//! Everything that decides *what* is shown (which chips exist, how the
//! rating is rounded, whether the synopsis is a placeholder) lives here.
//! The `ui` module only decides *where* it goes.

mod book_detail_view;
mod format;

pub use book_detail_view::{
    Background, BookDetailView, DetailBody, LanguageSection, StatChip, Synopsis, STAR_GLYPH,
};
pub use format::{format_page_count, format_rating, is_blank, join_authors};
