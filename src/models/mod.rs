//! Data models for the book detail screen.
//!
//! - [`Book`] - immutable catalog record
//! - [`BookDetailState`] - the snapshot a view-model publishes to the screen

mod book;
mod detail_state;

pub use book::Book;
pub use detail_state::BookDetailState;
