use super::Book;

/// Snapshot published by a view-model for the detail screen.
///
/// Owned and replaced by the view-model; the screen only reads the latest one.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailState {
    pub book: Option<Book>,
    pub is_favorite: bool,
    pub is_loading: bool,
}

impl Default for BookDetailState {
    fn default() -> Self {
        Self {
            book: None,
            is_favorite: false,
            is_loading: true,
        }
    }
}

impl BookDetailState {
    /// Snapshot for a fully loaded book.
    pub fn loaded(book: Book) -> Self {
        Self {
            book: Some(book),
            is_favorite: false,
            is_loading: false,
        }
    }
}
