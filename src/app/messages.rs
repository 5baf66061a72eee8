//! AppMessage enum for async communication with the UI loop.

use crate::models::BookDetailState;

/// Messages delivered to the UI loop from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The view-model published a new snapshot
    StateChanged(BookDetailState),
    /// The navigation host handled a back request
    NavigatedBack,
}
