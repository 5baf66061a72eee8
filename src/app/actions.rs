//! User intents emitted by the detail screen.

use crate::models::Book;

/// Actions the detail screen sends to its view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum BookDetailAction {
    /// Back button or back key
    OnBackClick,
    /// Favorite toggle
    OnFavoriteClick,
    /// A different book was selected upstream
    OnSelectedBookChange(Book),
}

/// Wrap a dispatch function so back navigation runs before the view-model
/// sees `OnBackClick`.
///
/// Every action, including `OnBackClick`, is still forwarded to `dispatch`.
pub fn intercept_back<B, D>(mut on_back: B, mut dispatch: D) -> impl FnMut(BookDetailAction)
where
    B: FnMut(),
    D: FnMut(BookDetailAction),
{
    move |action| {
        if action == BookDetailAction::OnBackClick {
            on_back();
        }
        dispatch(action);
    }
}
