//! View-model contract and an in-memory implementation.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::actions::BookDetailAction;
use super::description::DescriptionSource;
use crate::models::{Book, BookDetailState};
use crate::view_state::is_blank;

/// Owner of the detail screen's state.
///
/// The screen observes [`state`](Self::state) and sends every user intent to
/// [`on_action`](Self::on_action). It never mutates state itself.
pub trait BookDetailViewModel: Send + Sync {
    fn state(&self) -> watch::Receiver<BookDetailState>;

    fn on_action(&self, action: BookDetailAction);
}

/// View-model holding state in memory.
///
/// Selecting a book starts a description fetch; favorites are toggled in
/// memory only. Must be used from within a tokio runtime so fetches can be
/// spawned.
pub struct InMemoryBookDetailViewModel {
    state_tx: Arc<watch::Sender<BookDetailState>>,
    descriptions: Arc<dyn DescriptionSource>,
    fetch: Mutex<Option<JoinHandle<()>>>,
}

impl InMemoryBookDetailViewModel {
    pub fn new(descriptions: Arc<dyn DescriptionSource>) -> Self {
        let (state_tx, _) = watch::channel(BookDetailState::default());
        Self {
            state_tx: Arc::new(state_tx),
            descriptions,
            fetch: Mutex::new(None),
        }
    }

    /// Create a view-model with `book` already selected.
    pub fn with_book(book: Book, descriptions: Arc<dyn DescriptionSource>) -> Self {
        let view_model = Self::new(descriptions);
        view_model.on_action(BookDetailAction::OnSelectedBookChange(book));
        view_model
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> BookDetailState {
        self.state_tx.borrow().clone()
    }

    fn select_book(&self, book: Book) {
        tracing::info!("Selected book {} ({})", book.id, book.title);
        let book_id = book.id.clone();
        // The favorite flag describes the selected book, not the screen
        self.state_tx.send_modify(|state| {
            state.book = Some(book);
            state.is_favorite = false;
            state.is_loading = true;
        });

        let mut fetch = match self.fetch.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = fetch.take() {
            previous.abort();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime; skipping description fetch for {}", book_id);
            self.state_tx.send_modify(|state| state.is_loading = false);
            return;
        };

        let state_tx = Arc::clone(&self.state_tx);
        let descriptions = Arc::clone(&self.descriptions);
        *fetch = Some(runtime.spawn(async move {
            let fetched = match descriptions.fetch_description(&book_id).await {
                Ok(description) => description,
                Err(e) => {
                    tracing::warn!("Description fetch for {} failed: {}", book_id, e);
                    None
                }
            };
            finish_fetch(&state_tx, &book_id, fetched);
        }));
    }

    fn toggle_favorite(&self) {
        self.state_tx.send_modify(|state| {
            state.is_favorite = !state.is_favorite;
            tracing::info!("Favorite toggled: {}", state.is_favorite);
        });
    }
}

/// Apply a finished description fetch, unless another book was selected
/// in the meantime.
fn finish_fetch(
    state_tx: &watch::Sender<BookDetailState>,
    book_id: &str,
    fetched: Option<String>,
) {
    state_tx.send_if_modified(|state| {
        let Some(book) = state.book.as_ref().filter(|book| book.id == book_id) else {
            return false;
        };
        if !is_blank(fetched.as_deref()) {
            state.book = Some(book.with_description(fetched));
        }
        state.is_loading = false;
        tracing::debug!("Description loaded for {}", book_id);
        true
    });
}

impl BookDetailViewModel for InMemoryBookDetailViewModel {
    fn state(&self) -> watch::Receiver<BookDetailState> {
        self.state_tx.subscribe()
    }

    fn on_action(&self, action: BookDetailAction) {
        tracing::debug!("Action: {:?}", action);
        match action {
            BookDetailAction::OnSelectedBookChange(book) => self.select_book(book),
            BookDetailAction::OnFavoriteClick => self.toggle_favorite(),
            // Navigation is handled by the screen
            BookDetailAction::OnBackClick => {}
        }
    }
}

impl Drop for InMemoryBookDetailViewModel {
    fn drop(&mut self) {
        if let Ok(mut fetch) = self.fetch.lock() {
            if let Some(handle) = fetch.take() {
                handle.abort();
            }
        }
    }
}
