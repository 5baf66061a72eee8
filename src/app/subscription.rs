//! Subscribe-with-teardown for view-model state.
//!
//! A [`StateSubscription`] lives exactly as long as the screen that owns it.
//! It delivers the current snapshot immediately, then every later one, and
//! stops delivering when dropped.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::messages::AppMessage;
use crate::models::BookDetailState;

pub struct StateSubscription {
    handle: JoinHandle<()>,
}

impl StateSubscription {
    /// Call `on_emit` with the current snapshot and every later one.
    ///
    /// Delivery stops when `on_emit` returns `false`, when the view-model
    /// is dropped, or when the subscription is dropped.
    pub fn subscribe<F>(mut rx: watch::Receiver<BookDetailState>, mut on_emit: F) -> Self
    where
        F: FnMut(BookDetailState) -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                if !on_emit(snapshot) {
                    break;
                }
                if rx.changed().await.is_err() {
                    tracing::debug!("View-model dropped; ending state subscription");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Forward snapshots onto the UI loop's message channel.
    pub fn forward_to(
        rx: watch::Receiver<BookDetailState>,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self::subscribe(rx, move |snapshot| {
            tx.send(AppMessage::StateChanged(snapshot)).is_ok()
        })
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for StateSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    #[tokio::test]
    async fn test_delivers_current_then_updates() {
        let (state_tx, state_rx) = watch::channel(BookDetailState::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _subscription = StateSubscription::forward_to(state_rx, tx);

        let Some(AppMessage::StateChanged(first)) = rx.recv().await else {
            panic!("expected initial snapshot");
        };
        assert!(first.book.is_none());

        state_tx.send_replace(BookDetailState::loaded(Book::sample()));

        let Some(AppMessage::StateChanged(second)) = rx.recv().await else {
            panic!("expected updated snapshot");
        };
        assert_eq!(second.book, Some(Book::sample()));
    }

    #[tokio::test]
    async fn test_drop_releases_subscription() {
        let (state_tx, state_rx) = watch::channel(BookDetailState::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = StateSubscription::forward_to(state_rx, tx);
        assert!(rx.recv().await.is_some());

        drop(subscription);
        tokio::task::yield_now().await;
        state_tx.send_replace(BookDetailState::loaded(Book::sample()));

        // The task held the only sender; once aborted the channel closes.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_ends_when_view_model_dropped() {
        let (state_tx, state_rx) = watch::channel(BookDetailState::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = StateSubscription::forward_to(state_rx, tx);
        assert!(rx.recv().await.is_some());

        drop(state_tx);

        assert!(rx.recv().await.is_none());
        drop(subscription);
    }
}
