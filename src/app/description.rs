//! Sources for a book's long description.
//!
//! Catalog search results usually omit descriptions, so the view-model
//! fetches one separately after a book is selected.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::BookpediaResult;

#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Fetch the description for `book_id`; `Ok(None)` when there is none.
    async fn fetch_description(&self, book_id: &str) -> BookpediaResult<Option<String>>;
}

/// Source that never has a description.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDescriptionSource;

#[async_trait]
impl DescriptionSource for NoDescriptionSource {
    async fn fetch_description(&self, _book_id: &str) -> BookpediaResult<Option<String>> {
        Ok(None)
    }
}

/// In-memory descriptions keyed by book id, with an optional delay to
/// simulate a slow backend.
#[derive(Debug, Default, Clone)]
pub struct StaticDescriptionSource {
    descriptions: HashMap<String, String>,
    delay: Duration,
}

impl StaticDescriptionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, book_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.descriptions.insert(book_id.into(), text.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl DescriptionSource for StaticDescriptionSource {
    async fn fetch_description(&self, book_id: &str) -> BookpediaResult<Option<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.descriptions.get(book_id).cloned())
    }
}
