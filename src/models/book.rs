use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookpediaError, BookpediaResult};

/// A single catalog item.
///
/// Books are never mutated after construction; a view-model that needs a
/// different value (e.g. once a description has been fetched) replaces the
/// whole record. Equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    /// Author names in credit order
    #[serde(default)]
    pub author: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Language codes as published (e.g. "eng", "fre")
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<String>,
    /// Conventionally 0.0..=5.0
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<i32>,
    #[serde(default)]
    pub num_pages: Option<i32>,
    #[serde(default)]
    pub num_editions: i32,
}

impl Book {
    /// Parse a book from its JSON representation.
    pub fn from_json(json: &str) -> BookpediaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a book from a JSON file.
    pub fn load(path: &Path) -> BookpediaResult<Self> {
        if !path.exists() {
            return Err(BookpediaError::BookNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        let book = Self::from_json(&json)?;
        tracing::debug!("Loaded book {} from {}", book.id, path.display());
        Ok(book)
    }

    /// Return a copy of this record carrying a different description.
    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    /// Built-in record shown when no book file is supplied.
    pub fn sample() -> Self {
        Self {
            id: "OL893415W".to_string(),
            title: "Dune".to_string(),
            image_url: "https://covers.openlibrary.org/b/olid/OL26242482M-L.jpg".to_string(),
            author: vec!["Frank Herbert".to_string()],
            description: None,
            languages: vec!["eng".to_string(), "spa".to_string(), "fre".to_string()],
            first_publish_year: Some("1965".to_string()),
            average_rating: Some(4.27),
            rating_count: Some(1893),
            num_pages: Some(604),
            num_editions: 118,
        }
    }
}
