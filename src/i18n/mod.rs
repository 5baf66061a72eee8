//! Localized display strings.
//!
//! The detail screen never hardcodes user-facing text; it asks a [`Strings`]
//! table for the text behind a [`StringKey`]. English is built in. A JSON
//! object keyed by snake_case names overrides any subset of keys:
//!
//! ```json
//! { "synopsis": "Résumé", "description_unavailable": "Description indisponible" }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::error::BookpediaResult;

/// Keys for every piece of fixed text on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    Rating,
    Pages,
    Languages,
    Synopsis,
    DescriptionUnavailable,
    Back,
    Favorite,
    Unfavorite,
    Loading,
}

impl StringKey {
    pub const ALL: [StringKey; 9] = [
        StringKey::Rating,
        StringKey::Pages,
        StringKey::Languages,
        StringKey::Synopsis,
        StringKey::DescriptionUnavailable,
        StringKey::Back,
        StringKey::Favorite,
        StringKey::Unfavorite,
        StringKey::Loading,
    ];

    /// Resource name used in string table files.
    pub fn name(self) -> &'static str {
        match self {
            StringKey::Rating => "rating",
            StringKey::Pages => "pages",
            StringKey::Languages => "languages",
            StringKey::Synopsis => "synopsis",
            StringKey::DescriptionUnavailable => "description_unavailable",
            StringKey::Back => "back",
            StringKey::Favorite => "favorite",
            StringKey::Unfavorite => "unfavorite",
            StringKey::Loading => "loading",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    fn english(self) -> &'static str {
        match self {
            StringKey::Rating => "Rating",
            StringKey::Pages => "Pages",
            StringKey::Languages => "Languages",
            StringKey::Synopsis => "Synopsis",
            StringKey::DescriptionUnavailable => "Description unavailable",
            StringKey::Back => "Back",
            StringKey::Favorite => "Favorite",
            StringKey::Unfavorite => "Favorited",
            StringKey::Loading => "Loading...",
        }
    }
}

/// A resolved string table for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Strings {
    overrides: HashMap<StringKey, String>,
    list_separator: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

impl Strings {
    pub fn english() -> Self {
        Self {
            overrides: HashMap::new(),
            list_separator: ", ".to_string(),
        }
    }

    /// Build a table from a JSON object of `name -> text`.
    ///
    /// Unknown names are ignored. The reserved name `list_separator`
    /// replaces the delimiter used to join author names.
    pub fn from_json(json: &str) -> BookpediaResult<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut strings = Self::english();
        for (name, text) in raw {
            if name == "list_separator" {
                strings.list_separator = text;
                continue;
            }
            match StringKey::from_name(&name) {
                Some(key) => {
                    strings.overrides.insert(key, text);
                }
                None => tracing::debug!("Ignoring unknown string key: {}", name),
            }
        }
        Ok(strings)
    }

    pub fn load(path: &Path) -> BookpediaResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Text for `key`, falling back to English.
    pub fn resolve(&self, key: StringKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.english())
    }

    /// Delimiter placed between list items such as author names.
    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }
}
