//! State-to-presentation mapping for the detail screen.

use crate::i18n::{StringKey, Strings};
use crate::models::{Book, BookDetailState};

use super::format::{format_page_count, format_rating, is_blank, join_authors};

/// Glyph shown next to the rating value.
pub const STAR_GLYPH: char = '★';

/// Everything the detail screen shows for one state snapshot.
///
/// Built by [`BookDetailView::from_state`], which is a pure function: the
/// same snapshot and string table always produce an equal view.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailView {
    /// Frame around the content; always present
    pub background: Background,
    /// `None` when the snapshot carries no book
    pub body: Option<DetailBody>,
    /// Label for the back button
    pub back_label: String,
    /// Label for the favorite toggle in its current state
    pub favorite_label: String,
}

/// The frame drawn behind the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// Cover image handed to the image loader, if a book is shown
    pub image_url: Option<String>,
    pub is_favorite: bool,
}

/// Content column shown when a book is present.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBody {
    pub title: String,
    /// Authors joined with the locale separator; empty when there are none
    pub authors: String,
    /// Rating chip then pages chip, each only when its value exists
    pub stats: Vec<StatChip>,
    pub languages: Option<LanguageSection>,
    pub synopsis_title: String,
    pub synopsis: Synopsis,
}

/// A titled value chip in the stat row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatChip {
    pub label: String,
    pub value: String,
    pub glyph: Option<char>,
}

impl StatChip {
    /// Text inside the chip, including the glyph.
    pub fn text(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{} {}", self.value, glyph),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSection {
    pub label: String,
    /// One upper-cased chip per language, in source order
    pub chips: Vec<String>,
}

/// What occupies the synopsis area.
#[derive(Debug, Clone, PartialEq)]
pub enum Synopsis {
    /// Description is still being fetched; carries the indicator label
    Loading(String),
    /// No usable description; rendered dimmed
    Unavailable(String),
    /// Description text, rendered justified
    Text(String),
}

impl BookDetailView {
    pub fn from_state(state: &BookDetailState, strings: &Strings) -> Self {
        let favorite_key = if state.is_favorite {
            StringKey::Unfavorite
        } else {
            StringKey::Favorite
        };

        Self {
            background: Background {
                image_url: state.book.as_ref().map(|book| book.image_url.clone()),
                is_favorite: state.is_favorite,
            },
            body: state
                .book
                .as_ref()
                .map(|book| DetailBody::from_book(book, state.is_loading, strings)),
            back_label: strings.resolve(StringKey::Back).to_string(),
            favorite_label: strings.resolve(favorite_key).to_string(),
        }
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl DetailBody {
    fn from_book(book: &Book, is_loading: bool, strings: &Strings) -> Self {
        let mut stats = Vec::with_capacity(2);
        if let Some(rating) = book.average_rating {
            stats.push(StatChip {
                label: strings.resolve(StringKey::Rating).to_string(),
                value: format_rating(rating),
                glyph: Some(STAR_GLYPH),
            });
        }
        if let Some(pages) = book.num_pages {
            stats.push(StatChip {
                label: strings.resolve(StringKey::Pages).to_string(),
                value: format_page_count(pages),
                glyph: None,
            });
        }

        let languages = (!book.languages.is_empty()).then(|| LanguageSection {
            label: strings.resolve(StringKey::Languages).to_string(),
            chips: book
                .languages
                .iter()
                .map(|language| language.to_uppercase())
                .collect(),
        });

        let synopsis = if is_loading {
            Synopsis::Loading(strings.resolve(StringKey::Loading).to_string())
        } else {
            match book.description.as_deref() {
                Some(text) if !is_blank(Some(text)) => Synopsis::Text(text.to_string()),
                _ => Synopsis::Unavailable(
                    strings
                        .resolve(StringKey::DescriptionUnavailable)
                        .to_string(),
                ),
            }
        };

        Self {
            title: book.title.clone(),
            authors: join_authors(&book.author, strings.list_separator()),
            stats,
            languages,
            synopsis_title: strings.resolve(StringKey::Synopsis).to_string(),
            synopsis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_of(book: Book, is_loading: bool) -> BookDetailView {
        let state = BookDetailState {
            book: Some(book),
            is_favorite: false,
            is_loading,
        };
        BookDetailView::from_state(&state, &Strings::english())
    }

    fn body_of(book: Book) -> DetailBody {
        view_of(book, false).body.unwrap()
    }

    #[test]
    fn test_no_book_has_no_body() {
        let view = BookDetailView::from_state(&BookDetailState::default(), &Strings::english());
        assert!(view.body.is_none());
        assert!(view.background.image_url.is_none());
    }

    #[test]
    fn test_stats_order_rating_then_pages() {
        let body = body_of(Book::sample());
        assert_eq!(body.stats.len(), 2);
        assert_eq!(body.stats[0].label, "Rating");
        assert_eq!(body.stats[0].value, "4.3");
        assert_eq!(body.stats[0].glyph, Some(STAR_GLYPH));
        assert_eq!(body.stats[1].label, "Pages");
        assert_eq!(body.stats[1].text(), "604");
    }

    #[test]
    fn test_only_pages_chip() {
        let mut book = Book::sample();
        book.average_rating = None;
        let body = body_of(book);
        assert_eq!(body.stats.len(), 1);
        assert_eq!(body.stats[0].value, "604");
    }

    #[test]
    fn test_empty_stat_row() {
        let mut book = Book::sample();
        book.average_rating = None;
        book.num_pages = None;
        assert!(body_of(book).stats.is_empty());
    }

    #[test]
    fn test_languages_upper_cased_in_order() {
        let mut book = Book::sample();
        book.languages = vec!["en".to_string(), "fr".to_string(), "en".to_string()];
        let section = body_of(book).languages.unwrap();
        assert_eq!(section.chips, vec!["EN", "FR", "EN"]);
    }

    #[test]
    fn test_empty_languages_hide_section() {
        let mut book = Book::sample();
        book.languages.clear();
        assert!(body_of(book).languages.is_none());
    }

    #[test]
    fn test_empty_authors_render_empty_line() {
        let mut book = Book::sample();
        book.author.clear();
        assert_eq!(body_of(book).authors, "");
    }

    #[test]
    fn test_loading_wins_over_description() {
        let book = Book::sample().with_description(Some("A desert planet.".to_string()));
        let body = view_of(book, true).body.unwrap();
        assert_eq!(body.synopsis, Synopsis::Loading("Loading...".to_string()));
    }

    #[test]
    fn test_whitespace_description_is_unavailable() {
        let book = Book::sample().with_description(Some("   ".to_string()));
        assert_eq!(
            body_of(book).synopsis,
            Synopsis::Unavailable("Description unavailable".to_string())
        );
    }

    #[test]
    fn test_description_kept_verbatim() {
        let text = "  Paul Atreides,\n heir of House Atreides.";
        let book = Book::sample().with_description(Some(text.to_string()));
        assert_eq!(body_of(book).synopsis, Synopsis::Text(text.to_string()));
    }

    #[test]
    fn test_favorite_label_follows_state() {
        let mut state = BookDetailState::loaded(Book::sample());
        let strings = Strings::english();
        assert_eq!(
            BookDetailView::from_state(&state, &strings).favorite_label,
            "Favorite"
        );
        state.is_favorite = true;
        let view = BookDetailView::from_state(&state, &strings);
        assert_eq!(view.favorite_label, "Favorited");
        assert!(view.background.is_favorite);
    }
}
