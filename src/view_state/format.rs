//! Value formatting for the detail screen.

/// Round a rating to one decimal place and print it with exactly one decimal.
///
/// Rounding is half away from zero at the 0.1 scale, so `4.25` shows as
/// `4.3`. Whole values keep their trailing zero (`3.0`, never `3`).
pub fn format_rating(rating: f64) -> String {
    let rounded = (rating * 10.0).round() / 10.0;
    // -0.0 prints as "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1}", rounded)
}

/// Page count as plain digits. Out-of-range values are shown unchanged.
pub fn format_page_count(pages: i32) -> String {
    pages.to_string()
}

pub fn join_authors(authors: &[String], separator: &str) -> String {
    authors.join(separator)
}

/// True when `text` is absent or contains only whitespace.
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}
