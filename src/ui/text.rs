//! Word wrapping and justification by display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap; words wider than `width` are broken across lines.
///
/// Runs of whitespace collapse to a single space. An empty or blank input
/// yields one empty line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    wrap_word_lines(text, width)
        .into_iter()
        .map(|words| words.join(" "))
        .collect()
}

/// Wrap `text` and stretch every line but the last of each paragraph to
/// exactly `width` columns by widening the gaps between words.
///
/// Paragraphs are separated by `\n`; empty paragraphs become empty lines.
/// Whitespace inside a line keeps its source width, and a paragraph's
/// leading indent is kept on its first line. Gaps at line breaks are dropped.
pub fn justify(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let lines = wrap_spaced_lines(paragraph, width);
        let last = lines.len().saturating_sub(1);
        for (i, tokens) in lines.iter().enumerate() {
            let extra = if i == last { 0 } else { width.saturating_sub(line_width(tokens)) };
            out.push(spread_tokens(tokens, extra));
        }
    }
    out
}

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn wrap_word_lines(text: &str, width: usize) -> Vec<Vec<String>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in break_word(word, width) {
            let piece_width = piece.width();
            let needed = if current.is_empty() {
                piece_width
            } else {
                current_width + 1 + piece_width
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = piece_width;
            } else {
                current_width = needed;
            }
            current.push(piece);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// A word, or a piece of one, with the whitespace columns before it.
struct Token {
    gap: usize,
    text: String,
}

fn spaced_tokens(paragraph: &str, width: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut gap = 0;
    let mut word = String::new();
    for c in paragraph.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                push_word(&mut tokens, gap, &word, width);
                word.clear();
                gap = 0;
            }
            gap += 1;
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        push_word(&mut tokens, gap, &word, width);
    }
    tokens
}

fn push_word(tokens: &mut Vec<Token>, gap: usize, word: &str, width: usize) {
    for (i, piece) in break_word(word, width).into_iter().enumerate() {
        tokens.push(Token {
            gap: if i == 0 { gap } else { 0 },
            text: piece,
        });
    }
}

fn wrap_spaced_lines(paragraph: &str, width: usize) -> Vec<Vec<Token>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Token>> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut used = 0;

    for mut token in spaced_tokens(paragraph, width) {
        let w = token.text.width();
        if current.is_empty() {
            token.gap = if lines.is_empty() {
                token.gap.min(width.saturating_sub(w))
            } else {
                0
            };
            used = token.gap + w;
        } else if used + token.gap + w > width {
            lines.push(std::mem::take(&mut current));
            token.gap = 0;
            used = w;
        } else {
            used += token.gap + w;
        }
        current.push(token);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn line_width(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| t.gap + t.text.width()).sum()
}

/// Join tokens, adding `extra` columns across the gaps between words.
/// Extra columns go to the leftmost gaps first; the indent never grows.
fn spread_tokens(tokens: &[Token], extra: usize) -> String {
    let stretchable = tokens.iter().skip(1).filter(|t| t.gap > 0).count();
    let (base, rem) = if stretchable == 0 {
        (0, 0)
    } else {
        (extra / stretchable, extra % stretchable)
    };

    let mut line = String::new();
    let mut seen = 0;
    for (i, token) in tokens.iter().enumerate() {
        let mut gap = token.gap;
        if i > 0 && token.gap > 0 {
            gap += base + usize::from(seen < rem);
            seen += 1;
        }
        line.extend(std::iter::repeat(' ').take(gap));
        line.push_str(&token.text);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words_fits() {
        assert_eq!(wrap_words("Frank Herbert", 20), vec!["Frank Herbert"]);
    }

    #[test]
    fn test_wrap_words_breaks_on_spaces() {
        assert_eq!(
            wrap_words("the spice must flow", 10),
            vec!["the spice", "must flow"]
        );
    }

    #[test]
    fn test_wrap_words_empty_is_one_line() {
        assert_eq!(wrap_words("", 10), vec![""]);
        assert_eq!(wrap_words("   ", 10), vec![""]);
    }

    #[test]
    fn test_wrap_words_breaks_long_word() {
        assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_words_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(wrap_words("砂丘砂丘", 4), vec!["砂丘", "砂丘"]);
    }

    #[test]
    fn test_justify_fills_all_but_last_line() {
        let lines = justify("a bb ccc dddd eeeee ff", 12);
        for line in &lines[..lines.len() - 1] {
            assert_eq!(line.width(), 12, "{:?}", line);
        }
        assert_eq!(lines.last().unwrap(), "ff");
    }

    #[test]
    fn test_justify_extra_spaces_go_left() {
        assert_eq!(justify("a b c dd", 6), vec!["a  b c", "dd"]);
    }

    #[test]
    fn test_justify_single_word_line_not_padded() {
        assert_eq!(justify("abcdef gh", 6), vec!["abcdef", "gh"]);
    }

    #[test]
    fn test_justify_keeps_source_spacing() {
        assert_eq!(
            justify("Arrakis,  desert   planet", 40),
            vec!["Arrakis,  desert   planet"]
        );
        assert_eq!(justify("  indented text", 20), vec!["  indented text"]);
    }

    #[test]
    fn test_justify_widens_source_gaps() {
        // Natural width of "a  b c" is 6; one extra column goes to the first gap
        assert_eq!(justify("a  b c dd", 7), vec!["a   b c", "dd"]);
    }

    #[test]
    fn test_justify_drops_gap_at_line_break() {
        assert_eq!(justify("abc    def", 5), vec!["abc", "def"]);
    }

    #[test]
    fn test_justify_keeps_paragraph_breaks() {
        assert_eq!(justify("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
