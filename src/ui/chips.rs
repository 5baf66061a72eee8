//! Chips and the rows that hold them.
//!
//! A chip is a short label on a filled background. Stat chips sit under a
//! caption in a centered row; language chips flow across as many lines as
//! the width needs.

use std::ops::Range;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_CHIP_BG, COLOR_CHIP_TEXT, COLOR_LABEL, COLOR_STAR};
use crate::view_state::{LanguageSection, StatChip};

/// Columns between stat columns
pub const STAT_GAP: usize = 2;

/// Columns between language chips
pub const LANGUAGE_GAP: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipSize {
    Regular,
    Small,
}

impl ChipSize {
    fn padding(self) -> usize {
        match self {
            ChipSize::Regular => 2,
            ChipSize::Small => 1,
        }
    }
}

/// Display width of a chip holding `text`.
pub fn chip_width(text: &str, size: ChipSize) -> usize {
    text.width() + 2 * size.padding()
}

/// Spans for one chip. The glyph, if any, follows the text in star color.
pub fn chip_spans(text: &str, glyph: Option<char>, size: ChipSize) -> Vec<Span<'static>> {
    let base = Style::default().fg(COLOR_CHIP_TEXT).bg(COLOR_CHIP_BG);
    let pad = " ".repeat(size.padding());
    let mut spans = vec![Span::styled(format!("{}{}", pad, text), base)];
    if let Some(glyph) = glyph {
        spans.push(Span::styled(format!(" {}", glyph), base.fg(COLOR_STAR)));
    }
    spans.push(Span::styled(pad, base));
    spans
}

/// Caption line and chip line for the stat row.
///
/// Returns no lines at all when there are no stats, so the row takes no
/// vertical space.
pub fn stat_row_lines(stats: &[StatChip]) -> Vec<Line<'static>> {
    if stats.is_empty() {
        return Vec::new();
    }

    let label_style = Style::default().fg(COLOR_LABEL);
    let mut labels: Vec<Span<'static>> = Vec::new();
    let mut chips: Vec<Span<'static>> = Vec::new();

    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            labels.push(Span::raw(" ".repeat(STAT_GAP)));
            chips.push(Span::raw(" ".repeat(STAT_GAP)));
        }
        let text = stat.text();
        let chip_w = chip_width(&text, ChipSize::Regular);
        let column = chip_w.max(stat.label.width());

        let (left, right) = split_padding(column - stat.label.width());
        labels.push(Span::raw(" ".repeat(left)));
        labels.push(Span::styled(stat.label.clone(), label_style));
        labels.push(Span::raw(" ".repeat(right)));

        let (left, right) = split_padding(column - chip_w);
        chips.push(Span::raw(" ".repeat(left)));
        chips.extend(chip_spans(&stat.value, stat.glyph, ChipSize::Regular));
        chips.push(Span::raw(" ".repeat(right)));
    }

    vec![
        Line::from(labels).centered(),
        Line::from(chips).centered(),
    ]
}

/// Caption plus flow-wrapped, centered language chips.
pub fn language_lines(section: &LanguageSection, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        section.label.clone(),
        Style::default().fg(COLOR_LABEL).add_modifier(Modifier::ITALIC),
    ))
    .centered()];

    let widths: Vec<usize> = section
        .chips
        .iter()
        .map(|chip| chip_width(chip, ChipSize::Small))
        .collect();

    for row in flow_rows(&widths, width, LANGUAGE_GAP) {
        let mut spans = Vec::new();
        for (n, chip) in section.chips[row].iter().enumerate() {
            if n > 0 {
                spans.push(Span::raw(" ".repeat(LANGUAGE_GAP)));
            }
            spans.extend(chip_spans(chip, None, ChipSize::Small));
        }
        lines.push(Line::from(spans).centered());
    }
    lines
}

/// Greedily pack items of the given widths into rows no wider than
/// `max_width`, separated by `gap`. An item wider than `max_width` gets a
/// row of its own. Returns index ranges into `widths`.
pub fn flow_rows(widths: &[usize], max_width: usize, gap: usize) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (i, &w) in widths.iter().enumerate() {
        if i == start {
            used = w;
            continue;
        }
        if used + gap + w > max_width {
            rows.push(start..i);
            start = i;
            used = w;
        } else {
            used += gap + w;
        }
    }
    if start < widths.len() {
        rows.push(start..widths.len());
    }
    rows
}

fn split_padding(total: usize) -> (usize, usize) {
    let left = total / 2;
    (left, total - left)
}
