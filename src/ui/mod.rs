//! Terminal rendering for the book detail screen.
//!
//! [`render`] draws a [`BookDetailView`] into a ratatui frame. It makes no
//! display decisions of its own beyond layout; those are made when the view
//! is built from state.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │ ← Back                        ♡ Favorite │  header band
//! │                                          │
//! │            https://covers/…jpg           │
//! │                   Dune                   │  title
//! │               Frank Herbert              │  authors
//! │                                          │
//! │            Rating     Pages              │  stat row
//! │           4.3 ★      604                 │
//! │                                          │
//! │                Languages                 │  language flow row
//! │             ENG  SPA  FRE                │
//! │                                          │
//! │ Synopsis                                 │
//! │                                          │
//! │ Description unavailable                  │  synopsis body
//! ╰──────────────────────────────────────────╯
//! ```

pub mod background;
pub mod chips;
pub mod components;
pub mod interaction;
pub mod text;
pub mod theme;

use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use self::components::render_spinner_line;
use self::interaction::HitAreaRegistry;
use self::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::{BookDetailView, DetailBody, Synopsis};

/// Widest the content column gets, in columns
pub const MAX_CONTENT_WIDTH: u16 = 70;

/// Columns kept free on each side of the content column
pub const HORIZONTAL_PADDING: u16 = 2;

/// Render-time state that outlives a single frame.
#[derive(Debug, Default)]
pub struct UiContext {
    /// First content line shown; clamped to `max_scroll` on every render
    pub scroll_offset: u16,
    /// Largest valid scroll offset for the last rendered frame
    pub max_scroll: u16,
    /// Height of the content viewport in the last rendered frame
    pub viewport_height: u16,
    pub spinner_frame: usize,
    pub hit_areas: HitAreaRegistry,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll_offset) + delta;
        self.scroll_offset = next.clamp(0, i32::from(self.max_scroll)) as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll;
    }
}

/// Draw the whole detail screen.
pub fn render(frame: &mut Frame, view: &BookDetailView, ctx: &mut UiContext) {
    ctx.hit_areas.clear();

    let content = background::render_background(frame, frame.area(), view, &mut ctx.hit_areas);
    let column = content_column(content);
    ctx.viewport_height = column.height;

    let Some(body) = &view.body else {
        ctx.max_scroll = 0;
        ctx.scroll_offset = 0;
        return;
    };

    let lines = build_body_lines(body, column.width as usize, ctx.spinner_frame);
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    ctx.max_scroll = content_height.saturating_sub(column.height);
    ctx.scroll_offset = ctx.scroll_offset.min(ctx.max_scroll);

    frame.render_widget(
        Paragraph::new(lines).scroll((ctx.scroll_offset, 0)),
        column,
    );

    let track = content.inner(Margin::new(0, 1));
    if ctx.max_scroll > 0 && !track.is_empty() {
        let mut state = ScrollbarState::new(ctx.max_scroll as usize + 1)
            .position(ctx.scroll_offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            track,
            &mut state,
        );
    }
}

/// Centered column of at most [`MAX_CONTENT_WIDTH`] with padding.
pub fn content_column(area: Rect) -> Rect {
    let available = area.width.saturating_sub(HORIZONTAL_PADDING * 2);
    let width = available.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + u16::from(area.height > 2);
    let height = area.height.saturating_sub(2);
    Rect::new(x, y, width, height)
}

/// All body lines, pre-wrapped to `width`, top to bottom.
pub fn build_body_lines(body: &DetailBody, width: usize, spinner_frame: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    let title_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    for line in text::wrap_words(&body.title, width) {
        lines.push(Line::from(Span::styled(line, title_style)).centered());
    }
    for line in text::wrap_words(&body.authors, width) {
        lines.push(Line::from(line).centered());
    }

    let stats = chips::stat_row_lines(&body.stats);
    if !stats.is_empty() {
        lines.push(Line::from(""));
        lines.extend(stats);
    }

    if let Some(languages) = &body.languages {
        lines.push(Line::from(""));
        lines.extend(chips::language_lines(languages, width));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        body.synopsis_title.clone(),
        title_style,
    )));
    lines.push(Line::from(""));

    match &body.synopsis {
        Synopsis::Loading(label) => lines.push(render_spinner_line(spinner_frame, label)),
        Synopsis::Unavailable(placeholder) => {
            let dim = Style::default().fg(COLOR_DIM);
            for line in text::justify(placeholder, width) {
                lines.push(Line::from(Span::styled(line, dim)));
            }
        }
        Synopsis::Text(description) => {
            for line in text::justify(description, width) {
                lines.push(Line::from(line));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_column_caps_width() {
        let column = content_column(Rect::new(0, 0, 200, 40));
        assert_eq!(column.width, MAX_CONTENT_WIDTH);
        assert_eq!(column.x, 65);
        assert_eq!(column.y, 1);
        assert_eq!(column.height, 38);
    }

    #[test]
    fn test_content_column_narrow() {
        let column = content_column(Rect::new(0, 0, 30, 10));
        assert_eq!(column.width, 26);
        assert_eq!(column.x, 2);
    }

    #[test]
    fn test_content_column_tiny() {
        let column = content_column(Rect::new(0, 0, 3, 1));
        assert_eq!(column.width, 0);
        assert_eq!(column.height, 0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut ctx = UiContext::new();
        ctx.max_scroll = 5;
        ctx.scroll_by(3);
        assert_eq!(ctx.scroll_offset, 3);
        ctx.scroll_by(10);
        assert_eq!(ctx.scroll_offset, 5);
        ctx.scroll_by(-100);
        assert_eq!(ctx.scroll_offset, 0);
        ctx.scroll_to_bottom();
        assert_eq!(ctx.scroll_offset, 5);
        ctx.scroll_to_top();
        assert_eq!(ctx.scroll_offset, 0);
    }
}
