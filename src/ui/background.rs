//! Frame drawn behind the detail content.
//!
//! The header band stands in for the book's cover art and carries the back
//! button and the favorite toggle. The cover image itself belongs to an
//! external image loader; the terminal rendition shows its URL as a caption.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::text::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_COVER_BG, COLOR_DIM, COLOR_FAVORITE};
use crate::view_state::BookDetailView;

pub const HEADER_HEIGHT: u16 = 3;

const BACK_GLYPH: char = '←';
const HEART_FILLED: char = '♥';
const HEART_OUTLINE: char = '♡';

/// Draw the frame and header. Returns the area left for content.
pub fn render_background(
    frame: &mut Frame,
    area: Rect,
    view: &BookDetailView,
    hit_areas: &mut HitAreaRegistry,
) -> Rect {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_height = HEADER_HEIGHT.min(inner.height);
    let [header, content] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
    ])
    .areas(inner);

    if header.height > 0 && header.width > 0 {
        render_header(frame, header, view, hit_areas);
    }
    content
}

fn render_header(
    frame: &mut Frame,
    header: Rect,
    view: &BookDetailView,
    hit_areas: &mut HitAreaRegistry,
) {
    let band = Style::default().bg(COLOR_COVER_BG);
    frame.render_widget(Block::default().style(band), header);

    let hover = Style::default().add_modifier(Modifier::REVERSED);

    let back_text = format!(" {} {} ", BACK_GLYPH, view.back_label);
    let back_width = (back_text.width() as u16).min(header.width);
    let back_rect = Rect::new(header.x, header.y, back_width, 1);
    hit_areas.register(back_rect, ClickAction::Back, Some(hover));

    let (heart, heart_color) = if view.background.is_favorite {
        (HEART_FILLED, COLOR_FAVORITE)
    } else {
        (HEART_OUTLINE, COLOR_ACCENT)
    };
    let favorite_text = format!(" {} {} ", heart, view.favorite_label);
    let favorite_width = (favorite_text.width() as u16).min(header.width);
    let favorite_rect = Rect::new(
        header.x + header.width - favorite_width,
        header.y,
        favorite_width,
        1,
    );
    hit_areas.register(favorite_rect, ClickAction::ToggleFavorite, Some(hover));

    let back_style = band
        .fg(COLOR_ACCENT)
        .patch(hit_areas.hover_style_for(ClickAction::Back).unwrap_or_default());
    let favorite_style = band
        .fg(heart_color)
        .patch(
            hit_areas
                .hover_style_for(ClickAction::ToggleFavorite)
                .unwrap_or_default(),
        );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(back_text, back_style))),
        back_rect,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(favorite_text, favorite_style))),
        favorite_rect,
    );

    if header.height >= 2 {
        if let Some(url) = view.background.image_url.as_deref().filter(|u| !u.is_empty()) {
            let caption_rect = Rect::new(header.x, header.y + header.height - 1, header.width, 1);
            let caption = truncate_to_width(url, caption_rect.width.saturating_sub(2) as usize);
            frame.render_widget(
                Paragraph::new(
                    Line::from(Span::styled(
                        caption,
                        band.fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
                    ))
                    .centered(),
                ),
                caption_rect,
            );
        }
    }
}
