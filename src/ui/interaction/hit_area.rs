//! Hit area registry.

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

/// What a click on a registered region means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Back,
    ToggleFavorite,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied to the region while the pointer is over it
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position { x, y })
    }
}

/// Hit areas registered during the last render.
///
/// Cleared at the start of every render. Later registrations win when
/// regions overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. The hovered index is kept so the next frame, which
    /// registers the same buttons in the same order, can still style it.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Track the pointer. Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Hover style for `action` if the pointer is over its area.
    pub fn hover_style_for(&self, action: ClickAction) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.action == action {
            area.hover_style
        } else {
            None
        }
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_hit_area_contains_edges() {
        let area = HitArea::new(Rect::new(10, 5, 4, 1), ClickAction::Back);
        assert!(area.contains(10, 5));
        assert!(area.contains(13, 5));
        assert!(!area.contains(14, 5));
        assert!(!area.contains(10, 6));
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_hit_test() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 6, 1), ClickAction::Back, None);
        registry.register(Rect::new(20, 0, 10, 1), ClickAction::ToggleFavorite, None);

        assert_eq!(registry.hit_test(2, 0), Some(ClickAction::Back));
        assert_eq!(registry.hit_test(25, 0), Some(ClickAction::ToggleFavorite));
        assert_eq!(registry.hit_test(10, 0), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::Back, None);
        registry.register(Rect::new(5, 0, 10, 1), ClickAction::ToggleFavorite, None);
        assert_eq!(registry.hit_test(7, 0), Some(ClickAction::ToggleFavorite));
    }

    #[test]
    fn test_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::Back, None);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(1, 0), None);
    }

    #[test]
    fn test_hover_style() {
        let hover = Style::default().add_modifier(Modifier::REVERSED);
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 6, 1), ClickAction::Back, Some(hover));

        assert!(registry.update_hover(1, 0));
        assert_eq!(registry.hover_style_for(ClickAction::Back), Some(hover));
        assert_eq!(registry.hover_style_for(ClickAction::ToggleFavorite), None);

        assert!(!registry.update_hover(2, 0));
        assert!(registry.update_hover(30, 3));
        assert_eq!(registry.hover_style_for(ClickAction::Back), None);
    }
}
