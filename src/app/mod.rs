//! Detail screen controller.
//!
//! `App` holds what the screen needs between frames: the latest snapshot
//! from the view-model, the view derived from it, scroll position and hit
//! areas. It never changes book state itself; every user intent is sent
//! through the dispatch function supplied at construction.
//!
//! ```text
//! view-model ──watch──▶ StateSubscription ──AppMessage──▶ App ──render──▶ ui
//!     ▲                                                    │
//!     └──────────── dispatch(BookDetailAction) ◀───────────┘
//! ```

mod actions;
mod description;
mod messages;
mod subscription;
mod view_model;

pub use actions::{intercept_back, BookDetailAction};
pub use description::{DescriptionSource, NoDescriptionSource, StaticDescriptionSource};
pub use messages::AppMessage;
pub use subscription::StateSubscription;
pub use view_model::{BookDetailViewModel, InMemoryBookDetailViewModel};

use crate::i18n::Strings;
use crate::input::ScreenCommand;
use crate::models::BookDetailState;
use crate::ui::components::next_spinner_frame;
use crate::ui::interaction::ClickAction;
use crate::ui::UiContext;
use crate::view_state::{BookDetailView, Synopsis};

/// Lines moved per scroll step
const SCROLL_STEP: i32 = 1;

/// Ticks between spinner frames
const SPINNER_TICKS_PER_FRAME: u64 = 6;

pub type Dispatch = Box<dyn FnMut(BookDetailAction) + Send>;

pub struct App {
    /// Latest snapshot from the view-model
    pub state: BookDetailState,
    /// View derived from `state`
    pub view: BookDetailView,
    pub ui: UiContext,
    pub should_quit: bool,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    pub tick_count: u64,
    strings: Strings,
    dispatch: Dispatch,
}

impl App {
    pub fn new(strings: Strings, dispatch: Dispatch) -> Self {
        let state = BookDetailState::default();
        let view = BookDetailView::from_state(&state, &strings);
        Self {
            state,
            view,
            ui: UiContext::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            strings,
            dispatch,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::StateChanged(state) => self.apply_state(state),
            AppMessage::NavigatedBack => {
                // The detail screen is the only destination, so leaving it
                // ends the program.
                tracing::info!("Navigated back from detail screen");
                self.should_quit = true;
            }
        }
    }

    /// Replace the snapshot and re-derive the view.
    pub fn apply_state(&mut self, state: BookDetailState) {
        let book_changed = self.state.book.as_ref().map(|b| &b.id)
            != state.book.as_ref().map(|b| &b.id);
        if book_changed {
            self.ui.scroll_to_top();
        }
        tracing::debug!(
            "State changed: book={:?} favorite={} loading={}",
            state.book.as_ref().map(|b| b.id.as_str()),
            state.is_favorite,
            state.is_loading
        );
        self.view = BookDetailView::from_state(&state, &self.strings);
        self.state = state;
        self.mark_dirty();
    }

    pub fn handle_command(&mut self, command: ScreenCommand) {
        match command {
            ScreenCommand::Back => self.dispatch(BookDetailAction::OnBackClick),
            ScreenCommand::ToggleFavorite => self.dispatch(BookDetailAction::OnFavoriteClick),
            ScreenCommand::ScrollUp => self.ui.scroll_by(-SCROLL_STEP),
            ScreenCommand::ScrollDown => self.ui.scroll_by(SCROLL_STEP),
            ScreenCommand::PageUp => self.ui.scroll_by(-self.page_size()),
            ScreenCommand::PageDown => self.ui.scroll_by(self.page_size()),
            ScreenCommand::ScrollToTop => self.ui.scroll_to_top(),
            ScreenCommand::ScrollToBottom => self.ui.scroll_to_bottom(),
            ScreenCommand::Quit => self.should_quit = true,
        }
        self.mark_dirty();
    }

    /// Resolve a mouse click against the hit areas of the last frame.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        let Some(action) = self.ui.hit_areas.hit_test(x, y) else {
            return;
        };
        tracing::debug!("Click: {:?}", action);
        match action {
            ClickAction::Back => self.dispatch(BookDetailAction::OnBackClick),
            ClickAction::ToggleFavorite => self.dispatch(BookDetailAction::OnFavoriteClick),
        }
        self.mark_dirty();
    }

    pub fn handle_mouse_move(&mut self, x: u16, y: u16) {
        if self.ui.hit_areas.update_hover(x, y) {
            self.mark_dirty();
        }
    }

    /// Advance animations. Only the loading spinner animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading_visible() && self.tick_count % SPINNER_TICKS_PER_FRAME == 0 {
            self.ui.spinner_frame = next_spinner_frame(self.ui.spinner_frame);
            self.mark_dirty();
        }
    }

    fn is_loading_visible(&self) -> bool {
        matches!(
            self.view.body.as_ref().map(|body| &body.synopsis),
            Some(Synopsis::Loading(_))
        )
    }

    fn page_size(&self) -> i32 {
        i32::from(self.ui.viewport_height.saturating_sub(1).max(1))
    }

    fn dispatch(&mut self, action: BookDetailAction) {
        (self.dispatch)(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;
    use std::sync::{Arc, Mutex};

    fn recording_app() -> (App, Arc<Mutex<Vec<BookDetailAction>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let app = App::new(
            Strings::english(),
            Box::new(move |action| sink.lock().unwrap().push(action)),
        );
        (app, log)
    }

    #[test]
    fn test_new_app_has_no_body() {
        let (app, _) = recording_app();
        assert!(app.view.body.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_state_change_rederives_view() {
        let (mut app, _) = recording_app();
        app.needs_redraw = false;
        app.handle_message(AppMessage::StateChanged(BookDetailState::loaded(
            Book::sample(),
        )));
        assert_eq!(app.view.body.as_ref().unwrap().title, "Dune");
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_commands_dispatch_actions() {
        let (mut app, log) = recording_app();
        app.handle_command(ScreenCommand::ToggleFavorite);
        app.handle_command(ScreenCommand::Back);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                BookDetailAction::OnFavoriteClick,
                BookDetailAction::OnBackClick
            ]
        );
        assert!(!app.should_quit);
    }

    #[test]
    fn test_navigated_back_quits() {
        let (mut app, _) = recording_app();
        app.handle_message(AppMessage::NavigatedBack);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_resets_on_new_book() {
        let (mut app, _) = recording_app();
        app.apply_state(BookDetailState::loaded(Book::sample()));
        app.ui.max_scroll = 10;
        app.handle_command(ScreenCommand::ScrollDown);
        assert_eq!(app.ui.scroll_offset, 1);

        // Same book, new snapshot: position kept
        let mut favorite = BookDetailState::loaded(Book::sample());
        favorite.is_favorite = true;
        app.apply_state(favorite);
        assert_eq!(app.ui.scroll_offset, 1);

        let mut other = Book::sample();
        other.id = "OL1W".to_string();
        app.apply_state(BookDetailState::loaded(other));
        assert_eq!(app.ui.scroll_offset, 0);
    }

    #[test]
    fn test_spinner_only_advances_while_loading() {
        let (mut app, _) = recording_app();
        app.apply_state(BookDetailState::loaded(Book::sample()));
        for _ in 0..SPINNER_TICKS_PER_FRAME {
            app.tick();
        }
        assert_eq!(app.ui.spinner_frame, 0);

        let mut loading = BookDetailState::loaded(Book::sample());
        loading.is_loading = true;
        app.apply_state(loading);
        for _ in 0..SPINNER_TICKS_PER_FRAME {
            app.tick();
        }
        assert_eq!(app.ui.spinner_frame, 1);
    }

    #[test]
    fn test_click_outside_hit_areas_does_nothing() {
        let (mut app, log) = recording_app();
        app.handle_click(5, 5);
        assert!(log.lock().unwrap().is_empty());
    }
}
