//! Clickable regions on the detail screen.
//!
//! The header buttons register hit areas while rendering; the event loop
//! resolves mouse clicks and hover against the registry from the last frame.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
