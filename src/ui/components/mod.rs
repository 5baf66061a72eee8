//! Reusable UI components.
//!
//! - `StatusIndicator` - spinner shown while content loads

mod status_indicator;

pub use status_indicator::{get_spinner_char, next_spinner_frame, render_spinner_line};
