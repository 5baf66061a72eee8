//! Bookpedia - a terminal book detail screen
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod error;
pub mod i18n;
pub mod input;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod ui;
pub mod view_state;
