//! Terminal word board for augmentative and alternative communication.
//!
//! Tiles are fetched from a small HTTP backend, laid out in pages and spoken
//! through the backend's text-to-speech endpoint when tapped.

rust_i18n::i18n!("locales", fallback = "da");

pub mod app;
pub mod audio;
pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod remote;
pub mod ui;

pub use error::{BoardError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Switch board labels to `language`. Unknown languages fall back to Danish.
pub fn set_language(language: &str) {
    rust_i18n::set_locale(language);
}
