//! # Textonym
//!
//! A multi-tap keypad textonym lookup library for Rust.
//!
//! ## Features
//!
//! - Configurable keypad layouts with a built-in standard (ITU E.161) preset
//! - Digit signatures for words: case-insensitive, unmapped characters pass
//!   through unchanged
//! - Word-list indexing by signature and same-signature queries
//! - Line-oriented layout and word-list file loaders

pub mod cli;
pub mod error;
pub mod index;
pub mod keypad;
pub mod loader;

pub mod prelude {
    pub use crate::error::{Result, TextonymError};
    pub use crate::index::TextonymIndex;
    pub use crate::keypad::KeypadTable;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
