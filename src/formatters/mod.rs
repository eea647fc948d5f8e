//! Formatter implementations

pub mod text;

pub use text::TextFormatter;

pub use crate::core::Formatter;
