//! Core logger types and traits

pub mod color;
pub mod env;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod pattern;
pub mod request;
pub mod sink;

pub use color::{color_for, Color, Colorizer};
pub use env::{EnvConfig, DEBUG, DEBUG_COLOR, DEBUG_LEVEL};
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, NAMESPACE_SEPARATOR};
pub use pattern::{matches, NamespacePattern};
pub use request::LogRequest;
pub use sink::Sink;
