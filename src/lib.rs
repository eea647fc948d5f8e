//! # Namespaced Debug Logger
//!
//! Level-filtered logging where each logger is tied to a namespace and the
//! environment decides what is written.
//!
//! ## Features
//!
//! - **Namespace filtering**: `DEBUG=app:*` enables matching loggers only
//! - **Threshold filtering**: `DEBUG_LEVEL` sets the minimum level (default `WARN`)
//! - **Child loggers**: `app` -> `app:db`, sharing sink and formatter
//! - **Delay tracking**: every record shows the time since the previous one
//! - **Pluggable output**: custom sinks and formatters
//!
//! ```
//! use ns_debug_logger::prelude::*;
//!
//! let logger = Logger::builder("app").sink(Sink::stderr()).build()?;
//! let db = logger.child("db")?;
//! db.warn("slow query");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Formatter, LogLevel, LogRequest, Logger, LoggerBuilder, LoggerError, Result, Sink,
    };
    pub use crate::formatters::TextFormatter;
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    color_for, matches, Color, Colorizer, EnvConfig, Formatter, LogLevel, LogRequest, Logger,
    LoggerBuilder, LoggerError, NamespacePattern, Result, Sink,
};
pub use formatters::TextFormatter;
pub use sinks::MemorySink;
