//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and hand the result
//! to the logger. Formatting happens before the enabled/threshold check;
//! guard expensive arguments with [`Logger::is_level_enabled`].
//!
//! [`Logger::is_level_enabled`]: crate::Logger::is_level_enabled
//!
//! # Examples
//!
//! ```
//! use ns_debug_logger::prelude::*;
//! use ns_debug_logger::warn;
//!
//! let logger = Logger::builder("server").sink(None).build()?;
//! let port = 8080;
//! warn!(logger, "Port {} already in use", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use ns_debug_logger::prelude::*;
/// # let logger = Logger::builder("app").sink(None).build()?;
/// use ns_debug_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
