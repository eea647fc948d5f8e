//! Ambient configuration read from the environment
//!
//! | Variable      | Meaning                                  | Default  |
//! |---------------|------------------------------------------|----------|
//! | `DEBUG`       | namespace pattern                        | `*`      |
//! | `DEBUG_LEVEL` | one of `DEBUG`, `INFO`, `WARN`, `ERROR`  | `WARN`   |
//! | `DEBUG_COLOR` | presence (any value) enables color       | disabled |
//!
//! The variables are read every time a logger (or child logger) is built.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::pattern::MATCH_ALL;
use std::env;

/// Namespace pattern variable.
pub const DEBUG: &str = "DEBUG";
/// Threshold level variable.
pub const DEBUG_LEVEL: &str = "DEBUG_LEVEL";
/// Color toggle variable.
pub const DEBUG_COLOR: &str = "DEBUG_COLOR";

/// Snapshot of the three environment settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub pattern: String,
    pub level: LogLevel,
    pub color: bool,
}

impl EnvConfig {
    /// Read the process environment.
    ///
    /// A variable that is set but not valid UTF-8 fails with
    /// [`LoggerError::EnvNotUnicode`] instead of being rewritten.
    pub fn from_env() -> Result<Self> {
        let pattern = read_var(DEBUG)?;
        let level = read_var(DEBUG_LEVEL)?;
        let color = env::var_os(DEBUG_COLOR).map(|_| String::new());

        Self::from_lookup(|name| match name {
            DEBUG => pattern.clone(),
            DEBUG_LEVEL => level.clone(),
            DEBUG_COLOR => color.clone(),
            _ => None,
        })
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use ns_debug_logger::core::env::EnvConfig;
    /// use ns_debug_logger::LogLevel;
    ///
    /// let config = EnvConfig::from_lookup(|name| match name {
    ///     "DEBUG_LEVEL" => Some("INFO".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.pattern, "*");
    /// assert_eq!(config.level, LogLevel::Info);
    /// assert!(!config.color);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pattern = lookup(DEBUG)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| MATCH_ALL.to_string());

        let level = match lookup(DEBUG_LEVEL).filter(|l| !l.is_empty()) {
            Some(name) => name.parse::<LogLevel>()?,
            None => LogLevel::default(),
        };

        // Presence test: DEBUG_COLOR="" still enables color.
        let color = cfg!(feature = "color") && lookup(DEBUG_COLOR).is_some();

        Ok(Self {
            pattern,
            level,
            color,
        })
    }
}

/// Read `name`, treating unset as `None`.
pub(crate) fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(LoggerError::EnvNotUnicode {
            name: name.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL.to_string(),
            level: LogLevel::default(),
            color: false,
        }
    }
}
