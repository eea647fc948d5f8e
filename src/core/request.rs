//! Per-emission request handed to a formatter

use super::color::Colorizer;
use super::log_level::LogLevel;
use super::sink::Sink;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Everything a formatter needs to render one message.
///
/// Built by the logger for a single formatter call and not retained.
#[derive(Debug, Clone, Copy)]
pub struct LogRequest<'a> {
    pub level: LogLevel,
    pub namespace: &'a str,
    pub message: &'a str,
    pub sink: &'a Sink,
    /// Time since the previous emission on the same logger; zero for the first.
    pub delay: Duration,
    pub colorizer: &'a Colorizer,
    /// Wall-clock time of the emission.
    pub timestamp: DateTime<Utc>,
}

impl LogRequest<'_> {
    /// Apply the logger's colorizer to `text`.
    pub fn colorize(&self, text: &str) -> String {
        self.colorizer.colorize(text)
    }

    /// Delay in whole milliseconds, truncated.
    pub fn delay_ms(&self) -> u128 {
        self.delay.as_millis()
    }
}
