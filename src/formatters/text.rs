//! Text formatter implementation

use crate::core::{Formatter, LogRequest};

/// Default formatter.
///
/// Writes `<namespace> [<LEVEL>] <message> <ms>ms` with no trailing
/// newline. With color enabled the namespace and the `<ms>ms` tail are
/// tinted; level and message never are.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, request: &LogRequest<'_>) -> String {
        format!(
            "{} [{}] {} {}",
            request.colorize(request.namespace),
            request.level.to_str(),
            request.message,
            request.colorize(&format!("{}ms", request.delay_ms()))
        )
    }
}

impl Formatter for TextFormatter {
    fn log(&self, request: &LogRequest<'_>) {
        let _ = request.sink.write_all(self.format(request).as_bytes());
    }
}
