//! Formatter trait for rendering log requests

use super::request::LogRequest;

/// Renders one request to `request.sink`.
///
/// Called synchronously on the emitting thread. Implementations write
/// exactly one record and handle their own write failures; the logger
/// never sees them.
pub trait Formatter: Send + Sync {
    fn log(&self, request: &LogRequest<'_>);
}

impl<F> Formatter for F
where
    F: Fn(&LogRequest<'_>) + Send + Sync,
{
    fn log(&self, request: &LogRequest<'_>) {
        self(request)
    }
}
