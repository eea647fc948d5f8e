//! Namespace hierarchy example
//!
//! Run with: DEBUG='app:db*' DEBUG_LEVEL=INFO DEBUG_COLOR= cargo run --example namespaces

use ns_debug_logger::prelude::*;
use ns_debug_logger::{info, warn};

/// Appends a newline to every record.
struct LineFormatter;

impl Formatter for LineFormatter {
    fn log(&self, request: &LogRequest<'_>) {
        let line = format!(
            "{} {} {} +{}\n",
            request.timestamp.format("%H:%M:%S%.3f"),
            request.colorize(request.namespace),
            request.message,
            request.colorize(&format!("{}ms", request.delay_ms()))
        );
        let _ = request.sink.write_all(line.as_bytes());
    }
}

fn main() -> Result<()> {
    let app = Logger::builder("app")
        .sink(Sink::stderr())
        .formatter(LineFormatter)
        .build()?;
    let db = app.child("db")?;
    let pool = db.child("pool")?;
    let web = app.child("web")?;

    for logger in [&app, &db, &pool, &web] {
        println!("{:<12} enabled={}", logger.namespace(), logger.is_enabled());
    }

    info!(app, "starting");
    info!(db, "connecting to {}", "postgres://localhost");
    warn!(pool, "{} of {} connections in use", 9, 10);
    info!(web, "listening on port {}", 8080);

    Ok(())
}
