//! Integration tests for the namespaced logger
//!
//! These tests drive loggers through the real environment variables:
//! - Basic emission and child namespaces
//! - Threshold and namespace filtering
//! - Construction errors
//! - Color output
//! - Custom sinks and formatters

use ns_debug_logger::core::env::{DEBUG, DEBUG_COLOR, DEBUG_LEVEL};
use ns_debug_logger::prelude::*;
use ns_debug_logger::Colorizer;
use parking_lot::Mutex;
use serial_test::serial;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Sets environment variables for the lifetime of the guard and restores
/// the previous values on drop, even if the test panics.
struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    fn new(vars: &[(&'static str, Option<&str>)]) -> Self {
        let mut saved = Vec::new();
        for (key, value) in vars {
            saved.push((*key, env::var_os(key)));
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            match previous {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

fn debug_env(pattern: &str, level: &str) -> EnvGuard {
    EnvGuard::new(&[
        (DEBUG, Some(pattern)),
        (DEBUG_LEVEL, Some(level)),
        (DEBUG_COLOR, None),
    ])
}

#[test]
#[serial]
fn test_basic_emission() {
    let _env = debug_env("*", "DEBUG");
    let buffer = MemorySink::new();

    let logger = Logger::builder("*")
        .sink(buffer.sink())
        .build()
        .expect("Failed to create logger");
    logger.debug("Hello");

    assert_eq!(buffer.contents(), "* [DEBUG] Hello 0ms");
}

#[test]
#[serial]
fn test_child_namespace_shares_sink() {
    let _env = debug_env("*", "DEBUG");
    let buffer = MemorySink::new();

    let logger = Logger::builder("*").sink(buffer.sink()).build().unwrap();
    logger.debug("Hello");
    assert_eq!(buffer.take(), "* [DEBUG] Hello 0ms");

    let child = logger.child("subnamespace").expect("Failed to create child");
    child.debug("Hello");

    assert_eq!(buffer.contents(), "*:subnamespace [DEBUG] Hello 0ms");
}

#[test]
#[serial]
fn test_nested_children() {
    let _env = debug_env("*", "DEBUG");
    let buffer = MemorySink::new();

    let logger = Logger::builder("app").sink(buffer.sink()).build().unwrap();
    let pool = logger.child("db").unwrap().child("pool").unwrap();
    pool.info("ready");

    assert_eq!(pool.namespace(), "app:db:pool");
    assert_eq!(buffer.contents(), "app:db:pool [INFO] ready 0ms");
}

#[test]
#[serial]
fn test_threshold_filtering() {
    let _env = debug_env("*", "WARN");
    let buffer = MemorySink::new();

    let logger = Logger::builder("svc").sink(buffer.sink()).build().unwrap();
    logger.debug("hidden");
    logger.info("hidden");
    assert!(buffer.is_empty());

    logger.warn("x");
    assert_eq!(buffer.take(), "svc [WARN] x 0ms");

    logger.error("y");
    let second = buffer.take();
    assert!(second.starts_with("svc [ERROR] y "), "got {:?}", second);
    assert!(second.ends_with("ms"));
}

#[test]
#[serial]
fn test_default_threshold_is_warn() {
    let _env = EnvGuard::new(&[(DEBUG, None), (DEBUG_LEVEL, None), (DEBUG_COLOR, None)]);

    let logger = Logger::builder("defaults").sink(None).build().unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.threshold(), LogLevel::Warn);
    assert_eq!(logger.colorizer(), Colorizer::Plain);

    let console = Logger::new("defaults").unwrap();
    assert_eq!(console.sink().name(), "stdout");
    assert!(console.sink().flushes_each_write());
}

#[test]
#[serial]
fn test_namespace_filtering() {
    let _env = debug_env("app:*", "DEBUG");
    let buffer = MemorySink::new();

    let db = Logger::builder("app:db").sink(buffer.sink()).build().unwrap();
    let web = Logger::builder("app:web").sink(buffer.sink()).build().unwrap();
    let other = Logger::builder("other").sink(buffer.sink()).build().unwrap();

    db.info("db");
    web.info("web");
    other.info("other");
    other.error("other");

    assert!(!other.is_enabled());
    assert_eq!(
        buffer.contents(),
        "app:db [INFO] db 0msapp:web [INFO] web 0ms"
    );
}

#[test]
#[serial]
fn test_child_rereads_environment() {
    let buffer = MemorySink::new();
    let parent = {
        let _env = debug_env("*", "DEBUG");
        Logger::builder("app").sink(buffer.sink()).build().unwrap()
    };

    let _env = debug_env("nothing-matches", "ERROR");
    let child = parent.child("db").unwrap();

    assert!(parent.is_enabled());
    assert_eq!(parent.threshold(), LogLevel::Debug);
    assert!(!child.is_enabled());
    assert_eq!(child.threshold(), LogLevel::Error);

    parent.debug("still on");
    child.error("off");
    assert_eq!(buffer.contents(), "app [DEBUG] still on 0ms");
}

#[test]
#[serial]
fn test_invalid_inputs() {
    let _env = debug_env("*", "DEBUG");

    let err = Logger::new("").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidNamespace));

    let logger = Logger::builder("app").sink(None).build().unwrap();
    let err = logger.child("").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidNamespace));

    let _level = EnvGuard::new(&[(DEBUG_LEVEL, Some("trace"))]);
    let err = Logger::new("app").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidLevel { ref value } if value == "trace"));
    assert!(err.to_string().contains("trace"));
}

#[test]
#[serial]
fn test_empty_namespace_checked_before_environment() {
    let _env = debug_env("*", "bogus");
    let err = Logger::new("").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidNamespace));
}

#[cfg(feature = "color")]
#[test]
#[serial]
fn test_color_output() {
    // The 24-bit escape must not depend on the terminal's advertised depth.
    for colorterm in [None, Some("truecolor"), Some("xterm-256color")] {
        let _env = EnvGuard::new(&[
            (DEBUG, Some("*")),
            (DEBUG_LEVEL, Some("DEBUG")),
            (DEBUG_COLOR, Some("")),
            ("COLORTERM", colorterm),
        ]);
        let buffer = MemorySink::new();

        let logger = Logger::builder("test").sink(buffer.sink()).build().unwrap();
        logger.info("Hello");

        assert_eq!(
            buffer.contents(),
            "\x1b[38;2;9;143;107mtest\x1b[0m [INFO] Hello \x1b[38;2;9;143;107m0ms\x1b[0m",
            "COLORTERM={:?}",
            colorterm
        );
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_pattern_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _env = debug_env("*", "DEBUG");
    env::set_var(DEBUG, OsStr::from_bytes(b"app:\xff*"));

    let err = Logger::new("app:db").unwrap_err();
    assert!(matches!(err, LoggerError::EnvNotUnicode { ref name, .. } if name == DEBUG));
}

#[test]
#[serial]
fn test_file_sink() {
    let _env = debug_env("*", "INFO");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("debug.log");

    let sink = Sink::file(&log_file).expect("Failed to open log file");
    let logger = Logger::builder("file").sink(sink).build().unwrap();
    logger.info("line one\n");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with("file [INFO] line one\n 0ms"));
}

#[test]
#[serial]
fn test_custom_formatter_receives_request() {
    let _env = debug_env("*", "DEBUG");

    struct Recording {
        seen: Arc<Mutex<Vec<(LogLevel, String, String)>>>,
    }

    impl Formatter for Recording {
        fn log(&self, request: &LogRequest<'_>) {
            self.seen.lock().push((
                request.level,
                request.namespace.to_string(),
                request.message.to_string(),
            ));
            let _ = request.sink.write_all(b"!");
        }
    }

    let seen = Arc::new(Mutex::new(Vec::new()));
    let buffer = MemorySink::new();
    let logger = Logger::builder("custom")
        .formatter(Recording {
            seen: Arc::clone(&seen),
        })
        .sink(buffer.sink())
        .build()
        .unwrap();

    logger.warn("first");
    logger.child("kid").unwrap().error("second");

    let seen = seen.lock();
    assert_eq!(
        *seen,
        vec![
            (LogLevel::Warn, "custom".to_string(), "first".to_string()),
            (LogLevel::Error, "custom:kid".to_string(), "second".to_string()),
        ]
    );
    assert_eq!(buffer.contents(), "!!");
}

#[test]
#[serial]
fn test_failing_sink_is_not_observed() {
    let _env = debug_env("*", "DEBUG");

    struct BrokenPipe;

    impl std::io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let logger = Logger::builder("broken")
        .sink(Sink::from_writer(BrokenPipe))
        .build()
        .unwrap();

    logger.error("dropped");
    logger.error("dropped again");
    assert!(logger.has_emitted());
}
