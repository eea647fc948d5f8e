//! Write destinations
//!
//! A [`Sink`] is a shared handle: cloning it (as child loggers do) keeps
//! writing to the same underlying stream.
//!
//! Records carry no trailing newline, so the line-buffered standard
//! streams would hold them back indefinitely. Console sinks flush after
//! every write.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct Sink {
    name: &'static str,
    flush_each_write: bool,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    fn with_name(name: &'static str, writer: impl Write + Send + 'static) -> Self {
        Self {
            name,
            flush_each_write: false,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Sink that flushes after every record.
    fn console(name: &'static str, writer: impl Write + Send + 'static) -> Self {
        Self {
            flush_each_write: true,
            ..Self::with_name(name, writer)
        }
    }

    /// Standard output; the default destination.
    pub fn stdout() -> Self {
        Self::console("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::console("stderr", io::stderr())
    }

    /// A sink that silently consumes all bytes.
    pub fn discard() -> Self {
        Self::with_name("discard", io::sink())
    }

    /// Wrap any writer.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self::with_name("writer", writer)
    }

    /// Append to the file at `path`, creating it if needed.
    ///
    /// Writes are buffered; call [`Sink::flush`] before reading the file.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self::with_name("file", BufWriter::new(file)))
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        if self.flush_each_write {
            writer.flush()?;
        }
        Ok(())
    }

    /// Whether every write is followed by a flush.
    pub fn flushes_each_write(&self) -> bool {
        self.flush_each_write
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    /// Whether both handles write to the same stream.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("flush_each_write", &self.flush_each_write)
            .finish()
    }
}
