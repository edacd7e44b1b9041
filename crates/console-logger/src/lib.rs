//! Console Logger
//!
//! A `tracing` subscriber for browser apps. Every formatted event is
//! forwarded to the `console.*` method matching its level, so the
//! devtools filter works as expected. On native targets (tests, tooling)
//! lines go to stderr instead.

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime, MakeWriter};
use tracing_subscriber::prelude::*;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("global logger already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber.
///
/// `app_name` prefixes every line so output from several apps sharing one
/// devtools window stays distinguishable.
pub fn init_logger(app_name: &str, max_level: Level) -> Result<(), LoggerError> {
    let layer = fmt::layer()
        .with_writer(ConsoleMakeWriter::new(app_name))
        .with_timer(ChronoClock)
        .with_ansi(false)
        .with_target(true)
        .with_filter(LevelFilter::from_level(max_level));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

/// Local wall-clock timestamps; the default `SystemTime` timer panics on
/// `wasm32-unknown-unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoClock;

impl FormatTime for ChronoClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Browser console method an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    prefix: Arc<str>,
}

impl ConsoleMakeWriter {
    pub fn new(app_name: &str) -> Self {
        Self { prefix: Arc::from(app_name) }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.prefix.clone(), Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(self.prefix.clone(), *meta.level())
    }
}

/// Buffers one formatted event and emits it when dropped.
///
/// The fmt layer writes an event in several chunks; emitting on drop keeps
/// each event as a single console entry.
pub struct ConsoleWriter {
    prefix: Arc<str>,
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(prefix: Arc<str>, level: Level) -> Self {
        Self { prefix, level, buf: Vec::new() }
    }

    /// The buffered line with the app prefix, without trailing newline
    pub fn line(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        format!("[{}] {}", self.prefix, text.trim_end_matches(&['\n', '\r'][..]))
    }

    pub fn method(&self) -> ConsoleMethod {
        ConsoleMethod::for_level(self.level)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.method(), &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Info => web_sys::console::info_1(&value),
        ConsoleMethod::Debug => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_joins_chunks_into_one_line() {
        let make = ConsoleMakeWriter::new("Console");
        let mut writer = make.make_writer();
        writer.write_all(b"12:00:00.000  INFO ").unwrap();
        writer.write_all(b"app: loaded 3 structures\n").unwrap();

        assert_eq!(writer.line(), "[Console] 12:00:00.000  INFO app: loaded 3 structures");
        assert_eq!(writer.method(), ConsoleMethod::Info);
    }

    #[test]
    fn test_empty_writer_has_prefix_only() {
        let writer = ConsoleWriter::new(Arc::from("X"), Level::WARN);
        assert_eq!(writer.line(), "[X] ");
        assert_eq!(writer.method(), ConsoleMethod::Warn);
    }
}
