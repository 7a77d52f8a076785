//! Console Logger
//!
//! A `log` backend for browser apps. Records go to `console.log`,
//! `console.warn` or `console.error` depending on level; native builds
//! (tests, tooling) write to stderr instead.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards `log` records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Format a record as `[LEVEL target] message`
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        Level::Info => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name ("info", "debug", ...), falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, "workout_map::storage", "discarded blob");
        assert_eq!(line, "[WARN workout_map::storage] discarded blob");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_init_installs_global_logger() {
        init(LevelFilter::Debug).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::log_enabled!(target: "workout_map", Level::Debug));
        // a second install is refused
        assert!(init(LevelFilter::Info).is_err());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
