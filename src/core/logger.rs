//! Logger facade and process-wide singleton
//!
//! A `Logger` is a cheap-to-clone view over one shared [`Engine`]: every
//! view derived via [`Logger::with`] carries its own field set but shares
//! the engine's level, formatter, output, and hooks. The singleton entry
//! point [`Logger::get_or_create`] constructs the engine at most once per
//! process and memoizes the result, including a failed one: a bad option
//! set on first access disables logging for the process lifetime.

use super::engine::Engine;
use super::error::Result;
use super::fields::{FieldValue, Fields};
use super::hook::Hook;
use super::log_entry::{Caller, LogEntry};
use super::log_level::Level;
use crate::options::{self, LoggerOption, OutputTarget};
use crate::sinks::LevelFileHook;
use std::io;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Result<Logger>> = OnceLock::new();

#[derive(Clone)]
pub struct Logger {
    engine: Arc<Engine>,
    fields: Fields,
}

impl Logger {
    /// Process-wide singleton accessor.
    ///
    /// The first caller's options configure the logger; every later call
    /// ignores its options and returns a clone of the cached result. If
    /// construction fails, the error is cached and returned forever —
    /// there is no retry.
    pub fn get_or_create(options: impl IntoIterator<Item = LoggerOption>) -> Result<Logger> {
        GLOBAL.get_or_init(|| Self::try_new(options)).clone()
    }

    /// Construct a logger without touching process-global state.
    ///
    /// Folds the options into a configuration snapshot, then builds the
    /// engine once from that snapshot. Useful for dependency injection
    /// and tests; `get_or_create` delegates here.
    pub fn try_new(options: impl IntoIterator<Item = LoggerOption>) -> Result<Logger> {
        let config = options::fold(options)?;

        let output: Box<dyn io::Write + Send> = match config.output {
            OutputTarget::Null => Box::new(io::sink()),
            OutputTarget::Writer(writer) => writer,
        };

        let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
        if let Some((info_path, error_path)) = config.file_sinks {
            hooks.push(Box::new(LevelFileHook::install(info_path, error_path)?));
        }

        let engine = Engine::new(config.level, config.format, output, hooks);
        Ok(Logger {
            engine: Arc::new(engine),
            fields: config.fields,
        })
    }

    /// Emit a record at the given severity if it passes the threshold
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.engine.enabled(level) {
            return;
        }
        let entry = LogEntry::new(level, message.into())
            .with_caller(Caller::from_location(Location::caller()))
            .with_fields(self.fields.clone());
        self.engine.dispatch(&entry);
    }

    #[track_caller]
    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Emit at Fatal severity, then terminate the process with exit code 1
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log(Level::Fatal, message);
        let _ = self.engine.flush();
        std::process::exit(1);
    }

    /// True iff the current level is Debug or Trace
    pub fn is_debug(&self) -> bool {
        self.engine.level().is_verbose()
    }

    pub fn level(&self) -> Level {
        self.engine.level()
    }

    /// Change the shared verbosity threshold; visible to all views
    pub fn set_level(&self, level: Level) {
        self.engine.set_level(level);
    }

    /// Derive a view with one additional field.
    ///
    /// The receiver's field set is never mutated; the new view shares the
    /// engine (level, output, formatter, hooks) with the receiver.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Logger {
        Logger {
            engine: Arc::clone(&self.engine),
            fields: self.fields.clone().with_field(key, value),
        }
    }

    /// Derive a view extended with all given fields
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Logger {
        let mut extended = self.fields.clone();
        extended.extend(fields);
        Logger {
            engine: Arc::clone(&self.engine),
            fields: extended,
        }
    }

    /// Flush the primary output and all hooks
    pub fn flush(&self) -> io::Result<()> {
        self.engine.flush()
    }

    /// Whether two views share the same underlying engine
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.engine, &b.engine)
    }
}

/// Capability interface consumed by application code.
///
/// Object-safe so test doubles can stand in for the real logger.
pub trait Log: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Emit at Fatal severity; the production implementation terminates
    /// the process afterwards
    fn fatal(&self, message: &str);

    fn is_debug(&self) -> bool;

    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Log>;

    fn set_level(&self, level: Level);
}

impl Log for Logger {
    #[track_caller]
    fn log(&self, level: Level, message: &str) {
        Logger::log(self, level, message);
    }

    fn fatal(&self, message: &str) {
        Logger::fatal(self, message)
    }

    fn is_debug(&self) -> bool {
        Logger::is_debug(self)
    }

    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Log> {
        Box::new(self.with(key, value))
    }

    fn set_level(&self, level: Level) {
        Logger::set_level(self, level);
    }
}
