//! # Log Facade
//!
//! A process-wide singleton logging facade configured through composable
//! options, with structured fields, level-routed file sinks, and
//! caller-context decoration.
//!
//! ## Features
//!
//! - **Singleton discipline**: at-most-once construction via
//!   [`Logger::get_or_create`]; a failed first construction is cached for
//!   the process lifetime
//! - **Composable options**: ordered configuration deltas folded into an
//!   immutable snapshot before the engine is built
//! - **Structured fields**: copy-on-extend views via [`Logger::with`]
//! - **File sinks**: Error records and Info/Warn/Debug records routed to
//!   separate JSON files
//!
//! ## Example
//!
//! ```
//! use log_facade::{Level, Logger, LoggerOption};
//!
//! let logger = Logger::get_or_create(vec![
//!     LoggerOption::level(Level::Debug),
//!     LoggerOption::field("service", "api"),
//! ])
//! .expect("logger construction");
//!
//! logger.with("request", "abc-123").debug("handling request");
//! ```

pub mod core;
pub mod macros;
pub mod options;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ConfigError, FieldValue, Fields, Level, Log, LogEntry, Logger, Result, TextFormat,
    };
    pub use crate::options::LoggerOption;
    pub use crate::sinks::LevelFileHook;
}

pub use crate::core::{
    Caller, ConfigError, Engine, FieldValue, Fields, Hook, Level, Log, LogEntry, Logger, Result,
    TextFormat, TIMESTAMP_PATTERN,
};
pub use options::LoggerOption;
pub use sinks::LevelFileHook;
