//! Core facade types and traits

pub mod engine;
pub mod error;
pub mod fields;
pub mod format;
pub mod hook;
pub mod log_entry;
pub mod log_level;
pub mod logger;

pub use engine::Engine;
pub use error::{ConfigError, Result};
pub use fields::{FieldValue, Fields};
pub use format::{TextFormat, TIMESTAMP_PATTERN};
pub use hook::Hook;
pub use log_entry::{Caller, LogEntry};
pub use log_level::Level;
pub use logger::{Log, Logger};
