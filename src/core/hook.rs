//! Hook trait for secondary log destinations
//!
//! A hook is a sink fired in addition to the primary output, only for
//! records whose severity it accepts. Delivery failures are io errors;
//! the engine reports them to stderr rather than surfacing them to the
//! caller, since the emit path is infallible by contract.

use super::{log_entry::LogEntry, log_level::Level};
use std::io;

pub trait Hook: Send {
    /// Whether records at `level` should be delivered to this hook
    fn accepts(&self, level: Level) -> bool;
    fn fire(&mut self, entry: &LogEntry) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    fn name(&self) -> &str;
}
