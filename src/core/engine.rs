//! Underlying log-writing engine
//!
//! One engine instance is shared by reference across every logger view
//! derived via `with`. It owns the verbosity threshold, the text
//! formatter configuration, the primary output writer, and the hook
//! list. Mutating the threshold or formatter is visible to all views.

use super::format::TextFormat;
use super::hook::Hook;
use super::log_entry::LogEntry;
use super::log_level::Level;
use parking_lot::{Mutex, RwLock};
use std::io::Write;

pub struct Engine {
    level: RwLock<Level>,
    format: RwLock<TextFormat>,
    output: Mutex<Box<dyn Write + Send>>,
    hooks: Mutex<Vec<Box<dyn Hook>>>,
}

impl Engine {
    pub fn new(
        level: Level,
        format: TextFormat,
        output: Box<dyn Write + Send>,
        hooks: Vec<Box<dyn Hook>>,
    ) -> Self {
        Self {
            level: RwLock::new(level),
            format: RwLock::new(format),
            output: Mutex::new(output),
            hooks: Mutex::new(hooks),
        }
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn format(&self) -> TextFormat {
        self.format.read().clone()
    }

    pub fn set_format(&self, format: TextFormat) {
        *self.format.write() = format;
    }

    /// Whether a record at `level` passes the current threshold
    pub fn enabled(&self, level: Level) -> bool {
        *self.level.read() >= level
    }

    /// Render the record to the primary output and fire accepting hooks
    ///
    /// Write failures never reach the caller; they are reported to
    /// stderr so a broken destination cannot take down the host program.
    pub fn dispatch(&self, entry: &LogEntry) {
        let format = self.format.read().clone();
        let line = format.render(entry);

        {
            let mut output = self.output.lock();
            if let Err(e) = writeln!(output, "{}", line) {
                eprintln!("[LOGGER ERROR] primary output write failed: {}", e);
            }
        }

        let mut hooks = self.hooks.lock();
        for hook in hooks.iter_mut() {
            if !hook.accepts(entry.level) {
                continue;
            }
            if let Err(e) = hook.fire(entry) {
                eprintln!("[LOGGER ERROR] hook '{}' failed: {}", hook.name(), e);
            }
        }
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.output.lock().flush()?;
        let mut hooks = self.hooks.lock();
        for hook in hooks.iter_mut() {
            hook.flush()?;
        }
        Ok(())
    }
}
