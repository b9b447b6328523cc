//! Level-routed file hook
//!
//! Routes Error records to one file and Info/Warn/Debug records to
//! another, one JSON object per line. Pre-existing files at either path
//! are removed when the hook is installed, so each process run starts
//! with fresh sink files.

use crate::core::{format, ConfigError, Hook, Level, LogEntry, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct LevelFileHook {
    info_path: PathBuf,
    info_writer: BufWriter<File>,
    error_writer: BufWriter<File>,
}

impl LevelFileHook {
    /// Remove any pre-existing files at the given paths and open fresh sinks
    pub fn install(info_path: impl Into<PathBuf>, error_path: impl Into<PathBuf>) -> Result<Self> {
        let info_path = info_path.into();
        let error_path = error_path.into();

        let info_writer = Self::open_fresh(&info_path)?;
        let error_writer = Self::open_fresh(&error_path)?;

        Ok(Self {
            info_path,
            info_writer,
            error_writer,
        })
    }

    fn open_fresh(path: &Path) -> Result<BufWriter<File>> {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::sink(path.to_string_lossy(), &e)),
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ConfigError::sink(path.to_string_lossy(), &e))?;
        Ok(BufWriter::new(file))
    }

    fn writer_for(&mut self, level: Level) -> &mut BufWriter<File> {
        match level {
            Level::Error => &mut self.error_writer,
            _ => &mut self.info_writer,
        }
    }
}

impl Hook for LevelFileHook {
    fn accepts(&self, level: Level) -> bool {
        matches!(
            level,
            Level::Info | Level::Warn | Level::Debug | Level::Error
        )
    }

    fn fire(&mut self, entry: &LogEntry) -> io::Result<()> {
        let record = format::render_json(entry, true);
        let writer = self.writer_for(entry.level);
        writeln!(writer, "{}", record)?;
        // Flushed per event so records survive an abrupt exit
        writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.info_writer.flush()?;
        self.error_writer.flush()
    }

    fn name(&self) -> &str {
        self.info_path.to_str().unwrap_or("file-hook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fields;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_install_removes_existing_files() -> Result<()> {
        let dir = tempdir().unwrap();
        let info = dir.path().join("out.log");
        let error = dir.path().join("err.log");

        fs::write(&info, "stale contents\n").unwrap();
        fs::write(&error, "stale contents\n").unwrap();

        let _hook = LevelFileHook::install(&info, &error)?;

        assert_eq!(fs::read_to_string(&info).unwrap(), "");
        assert_eq!(fs::read_to_string(&error).unwrap(), "");
        Ok(())
    }

    #[test]
    fn test_routing_by_level() -> Result<()> {
        let dir = tempdir().unwrap();
        let info = dir.path().join("out.log");
        let error = dir.path().join("err.log");

        let mut hook = LevelFileHook::install(&info, &error)?;

        hook.fire(&LogEntry::new(Level::Info, "started".to_string()))
            .unwrap();
        hook.fire(&LogEntry::new(Level::Warn, "careful".to_string()))
            .unwrap();
        hook.fire(&LogEntry::new(Level::Error, "broke".to_string()))
            .unwrap();

        let out = fs::read_to_string(&info).unwrap();
        let err = fs::read_to_string(&error).unwrap();

        assert_eq!(out.lines().count(), 2);
        assert_eq!(err.lines().count(), 1);
        assert!(out.contains("started"));
        assert!(out.contains("careful"));
        assert!(err.contains("broke"));
        Ok(())
    }

    #[test]
    fn test_records_are_json_with_timestamp() -> Result<()> {
        let dir = tempdir().unwrap();
        let info = dir.path().join("out.log");
        let error = dir.path().join("err.log");

        let mut hook = LevelFileHook::install(&info, &error)?;
        let entry = LogEntry::new(Level::Info, "payload".to_string())
            .with_fields(Fields::new().with_field("id", 9));
        hook.fire(&entry).unwrap();

        let line = fs::read_to_string(&info).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["msg"], "payload");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["id"], 9);

        // DD-MM-YYYY HH:MM:SS
        let time = parsed["time"].as_str().unwrap();
        assert_eq!(time.len(), 19);
        assert_eq!(&time[2..3], "-");
        assert_eq!(&time[5..6], "-");
        assert_eq!(&time[10..11], " ");
        Ok(())
    }

    #[test]
    fn test_install_fails_for_missing_directory() {
        let result = LevelFileHook::install("/nonexistent-dir/out.log", "/nonexistent-dir/err.log");
        assert!(matches!(result, Err(ConfigError::Sink { .. })));
    }

    #[test]
    fn test_accepted_levels() -> Result<()> {
        let dir = tempdir().unwrap();
        let hook = LevelFileHook::install(dir.path().join("o.log"), dir.path().join("e.log"))?;

        assert!(hook.accepts(Level::Info));
        assert!(hook.accepts(Level::Warn));
        assert!(hook.accepts(Level::Debug));
        assert!(hook.accepts(Level::Error));
        assert!(!hook.accepts(Level::Trace));
        assert!(!hook.accepts(Level::Fatal));
        Ok(())
    }
}
