//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use log_facade::prelude::*;
//! use log_facade::info;
//!
//! let logger = Logger::try_new(Vec::new()).unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// ```
/// # use log_facade::prelude::*;
/// # let logger = Logger::try_new(Vec::new()).unwrap();
/// use log_facade::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// Build a [`LoggerOption`](crate::LoggerOption) that attaches the
/// current call site, including the enclosing function name, as fields.
///
/// ```
/// use log_facade::{runtime_context, Logger};
///
/// let logger = Logger::try_new(vec![runtime_context!()]).unwrap();
/// ```
#[macro_export]
macro_rules! runtime_context {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: &T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __name_of(&__here).trim_end_matches("::__here");
        $crate::LoggerOption::runtime_context_named(name)
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::try_new(Vec::new()).unwrap();
        log!(logger, Level::Info, "Test message");
        log!(logger, Level::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_leveled_macros() {
        let logger = Logger::try_new(Vec::new()).unwrap();
        logger.set_level(Level::Trace);
        trace!(logger, "Trace message");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_runtime_context_macro_captures_function() {
        use parking_lot::Mutex;
        use std::io::Write;
        use std::sync::Arc;

        #[derive(Clone, Default)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);

        impl Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buf = SharedBuf::default();
        let logger = Logger::try_new(vec![
            crate::LoggerOption::output(buf.clone()),
            runtime_context!(),
        ])
        .unwrap();
        logger.info("decorated");

        let contents = String::from_utf8_lossy(&buf.0.lock()).into_owned();
        assert!(contents.contains("file=macros.rs"));
        assert!(contents.contains("line="));
        assert!(contents.contains("func=test_runtime_context_macro_captures_function"));
    }
}
