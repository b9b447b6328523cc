//! Composable configuration options
//!
//! Options are tagged configuration-delta records folded left-to-right
//! into a `LoggerConfig` snapshot before the engine is built. Folding is
//! ordering-sensitive: a later option wins on any shared property
//! (level, formatter, output), while field-extending options are purely
//! additive and only collide per key (last one wins).

use crate::core::format::short_file;
use crate::core::{Caller, ConfigError, FieldValue, Fields, Level, Result, TextFormat};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

/// Primary output destination chosen during construction
pub(crate) enum OutputTarget {
    /// Discard all bytes (the default)
    Null,
    Writer(Box<dyn Write + Send>),
}

/// Immutable configuration snapshot produced by folding options
pub(crate) struct LoggerConfig {
    pub level: Level,
    pub format: TextFormat,
    pub output: OutputTarget,
    pub fields: Fields,
    pub file_sinks: Option<(PathBuf, PathBuf)>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            format: TextFormat::default(),
            output: OutputTarget::Null,
            fields: Fields::new(),
            file_sinks: None,
        }
    }
}

/// A single configuration step for [`Logger`](crate::Logger) construction
pub struct LoggerOption(Opt);

enum Opt {
    DebugMode(bool),
    Level { level: Level, caller: Caller },
    Output(Box<dyn Write + Send>),
    FileSinks { info_path: PathBuf, error_path: PathBuf },
    Fields(Fields),
    Field(String, FieldValue),
    NullOutput,
    RuntimeContext {
        caller: Option<Caller>,
        function: Option<String>,
    },
}

impl LoggerOption {
    /// If `enabled`, raise verbosity to Debug and switch to the
    /// timestamped, caller-annotated format. No-op otherwise.
    pub fn debug_mode(enabled: bool) -> Self {
        Self(Opt::DebugMode(enabled))
    }

    /// Set the verbosity threshold. Debug and Trace also enable the
    /// timestamped, caller-annotated format; less verbose levels disable
    /// it. Trace additionally attaches this call site as fields.
    #[track_caller]
    pub fn level(level: Level) -> Self {
        Self(Opt::Level {
            level,
            caller: Caller::from_location(Location::caller()),
        })
    }

    /// Redirect the primary output to the given writer
    pub fn output(writer: impl Write + Send + 'static) -> Self {
        Self(Opt::Output(Box::new(writer)))
    }

    /// Install a level-routed file hook: Error records go to
    /// `error_path`, Info/Warn/Debug records to `info_path`. Additive to
    /// the primary output. Pre-existing files are removed.
    pub fn file_sinks(info_path: impl Into<PathBuf>, error_path: impl Into<PathBuf>) -> Self {
        Self(Opt::FileSinks {
            info_path: info_path.into(),
            error_path: error_path.into(),
        })
    }

    /// Extend the field set with all given pairs
    pub fn fields(fields: Fields) -> Self {
        Self(Opt::Fields(fields))
    }

    /// Extend the field set with one pair
    pub fn field(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self(Opt::Field(key.into(), value.into()))
    }

    /// Discard all primary output
    pub fn null_output() -> Self {
        Self(Opt::NullOutput)
    }

    /// Attach this call site (source file basename and line) as fields
    /// and switch to the timestamped, caller-annotated format.
    ///
    /// Use the [`runtime_context!`](crate::runtime_context) macro to also
    /// capture the enclosing function name.
    #[track_caller]
    pub fn runtime_context() -> Self {
        Self(Opt::RuntimeContext {
            caller: Some(Caller::from_location(Location::caller())),
            function: None,
        })
    }

    /// Variant of [`runtime_context`](Self::runtime_context) carrying the
    /// enclosing function's path; used by the `runtime_context!` macro.
    #[track_caller]
    pub fn runtime_context_named(function: &str) -> Self {
        Self(Opt::RuntimeContext {
            caller: Some(Caller::from_location(Location::caller())),
            function: Some(function.to_string()),
        })
    }

    /// Apply this option to a configuration snapshot
    pub(crate) fn apply(self, config: &mut LoggerConfig) -> Result<()> {
        match self.0 {
            Opt::DebugMode(false) => {}
            Opt::DebugMode(true) => {
                config.level = Level::Debug;
                config.format.decorate();
            }
            Opt::Level { level, caller } => {
                config.level = level;
                if level.is_verbose() {
                    config.format.decorate();
                } else {
                    config.format.plain();
                }
                if level == Level::Trace {
                    config.fields.insert("file", short_file(caller.file));
                    config.fields.insert("line", caller.line);
                }
            }
            Opt::Output(writer) => {
                config.output = OutputTarget::Writer(writer);
            }
            Opt::FileSinks {
                info_path,
                error_path,
            } => {
                config.file_sinks = Some((info_path, error_path));
            }
            Opt::Fields(fields) => {
                config.fields.extend(fields);
            }
            Opt::Field(key, value) => {
                config.fields.insert(key, value);
            }
            Opt::NullOutput => {
                config.output = OutputTarget::Null;
            }
            Opt::RuntimeContext { caller: None, .. } => {
                return Err(ConfigError::RuntimeContext);
            }
            Opt::RuntimeContext {
                caller: Some(caller),
                function,
            } => {
                config.fields.insert("file", short_file(caller.file));
                config.fields.insert("line", caller.line);
                if let Some(function) = function {
                    let base = function.rsplit("::").next().unwrap_or(&function);
                    config.fields.insert("func", base);
                }
                config.format.decorate();
            }
        }
        Ok(())
    }
}

/// Fold a sequence of options into a configuration snapshot
pub(crate) fn fold(options: impl IntoIterator<Item = LoggerOption>) -> Result<LoggerConfig> {
    let mut config = LoggerConfig::default();
    for option in options {
        option.apply(&mut config)?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = fold(Vec::new()).unwrap();
        assert_eq!(config.level, Level::Info);
        assert!(matches!(config.output, OutputTarget::Null));
        assert!(config.fields.is_empty());
        assert!(config.file_sinks.is_none());
        assert!(!config.format.timestamp);
        assert!(!config.format.report_caller);
        assert!(config.format.colors);
    }

    #[test]
    fn test_debug_mode_true_decorates() {
        let config = fold([LoggerOption::debug_mode(true)]).unwrap();
        assert_eq!(config.level, Level::Debug);
        assert!(config.format.timestamp);
        assert!(config.format.report_caller);
    }

    #[test]
    fn test_debug_mode_false_is_noop() {
        let config = fold([LoggerOption::debug_mode(false)]).unwrap();
        assert_eq!(config.level, Level::Info);
        assert!(!config.format.timestamp);
    }

    #[test]
    fn test_level_option_formats_by_verbosity() {
        let config = fold([LoggerOption::level(Level::Debug)]).unwrap();
        assert!(config.format.timestamp);
        assert!(config.format.report_caller);

        let config = fold([LoggerOption::level(Level::Warn)]).unwrap();
        assert_eq!(config.level, Level::Warn);
        assert!(!config.format.timestamp);
        assert!(!config.format.report_caller);
    }

    #[test]
    fn test_trace_level_attaches_call_site() {
        let config = fold([LoggerOption::level(Level::Trace)]).unwrap();
        assert_eq!(
            config.fields.get("file"),
            Some(&FieldValue::String("options.rs".into()))
        );
        assert!(config.fields.get("line").is_some());
    }

    #[test]
    fn test_last_level_option_wins() {
        let config = fold([
            LoggerOption::level(Level::Debug),
            LoggerOption::level(Level::Error),
        ])
        .unwrap();
        assert_eq!(config.level, Level::Error);
        // The later option also resets the decorated format
        assert!(!config.format.timestamp);
    }

    #[test]
    fn test_null_output_overrides_output() {
        let config = fold([
            LoggerOption::output(Vec::<u8>::new()),
            LoggerOption::null_output(),
        ])
        .unwrap();
        assert!(matches!(config.output, OutputTarget::Null));
    }

    #[test]
    fn test_field_options_are_additive() {
        let config = fold([
            LoggerOption::field("service", "api"),
            LoggerOption::fields(Fields::new().with_field("version", "1.0")),
            LoggerOption::field("service", "gateway"),
        ])
        .unwrap();

        assert_eq!(config.fields.len(), 2);
        assert_eq!(
            config.fields.get("service"),
            Some(&FieldValue::String("gateway".into()))
        );
        assert_eq!(
            config.fields.get("version"),
            Some(&FieldValue::String("1.0".into()))
        );
    }

    #[test]
    fn test_runtime_context_attaches_fields() {
        let config = fold([LoggerOption::runtime_context()]).unwrap();
        assert_eq!(
            config.fields.get("file"),
            Some(&FieldValue::String("options.rs".into()))
        );
        assert!(config.fields.get("line").is_some());
        assert!(config.format.timestamp);
        assert!(config.format.report_caller);
    }

    #[test]
    fn test_runtime_context_named_uses_function_basename() {
        let config =
            fold([LoggerOption::runtime_context_named("crate::module::handler")]).unwrap();
        assert_eq!(
            config.fields.get("func"),
            Some(&FieldValue::String("handler".into()))
        );
    }

    #[test]
    fn test_unresolved_runtime_context_fails() {
        let option = LoggerOption(Opt::RuntimeContext {
            caller: None,
            function: None,
        });
        let result = fold([option]);
        assert_eq!(result.err(), Some(ConfigError::RuntimeContext));
    }

    #[test]
    fn test_failing_option_aborts_fold() {
        let result = fold([
            LoggerOption::field("kept", 1),
            LoggerOption(Opt::RuntimeContext {
                caller: None,
                function: None,
            }),
            LoggerOption::level(Level::Trace),
        ]);
        assert!(result.is_err());
    }
}
