//! Record rendering
//!
//! Provides the text renderer used by the primary output and the JSON
//! renderer used by file hooks. Text rendering is configured by
//! `TextFormat` (colors, timestamp, caller annotation); the JSON form is
//! fixed: one object per line with `time`, `level`, `msg`, optional
//! caller location, and every attached field.

use super::log_entry::LogEntry;
use colored::Colorize;

/// Timestamp pattern used whenever timestamps are rendered: `DD-MM-YYYY HH:MM:SS`
pub const TIMESTAMP_PATTERN: &str = "%d-%m-%Y %H:%M:%S";

/// Text formatter configuration for the primary output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Colorize the level tag
    pub colors: bool,
    /// Prefix each record with a timestamp
    pub timestamp: bool,
    /// Annotate each record with the call site (file basename and line)
    pub report_caller: bool,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            colors: true,
            timestamp: false,
            report_caller: false,
        }
    }
}

impl TextFormat {
    /// Enable timestamp and caller annotation together, the decorated
    /// form used for verbose levels and runtime-context logging.
    pub fn decorate(&mut self) {
        self.timestamp = true;
        self.report_caller = true;
    }

    /// Disable timestamp and caller annotation.
    pub fn plain(&mut self) {
        self.timestamp = false;
        self.report_caller = false;
    }

    /// Render a record as a single text line (without trailing newline)
    pub fn render(&self, entry: &LogEntry) -> String {
        let level_str = if self.colors {
            format!("{:5}", entry.level.to_str())
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level.to_str())
        };

        let mut line = String::new();
        if self.timestamp {
            line.push_str(&format!(
                "[{}] ",
                entry.timestamp.format(TIMESTAMP_PATTERN)
            ));
        }
        line.push_str(&format!("[{}]", level_str));

        if self.report_caller {
            if let Some(caller) = entry.caller {
                line.push_str(&format!(" [{}:{}]", short_file(caller.file), caller.line));
            }
        }

        line.push(' ');
        line.push_str(&entry.message);

        if !entry.fields.is_empty() {
            line.push(' ');
            line.push_str(&entry.fields.format_fields());
        }

        line
    }
}

/// Render a record as a single-line JSON object for file hooks
pub fn render_json(entry: &LogEntry, report_caller: bool) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "time".to_string(),
        serde_json::Value::String(entry.timestamp.format(TIMESTAMP_PATTERN).to_string()),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(entry.level.to_str().to_string()),
    );
    json_obj.insert(
        "msg".to_string(),
        serde_json::Value::String(entry.message.clone()),
    );

    if report_caller {
        if let Some(caller) = entry.caller {
            json_obj.insert(
                "file".to_string(),
                serde_json::Value::String(short_file(caller.file).to_string()),
            );
            json_obj.insert(
                "line".to_string(),
                serde_json::Value::Number(caller.line.into()),
            );
        }
    }

    for (key, value) in entry.fields.iter() {
        json_obj.insert(key.clone(), value.to_json_value());
    }

    serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
}

/// Strip the directory portion of a source path, keeping the basename
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
