//! Formatting utilities for CLI output.
//!
//! Provides consistent formatting for preference values and styled help
//! text for CLI commands.

use toml::Value;

use crate::config_store::{ChangeSource, PreferenceChange};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a TOML value for human-readable CLI output.
///
/// Preferences are flat, so arrays and tables only show their size.
///
/// # Examples
///
/// ```
/// use padbury::cli::formatting::format_toml_value;
///
/// let value = toml::Value::String("Ultra Light".to_string());
/// assert_eq!(format_toml_value(&value), "\"Ultra Light\"");
///
/// let value = toml::Value::Boolean(true);
/// assert_eq!(format_toml_value(&value), "true");
/// ```
pub fn format_toml_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Array(arr) => format!("[{}]", arr.len()),
        Value::Table(table) => format!("{{{}}}", table.len()),
        _ => "complex_value".to_string(),
    }
}

/// One line describing a preference change, as printed by `config watch`.
pub fn format_change(change: &PreferenceChange) -> String {
    let source = match change.source {
        ChangeSource::Api => "api",
        ChangeSource::FileEdit => "file",
        ChangeSource::Reset => "reset",
    };

    let old = change
        .old_value
        .as_ref()
        .map(format_toml_value)
        .unwrap_or_else(|| "unset".to_string());

    format!(
        "{}: {} -> {} {}",
        change.key,
        old,
        format_toml_value(&change.new_value),
        format_description(&format!("({source})"))
    )
}
