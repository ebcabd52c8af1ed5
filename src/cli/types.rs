use thiserror::Error;

use crate::{PadburyError, config_store::StoreError, settings::SettingsError};

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context to tell the user what went wrong
/// without a backtrace.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when the argument count doesn't match the command's
    /// metadata or an argument can't be parsed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The preference store rejected the operation.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A service the command depends on failed, such as the async runtime
    /// or an output surface.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<StoreError> for CliError {
    fn from(error: StoreError) -> Self {
        CliError::ConfigError(error.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(error: SettingsError) -> Self {
        match error {
            SettingsError::UnknownControl(_) | SettingsError::InvalidValue { .. } => {
                CliError::InvalidArguments(error.to_string())
            }
            SettingsError::Store(error) => error.into(),
        }
    }
}

impl From<PadburyError> for CliError {
    fn from(error: PadburyError) -> Self {
        CliError::ServiceError(error.to_string())
    }
}

/// Type alias for command execution results.
///
/// Commands return their output as a string, printed by the binary.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives argument count validation and help generation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "key", "value", "output").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument, shown in help text.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A boolean value (on/off, true/false, yes/no, 1/0).
    Boolean,

    /// A file system path.
    Path,

    /// A preference key or key pattern.
    Key,
}

impl ArgType {
    /// Short label shown in help text.
    pub fn label(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::Boolean => "bool",
            ArgType::Path => "path",
            ArgType::Key => "key",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// The single source of truth for a command's identity, arguments, usage
/// examples and category.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "run").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "screen").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, store failures,
    /// surface failures and I/O errors.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
