use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::PreferenceStore,
};

/// Command for reading a single preference.
///
/// # Example Usage
///
/// ```bash
/// padbury config get show_seconds
/// padbury config get font_family
/// ```
pub struct GetCommand {
    store: Arc<PreferenceStore>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for GetCommand {
    /// Prints `key: value` for the requested preference.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no key argument is provided
    /// * `CliError::ConfigError` - If the key names no preference
    fn execute(&self, args: &[String]) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'get' command".to_string())
        })?;

        let value = self.store.get_by_path(key)?;

        Ok(format!("{}: {}", key, format_toml_value(&value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get a preference".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "key".to_string(),
                description: "Preference key (e.g., show_seconds)".to_string(),
                required: true,
                value_type: ArgType::Key,
            }],
            examples: vec![
                "padbury config get show_seconds".to_string(),
                "padbury config get font_family".to_string(),
            ],
        }
    }
}
