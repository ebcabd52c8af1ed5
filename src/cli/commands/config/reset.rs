use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Preferences,
    config_store::{PreferenceStore, StoreError},
};

/// Command restoring one or every preference to its default.
pub struct ResetCommand {
    store: Arc<PreferenceStore>,
}

impl ResetCommand {
    /// Creates a new ResetCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for ResetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let Some(key) = args.first() else {
            self.store.reset()?;
            return Ok("Reset every preference to its default".to_string());
        };

        let default = Preferences::default()
            .to_table()
            .remove(key.as_str())
            .ok_or_else(|| StoreError::UnknownKey(key.clone()))?;

        let shown = format_toml_value(&default);
        self.store.set_by_path(key, default)?;

        Ok(format!("Reset '{key}' to {shown}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Restore defaults".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "key".to_string(),
                description: "Preference to reset; every preference when omitted".to_string(),
                required: false,
                value_type: ArgType::Key,
            }],
            examples: vec![
                "padbury config reset".to_string(),
                "padbury config reset font_weight".to_string(),
            ],
        }
    }
}
