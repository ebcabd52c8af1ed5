use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::PreferenceStore,
    settings::SettingsPanel,
};

/// Command for changing a preference through the settings panel.
///
/// Going through the panel keeps the font selection consistent: switching
/// family writes back a weight the family offers, and `plain_fonts_only`
/// replaces a decorative family.
pub struct SetCommand {
    store: Arc<PreferenceStore>,
}

impl SetCommand {
    /// Creates a new SetCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'set' command".to_string())
        })?;

        let value = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;

        let mut panel = SettingsPanel::open(self.store.as_ref().clone())?;
        panel.set_control(key, value)?;

        let state = panel.state();
        Ok(format!(
            "Set '{}' to '{}' ({} {})",
            key, value, state.font_family, state.font_weight
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set a preference".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg {
                    name: "key".to_string(),
                    description: "Preference key, or twenty_four_hours".to_string(),
                    required: true,
                    value_type: ArgType::Key,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value: on/off for checkboxes, a listed name for selectors"
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "padbury config set night_time_mode on".to_string(),
                "padbury config set appearance System".to_string(),
                "padbury config set font_family \"Neue Helvetica (Padbury Original)\"".to_string(),
            ],
        }
    }
}
