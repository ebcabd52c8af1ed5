use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_toml_value},
        types::CommandMetadata,
    },
    config::ALL_KEYS,
    config_store::PreferenceStore,
};

/// Command printing every preference with its current value.
pub struct ListCommand {
    store: Arc<PreferenceStore>,
}

impl ListCommand {
    /// Creates a new ListCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let table = self.store.get_current().to_table();

        let mut lines: Vec<String> = ALL_KEYS
            .iter()
            .filter_map(|key| {
                table
                    .get(*key)
                    .map(|value| format!("{}: {}", key, format_toml_value(value)))
            })
            .collect();

        if let Some(path) = self.store.path() {
            lines.push(format_description(&format!("# {}", path.display())));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List every preference".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["padbury config list".to_string()],
        }
    }
}
