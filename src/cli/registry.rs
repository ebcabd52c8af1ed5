use std::{collections::HashMap, sync::Arc};

use crate::config_store::PreferenceStore;

use super::{
    CliError, Command,
    commands::{config, fonts, screen},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── config
/// │   ├── get
/// │   ├── list
/// │   ├── reset
/// │   ├── schema
/// │   ├── set
/// │   └── watch
/// ├── fonts
/// │   ├── list
/// │   └── weights
/// └── screen
///     ├── run
///     └── snapshot
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    store: Arc<PreferenceStore>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with `register_command`, or all at once with
    /// `register_all_commands`.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self {
            categories: HashMap::new(),
            store,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category; a command
    /// with the same name replaces the previous one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// doesn't exist, `CliError::InvalidArguments` if the argument count
    /// doesn't match. Other errors come from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{category} {command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Metadata of every command in a category, sorted by name.
    pub fn category_metadata(&self, category: &str) -> Vec<CommandMetadata> {
        let mut metadata: Vec<CommandMetadata> = self
            .categories
            .get(category)
            .map(|commands| commands.values().map(|command| command.metadata()).collect())
            .unwrap_or_default();

        metadata.sort_by(|a, b| a.name.cmp(&b.name));
        metadata
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers every built-in command in its category.
    pub fn register_all_commands(&mut self) {
        let store = self.store.clone();
        config::register_commands(self, store.clone());
        fonts::register_commands(self);
        screen::register_commands(self, store);
    }
}
