use std::sync::Arc;

use crate::config_store::PreferenceStore;

use super::{
    CliError, CommandRegistry,
    formatting::{format_category, format_command, format_description, format_header, format_usage},
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    ///
    /// # Arguments
    /// * `store` - Preference store shared by every command
    pub fn new(store: PreferenceStore) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(store));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` (or no category at all) prints the command overview; a category
    /// without a command prints that category's commands.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("" | "help" | "--help" | "-h", _) => Ok(self.help()),
            (category, "" | "help" | "--help" | "-h") => self.category_help(category),
            _ => self.registry.execute(category, command_name, args),
        }
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every category and command.
    pub fn help(&self) -> String {
        let mut lines = vec![
            format_header("padbury - a fullscreen clock"),
            String::new(),
            format!("Usage: {}", format_usage("padbury <category> <command> [args...]")),
            String::new(),
        ];

        for (category, _) in self.list_all() {
            lines.push(format_category(&category));
            for metadata in self.registry.category_metadata(&category) {
                lines.push(format!(
                    "  {:<10} {}",
                    format_command(&metadata.name),
                    format_description(&metadata.description)
                ));
            }
            lines.push(String::new());
        }

        lines.push(format_usage("Run 'padbury <category> help' for arguments and examples."));
        lines.join("\n")
    }

    fn category_help(&self, category: &str) -> Result<String, CliError> {
        let commands = self.registry.category_metadata(category);
        if commands.is_empty() {
            return Err(CliError::CommandNotFound(format!(
                "Failed to find category '{category}'"
            )));
        }

        let mut lines = vec![format_header(category), String::new()];

        for metadata in commands {
            let usage = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            lines.push(format!(
                "{} {}  {}",
                format_command(&metadata.name),
                usage,
                format_description(&metadata.description)
            ));

            for arg in &metadata.args {
                lines.push(format!(
                    "    {} ({}): {}",
                    arg.name,
                    arg.value_type.label(),
                    arg.description
                ));
            }

            for example in &metadata.examples {
                lines.push(format!("    {}", format_usage(example)));
            }

            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }
}
