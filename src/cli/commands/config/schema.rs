use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    docs::preferences_schema_json,
};

/// Command printing the JSON schema of the preference file.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        preferences_schema_json().map_err(|e| CliError::ServiceError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the preference file's JSON schema".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["padbury config schema > preferences.schema.json".to_string()],
        }
    }
}
