use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    fonts::FontFamily,
};

/// Command listing the font families offered by the settings panel.
pub struct FontListCommand;

impl Command for FontListCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let plain_only = match args.first().map(String::as_str) {
            None => false,
            Some("plain") => true,
            Some(other) => {
                return Err(CliError::InvalidArguments(format!(
                    "Unknown filter '{other}', expected 'plain'"
                )));
            }
        };

        let mut lines = vec![format_subheader("Font families")];
        lines.extend(FontFamily::selectable(plain_only).into_iter().map(|family| {
            let kind = if family.is_plain() { "plain" } else { "decorative" };
            format!("  {} {}", family.name(), format_description(&format!("({kind})")))
        }));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List font families".to_string(),
            category: "fonts".to_string(),
            args: vec![CommandArg {
                name: "filter".to_string(),
                description: "'plain' to only list plain families".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "padbury fonts list".to_string(),
                "padbury fonts list plain".to_string(),
            ],
        }
    }
}
