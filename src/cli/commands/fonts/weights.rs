use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    fonts::FontFamily,
};

/// Command listing the weights a family offers.
pub struct WeightsCommand;

impl Command for WeightsCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <family> argument for 'weights' command".to_string())
        })?;

        let family = FontFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CliError::InvalidArguments(format!("Unknown font family '{name}'")))?;

        Ok(family
            .available_weights()
            .iter()
            .map(|weight| format!("{} ({})", weight.name(), family.face_name(*weight)))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "weights".to_string(),
            description: "List the weights of a font family".to_string(),
            category: "fonts".to_string(),
            args: vec![CommandArg {
                name: "family".to_string(),
                description: "Family display name".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec!["padbury fonts weights Futura".to_string()],
        }
    }
}
