use std::{path::PathBuf, sync::Arc};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::PreferenceStore,
    render::ClockRenderer,
    surface::SvgSurface,
};

use super::parse_number;

const DEFAULT_WIDTH: f64 = 1920.0;
const DEFAULT_HEIGHT: f64 = 1080.0;

/// Command rendering the current time into an SVG file.
pub struct SnapshotCommand {
    store: Arc<PreferenceStore>,
}

impl SnapshotCommand {
    /// Creates a new SnapshotCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for SnapshotCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let output = args.first().map(PathBuf::from).ok_or_else(|| {
            CliError::InvalidArguments("Expected <output> argument for 'snapshot' command".to_string())
        })?;
        let width = parse_number("width", args.get(1), DEFAULT_WIDTH)?;
        let height = parse_number("height", args.get(2), DEFAULT_HEIGHT)?;

        let mut renderer = ClockRenderer::new(self.store.as_ref().clone());
        let mut surface = SvgSurface::new(width, height);

        renderer.draw(&mut surface)?;
        surface.write_to(&output)?;

        Ok(format!("Wrote {}x{} snapshot to {}", width, height, output.display()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "snapshot".to_string(),
            description: "Render the clock to an SVG file".to_string(),
            category: "screen".to_string(),
            args: vec![
                CommandArg {
                    name: "output".to_string(),
                    description: "SVG file to write".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "width".to_string(),
                    description: "Width in points, 1920 by default".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
                CommandArg {
                    name: "height".to_string(),
                    description: "Height in points, 1080 by default".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
            ],
            examples: vec![
                "padbury screen snapshot clock.svg".to_string(),
                "padbury screen snapshot clock.svg 2560 1440".to_string(),
            ],
        }
    }
}
