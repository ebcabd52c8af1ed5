//! Commands drawing the clock.
mod run;
mod snapshot;

use std::sync::Arc;

pub use run::RunCommand;
pub use snapshot::SnapshotCommand;

use crate::{
    cli::{CliError, CommandRegistry},
    config_store::PreferenceStore,
};

/// Registers the drawing commands in the "screen" category.
pub fn register_commands(registry: &mut CommandRegistry, store: Arc<PreferenceStore>) {
    const CATEGORY_NAME: &str = "screen";

    registry.register_command(CATEGORY_NAME, Box::new(RunCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SnapshotCommand::new(store)));
}

fn parse_number(name: &str, value: Option<&String>, default: f64) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Ok(default);
    };

    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && *number > 0.0)
        .ok_or_else(|| {
            CliError::InvalidArguments(format!("Expected a positive number for <{name}>, got '{value}'"))
        })
}
