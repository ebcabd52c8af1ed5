//! Preference management commands.
mod get;
mod list;
mod reset;
mod schema;
mod set;
mod watch;

use std::sync::Arc;

pub use get::GetCommand;
pub use list::ListCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;
pub use watch::WatchCommand;

use crate::{cli::CommandRegistry, config_store::PreferenceStore};

/// Registers all preference commands in the "config" category.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `store` - Shared preference store for the commands
pub fn register_commands(registry: &mut CommandRegistry, store: Arc<PreferenceStore>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(store.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(WatchCommand::new(store)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
