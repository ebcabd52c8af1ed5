//! Font catalog commands.
mod list;
mod weights;

pub use list::FontListCommand;
pub use weights::WeightsCommand;

use crate::cli::CommandRegistry;

/// Registers the font catalog commands in the "fonts" category.
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "fonts";

    registry.register_command(CATEGORY_NAME, Box::new(FontListCommand));
    registry.register_command(CATEGORY_NAME, Box::new(WeightsCommand));
}
