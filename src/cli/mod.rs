//! Command-line interface for the clock.
//!
//! Provides a hierarchical command system for reading and changing
//! preferences, browsing the font catalog and running the clock. Commands
//! are organized by category and generate their help text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::config::{
    GetCommand, ListCommand, ResetCommand, SchemaCommand, SetCommand, WatchCommand,
};
pub use commands::fonts::{FontListCommand, WeightsCommand};
pub use commands::screen::{RunCommand, SnapshotCommand};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
