use std::sync::Arc;

use futures::StreamExt;
use tracing::warn;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_change,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::PreferenceStore,
};

/// Command streaming preference changes until interrupted.
///
/// Changes made by other processes are picked up by watching the
/// preference file.
pub struct WatchCommand {
    store: Arc<PreferenceStore>,
}

impl WatchCommand {
    /// Creates a new WatchCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for WatchCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let pattern = args.first().map(String::as_str).unwrap_or("*").to_string();

        println!("Watching changes matching '{pattern}'...");
        println!("Press Ctrl+C to stop");

        let store = self.store.clone();

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::ServiceError(format!("Failed to create runtime: {e}")))?;

        runtime.block_on(async move {
            let _watcher = match store.start_file_watching() {
                Ok(handle) => Some(handle),
                Err(e) => {
                    warn!(error = %e, "Not watching the preference file");
                    None
                }
            };

            let mut stream = Box::pin(store.subscribe_to_path(&pattern));

            loop {
                tokio::select! {
                    change = stream.next() => match change {
                        Some(change) => println!("{}", format_change(&change)),
                        None => break,
                    },
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
        });

        Ok("Watch ended".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Watch preference changes".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "pattern".to_string(),
                description: "Key pattern with * wildcards; every key when omitted".to_string(),
                required: false,
                value_type: ArgType::Key,
            }],
            examples: vec![
                "padbury config watch".to_string(),
                "padbury config watch show_*".to_string(),
            ],
        }
    }
}
