use std::{sync::Arc, time::Duration};

use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::PreferenceStore,
    render::ClockRenderer,
    surface::TerminalSurface,
};

use super::parse_number;

const DEFAULT_FPS: f64 = 1.0;
const MAX_FPS: f64 = 60.0;

/// Command running the clock fullscreen in the terminal until interrupted.
///
/// Preference changes made elsewhere, e.g. with `padbury config set`, show
/// up on the next tick.
pub struct RunCommand {
    store: Arc<PreferenceStore>,
}

impl RunCommand {
    /// Creates a new RunCommand with the provided store.
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }
}

impl Command for RunCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let fps = parse_number("fps", args.first(), DEFAULT_FPS)?.min(MAX_FPS);
        let store = self.store.as_ref().clone();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::ServiceError(format!("Failed to create runtime: {e}")))?;

        runtime.block_on(async move {
            let _watcher = match store.start_file_watching() {
                Ok(handle) => Some(handle),
                Err(e) => {
                    warn!(error = %e, "Preference changes from other processes won't show");
                    None
                }
            };

            let mut renderer = ClockRenderer::new(store);
            let mut surface = TerminalSurface::stdout();

            let mut ticks = interval(Duration::from_secs_f64(1.0 / fps));
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            info!(fps, "Clock running");

            let result = loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        if let Err(e) = renderer.draw(&mut surface) {
                            break Err(e);
                        }
                    }
                    _ = tokio::signal::ctrl_c() => break Ok(()),
                }
            };

            surface.restore()?;
            info!("Clock stopped");
            result
        })?;

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "run".to_string(),
            description: "Run the clock in the terminal".to_string(),
            category: "screen".to_string(),
            args: vec![CommandArg {
                name: "fps".to_string(),
                description: "Frames per second, 1 by default".to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "padbury screen run".to_string(),
                "padbury screen run 4".to_string(),
            ],
        }
    }
}
