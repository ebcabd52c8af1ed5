//! Padbury - a fullscreen clock for the terminal.
//!
//! `padbury screen run` draws the clock until interrupted; every other
//! command reads or changes the preferences and exits.

use std::{env, error::Error, fs, process};

use padbury::{
    cli::{CliService, formatting::format_error},
    config::ConfigPaths,
    config_store::PreferenceStore,
    tracing_config,
};
use tracing::{Level, info, instrument, span};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let runs_screen = matches!(
        (args.first().map(String::as_str), args.get(1).map(String::as_str)),
        (Some("screen"), Some("run"))
    );

    if runs_screen {
        tracing_config::init_with_file()?;
    } else {
        tracing_config::init_cli_mode()?;
    }

    let _span = span!(Level::INFO, "padbury").entered();

    ensure_config_directory()?;
    run_cli_command(&args)
}

/// Executes CLI commands through the CliService.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
///
/// # Errors
/// Returns error if the preference store cannot be located.
fn run_cli_command(args: &[String]) -> Result<(), Box<dyn Error>> {
    let store = PreferenceStore::load()?;
    let cli_service = CliService::new(store);

    let category = args.first().map(String::as_str).unwrap_or("help");
    let command = args.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

#[instrument]
fn ensure_config_directory() -> Result<(), Box<dyn Error>> {
    let config_dir = ConfigPaths::config_dir()?;
    if !config_dir.exists() {
        info!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir)?;
    }
    Ok(())
}
