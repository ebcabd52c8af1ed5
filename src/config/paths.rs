use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for managing preference and log file paths
///
/// Follows the XDG Base Directory specification for the preference file.
pub struct ConfigPaths;

impl ConfigPaths {
    /// File name of the preference file inside the config directory
    pub const PREFERENCES_FILE: &'static str = "preferences.toml";

    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "padbury" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("padbury"))
    }

    /// Returns the application data directory path
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if HOME environment variable is not set or directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let data_dir = env::var("HOME")
            .map(|home| format!("{home}/.padbury"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(data_dir);

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the preference file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn preferences_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join(Self::PREFERENCES_FILE))
    }
}
