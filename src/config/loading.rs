use std::{fs, path::Path};

use serde::Deserialize;
use toml::{Table, Value};
use tracing::{debug, warn};

use super::{Appearance, KEY_APPEARANCE, Preferences};
use crate::{PadburyError, Result};

/// Key written by older revisions that modelled the theme as a boolean.
const LEGACY_DARK_THEME_KEY: &str = "dark_theme";

const FILE_HEADER: &str = "# Padbury clock preferences\n";

impl Preferences {
    /// Loads preferences from a TOML file.
    ///
    /// Fields that are missing or hold a value of the wrong shape fall back
    /// to their defaults one by one; the rest of the file still applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or isn't valid TOML.
    pub fn load_from_file(path: &Path) -> Result<Preferences> {
        let content = fs::read_to_string(path).map_err(|e| PadburyError::io(e, path))?;
        let table: Table =
            toml::from_str(&content).map_err(|e| PadburyError::toml_parse(e, Some(path)))?;

        Ok(Self::from_table(table))
    }

    /// Parses preferences from TOML text with per-field fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` isn't valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Preferences> {
        let table: Table =
            toml::from_str(content).map_err(|e| PadburyError::toml_parse(e, None))?;

        Ok(Self::from_table(table))
    }

    /// Builds preferences from a parsed table, keeping every field that
    /// deserializes and defaulting the rest.
    pub fn from_table(mut table: Table) -> Preferences {
        migrate_legacy_keys(&mut table);

        let mut accepted = Self::default_table();

        for (key, value) in table {
            if !accepted.contains_key(&key) {
                debug!("Ignoring unknown preference '{}'", key);
                continue;
            }

            let mut candidate = accepted.clone();
            candidate.insert(key.clone(), value);

            match Preferences::deserialize(Value::Table(candidate.clone())) {
                Ok(_) => accepted = candidate,
                Err(e) => warn!("Invalid value for preference '{}', using default: {}", key, e),
            }
        }

        Preferences::deserialize(Value::Table(accepted)).unwrap_or_default()
    }

    /// Serializes the preferences into a TOML table.
    pub fn to_table(&self) -> Table {
        match Value::try_from(self) {
            Ok(Value::Table(table)) => table,
            _ => Table::new(),
        }
    }

    /// Writes the preferences to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PadburyError::io(e, parent))?;
        }

        let body = toml::to_string_pretty(self).map_err(|e| PadburyError::InvalidPreference {
            key: "*".to_string(),
            reason: e.to_string(),
        })?;

        fs::write(path, format!("{FILE_HEADER}{body}")).map_err(|e| PadburyError::io(e, path))
    }

    fn default_table() -> Table {
        Preferences::default().to_table()
    }
}

/// Maps the boolean `dark_theme` key onto `appearance` unless the file
/// already sets `appearance`.
fn migrate_legacy_keys(table: &mut Table) {
    let Some(legacy) = table.remove(LEGACY_DARK_THEME_KEY) else {
        return;
    };

    if table.contains_key(KEY_APPEARANCE) {
        return;
    }

    if let Value::Boolean(dark) = legacy {
        let appearance = if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        };
        debug!("Migrating legacy dark_theme={} to appearance={}", dark, appearance);
        table.insert(
            KEY_APPEARANCE.to_string(),
            Value::String(appearance.to_string()),
        );
    }
}
