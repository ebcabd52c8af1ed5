use std::{
    path::{Path, PathBuf},
    sync::{
        Arc, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use futures::Stream;
use serde::Deserialize;
use tokio::sync::broadcast;
use toml::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::{
        ALL_KEYS, Appearance, ConfigPaths, KEY_APPEARANCE, KEY_FONT_FAMILY, KEY_FONT_WEIGHT,
        Preferences,
    },
    fonts::{FontFamily, FontWeight},
};

use super::{ChangeSource, PreferenceChange, StoreError, diff::diff_preferences, path_ops::key_matches};

/// A shared preference store that persists every write and broadcasts changes.
///
/// Cloning the store yields another handle onto the same preferences, so the
/// renderer and the settings panel observe the same state. Each successful
/// write bumps [`PreferenceStore::revision`].
#[derive(Clone)]
pub struct PreferenceStore {
    prefs: Arc<RwLock<Preferences>>,
    path: Option<Arc<PathBuf>>,
    revision: Arc<AtomicU64>,
    change_sender: broadcast::Sender<PreferenceChange>,
}

impl PreferenceStore {
    /// Creates an in-memory store with default preferences and no backing file.
    pub fn with_defaults() -> Self {
        Self::from_parts(Preferences::default(), None)
    }

    /// Loads the store from the default preference file.
    ///
    /// # Errors
    /// * `StoreError::PersistenceError` - If the preference path cannot be determined
    pub fn load() -> Result<Self, StoreError> {
        let path = ConfigPaths::preferences_file().map_err(|e| StoreError::PersistenceError {
            path: PathBuf::from(ConfigPaths::PREFERENCES_FILE),
            details: e.to_string(),
        })?;

        Ok(Self::load_from(path))
    }

    /// Loads the store from `path`.
    ///
    /// A missing or unreadable file yields default preferences; the file is
    /// only written on the first change.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let prefs = read_preferences(&path);

        info!("Preferences loaded");
        Self::from_parts(prefs, Some(path))
    }

    fn from_parts(prefs: Preferences, path: Option<PathBuf>) -> Self {
        let (change_sender, _) = broadcast::channel(64);

        Self {
            prefs: Arc::new(RwLock::new(prefs)),
            path: path.map(Arc::new),
            revision: Arc::new(AtomicU64::new(0)),
            change_sender,
        }
    }

    /// Path of the backing preference file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(PathBuf::as_path)
    }

    /// Number of changes applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Returns a clone of the current preferences, handling poisoned locks gracefully
    pub fn get_current(&self) -> Preferences {
        match self.prefs.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Applies `mutate` to the preferences, persists them and broadcasts one
    /// change per modified key.
    ///
    /// Writes that leave the preferences unchanged are not persisted and do
    /// not bump the revision. A write that cannot be persisted leaves the
    /// preferences as they were.
    ///
    /// # Errors
    /// * `StoreError::LockError` - If the write lock cannot be acquired
    /// * `StoreError::PersistenceError` - If the preference file cannot be written
    pub fn update(&self, mutate: impl FnOnce(&mut Preferences)) -> Result<(), StoreError> {
        self.update_with_source(ChangeSource::Api, mutate)
    }

    fn update_with_source(
        &self,
        source: ChangeSource,
        mutate: impl FnOnce(&mut Preferences),
    ) -> Result<(), StoreError> {
        let mut prefs = self.prefs.write().map_err(|e| StoreError::LockError {
            lock_type: "write".to_string(),
            details: e.to_string(),
        })?;

        let mut candidate = prefs.clone();
        mutate(&mut candidate);

        let changes = diff_preferences(&prefs, &candidate, source);
        if changes.is_empty() {
            return Ok(());
        }

        // The in-memory preferences only move once the file holds them.
        if source != ChangeSource::FileEdit {
            self.persist(&candidate)?;
        }

        *prefs = candidate;
        self.revision.fetch_add(1, Ordering::SeqCst);
        drop(prefs);

        for change in changes {
            debug!(key = %change.key, source = ?change.source, "Preference changed");
            self.broadcast_change(change);
        }

        Ok(())
    }

    /// Sends a change to every subscriber; a store without subscribers drops it.
    pub(super) fn broadcast_change(&self, change: PreferenceChange) {
        let _ = self.change_sender.send(change);
    }

    /// Writes the current preferences to the backing file, if there is one.
    ///
    /// # Errors
    /// * `StoreError::PersistenceError` - If the file cannot be written
    pub fn save(&self) -> Result<(), StoreError> {
        self.persist(&self.get_current())
    }

    fn persist(&self, prefs: &Preferences) -> Result<(), StoreError> {
        let Some(path) = self.path() else {
            return Ok(());
        };

        prefs
            .save_to_file(path)
            .map_err(|e| StoreError::PersistenceError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })
    }

    /// Re-reads the backing file and broadcasts what changed on disk.
    ///
    /// # Errors
    /// * `StoreError::NoBackingFile` - If the store is in-memory only
    /// * `StoreError::LockError` - If the write lock cannot be acquired
    pub fn reload(&self) -> Result<(), StoreError> {
        let path = self.path().ok_or(StoreError::NoBackingFile)?.to_path_buf();
        let fresh = read_preferences(&path);

        self.update_with_source(ChangeSource::FileEdit, move |prefs| *prefs = fresh)
    }

    /// Restores every preference to its default and persists the result.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn reset(&self) -> Result<(), StoreError> {
        self.update_with_source(ChangeSource::Reset, |prefs| *prefs = Preferences::default())
    }

    /// Retrieves a preference as a TOML value.
    ///
    /// # Errors
    /// * `StoreError::UnknownKey` - If `key` does not name a preference
    pub fn get_by_path(&self, key: &str) -> Result<Value, StoreError> {
        self.get_current()
            .to_table()
            .remove(key)
            .ok_or_else(|| StoreError::UnknownKey(key.to_string()))
    }

    /// Sets a preference from a TOML value, persists it and broadcasts the change.
    ///
    /// Unlike reading the file, writing through this path rejects values of
    /// the wrong type instead of silently defaulting them.
    ///
    /// # Errors
    /// * `StoreError::UnknownKey` - If `key` does not name a preference
    /// * `StoreError::TypeMismatch` - If `value` has the wrong type for `key`
    /// * `StoreError::PersistenceError` - If the preference file cannot be written
    #[instrument(skip(self, value), fields(key = %key))]
    pub fn set_by_path(&self, key: &str, value: Value) -> Result<(), StoreError> {
        if !ALL_KEYS.contains(&key) {
            return Err(StoreError::UnknownKey(key.to_string()));
        }

        let mismatch = |value: Value| StoreError::TypeMismatch {
            key: key.to_string(),
            expected_type: expected_type(key),
            actual_value: value,
        };

        if !names_known_font(key, &value) {
            return Err(mismatch(value));
        }

        let mut table = self.get_current().to_table();
        table.insert(key.to_string(), value.clone());

        let candidate =
            Preferences::deserialize(Value::Table(table)).map_err(|_| mismatch(value))?;

        self.update(move |prefs| *prefs = candidate)
    }

    /// Creates a stream that yields changes whose key matches `pattern`
    ///
    /// # Arguments
    /// * `pattern` - A key pattern (supports "*" wildcards)
    pub fn subscribe_to_path(&self, pattern: &str) -> impl Stream<Item = PreferenceChange> + use<> {
        let pattern = pattern.to_string();
        let receiver = self.change_sender.subscribe();

        futures::stream::unfold(receiver, move |mut receiver| {
            let pattern = pattern.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(change) => {
                            if key_matches(&change.key, &pattern) {
                                return Some((change, receiver));
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!("Change subscriber lagged, skipped {} changes", skipped);
                        }
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            }
        })
    }

    /// Current color theme.
    pub fn appearance(&self) -> Appearance {
        self.get_current().appearance
    }

    /// Sets the color theme.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_appearance(&self, appearance: Appearance) -> Result<(), StoreError> {
        self.update(|prefs| prefs.appearance = appearance)
    }

    /// Whether night time mode is enabled.
    pub fn night_time_mode(&self) -> bool {
        self.get_current().night_time_mode
    }

    /// Enables or disables night time mode.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_night_time_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.night_time_mode = enabled)
    }

    /// Whether the 12-hour clock with AM/PM is used.
    pub fn use_am_pm(&self) -> bool {
        self.get_current().use_am_pm
    }

    /// Switches between the 12-hour and the 24-hour clock.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_use_am_pm(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.use_am_pm = enabled)
    }

    /// Whether seconds are shown.
    pub fn show_seconds(&self) -> bool {
        self.get_current().show_seconds
    }

    /// Shows or hides seconds.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_show_seconds(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.show_seconds = enabled)
    }

    /// Whether fields are separated by colons.
    pub fn show_time_separators(&self) -> bool {
        self.get_current().show_time_separators
    }

    /// Uses colons or spaces between fields.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_show_time_separators(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.show_time_separators = enabled)
    }

    /// Configured font family.
    pub fn font_family(&self) -> FontFamily {
        self.get_current().font_family
    }

    /// Sets the font family.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_font_family(&self, family: FontFamily) -> Result<(), StoreError> {
        self.update(|prefs| prefs.font_family = family)
    }

    /// Configured font weight, as stored.
    pub fn font_weight(&self) -> FontWeight {
        self.get_current().font_weight
    }

    /// Sets the font weight.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_font_weight(&self, weight: FontWeight) -> Result<(), StoreError> {
        self.update(|prefs| prefs.font_weight = weight)
    }

    /// Whether the time is only drawn on the primary display.
    pub fn main_screen_only(&self) -> bool {
        self.get_current().main_screen_only
    }

    /// Restricts drawing to the primary display.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_main_screen_only(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.main_screen_only = enabled)
    }

    /// Whether only plain font families are offered.
    pub fn plain_fonts_only(&self) -> bool {
        self.get_current().plain_fonts_only
    }

    /// Restricts the family selector to plain families.
    ///
    /// # Errors
    /// Same as [`PreferenceStore::update`].
    pub fn set_plain_fonts_only(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(|prefs| prefs.plain_fonts_only = enabled)
    }
}

fn read_preferences(path: &Path) -> Preferences {
    if !path.exists() {
        debug!("No preference file, using defaults");
        return Preferences::default();
    }

    Preferences::load_from_file(path).unwrap_or_else(|e| {
        warn!("Unreadable preference file, using defaults: {}", e);
        Preferences::default()
    })
}

/// Font names are parsed leniently when read from disk; explicit writes
/// must name a catalog entry.
fn names_known_font(key: &str, value: &Value) -> bool {
    match (key, value.as_str()) {
        (KEY_FONT_FAMILY, Some(name)) => FontFamily::find(name).is_some(),
        (KEY_FONT_WEIGHT, Some(name)) => FontWeight::ALL.iter().any(|w| w.name() == name),
        _ => true,
    }
}

fn expected_type(key: &str) -> &'static str {
    match key {
        KEY_APPEARANCE => "one of \"dark\", \"light\", \"system\"",
        KEY_FONT_FAMILY => "font family name",
        KEY_FONT_WEIGHT => "font weight name",
        _ => "boolean",
    }
}
