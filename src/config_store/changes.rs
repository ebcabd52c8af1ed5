use std::{path::PathBuf, time::Instant};

use toml::Value;

/// Where a preference change originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Written through the store API (settings panel, CLI)
    Api,
    /// The preference file was edited on disk
    FileEdit,
    /// All preferences were restored to their defaults
    Reset,
}

/// Represents a single preference change.
///
/// Captures which key changed, its previous and new values, and when the
/// change happened.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceChange {
    /// Preference key (e.g. "show_seconds").
    pub key: String,
    /// The previous value of the field, if available.
    pub old_value: Option<Value>,
    /// The new value of the field.
    pub new_value: Value,
    /// What triggered the change.
    pub source: ChangeSource,
    /// Timestamp when the change occurred.
    pub timestamp: Instant,
}

/// Errors that can occur during preference store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key does not name a preference.
    #[error("unknown preference '{0}'")]
    UnknownKey(String),

    /// The value type does not match the expected type for the field.
    #[error("type mismatch at {key}: expected {expected_type}, got {actual_value}")]
    TypeMismatch {
        /// The key where the type mismatch occurred.
        key: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The actual value that was provided.
        actual_value: Value,
    },

    /// Error occurred while persisting preferences to disk
    #[error("failed to persist preferences to '{path}': {details}")]
    PersistenceError {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Failed to initialize file watcher
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInitError {
        /// File watcher initialization error details
        details: String,
    },

    /// Error occurred while watching a specific file
    #[error("file watcher error for '{path}': {details}")]
    FileWatchError {
        /// Path being watched when error occurred
        path: PathBuf,
        /// File watcher error details
        details: String,
    },

    /// The store has no backing file for an operation that needs one
    #[error("preference store is not backed by a file")]
    NoBackingFile,

    /// Error occurred while acquiring locks for thread-safe access
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Type of lock that failed (read, write)
        lock_type: String,
        /// Lock error details
        details: String,
    },
}

impl PreferenceChange {
    /// Creates a new preference change.
    ///
    /// # Arguments
    ///
    /// * `key` - The preference key
    /// * `old_value` - The previous value of the field (if known)
    /// * `new_value` - The new value of the field
    /// * `source` - What triggered the change
    pub fn new(key: String, old_value: Option<Value>, new_value: Value, source: ChangeSource) -> Self {
        Self {
            key,
            old_value,
            new_value,
            source,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TypeMismatch` if the value cannot be deserialized
    /// into the requested type.
    pub fn extract<T>(&self) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        T::deserialize(self.new_value.clone()).map_err(|_| StoreError::TypeMismatch {
            key: self.key.clone(),
            expected_type: std::any::type_name::<T>(),
            actual_value: self.new_value.clone(),
        })
    }
}
