//! Shared preference store with change tracking.
//!
//! Provides a cloneable handle onto the preferences that persists every
//! write to `preferences.toml`, tracks a revision counter, broadcasts
//! per-key changes and can live-reload the file when it's edited elsewhere.

mod changes;
mod diff;
mod file_watcher;
mod file_watching;
mod path_ops;
mod store;


pub use changes::{ChangeSource, PreferenceChange, StoreError};
pub use diff::diff_preferences;
pub use file_watcher::{FileEvent, FileEventKind, FileWatcher};
pub use store::PreferenceStore;
