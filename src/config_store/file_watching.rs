use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{PreferenceStore, StoreError, file_watcher::FileWatcher};

const DEBOUNCE: Duration = Duration::from_millis(250);

impl PreferenceStore {
    /// Starts monitoring the preference file and reloads it on change.
    ///
    /// Bursts of file events are debounced into a single reload, which
    /// broadcasts one change per key that differs on disk. The watcher lives
    /// as long as the returned task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// * `StoreError::NoBackingFile` - If the store is in-memory only
    /// * `StoreError::FileWatcherInitError` - If the watcher cannot be created
    /// * `StoreError::FileWatchError` - If the file's directory cannot be watched
    pub fn start_file_watching(&self) -> Result<JoinHandle<()>, StoreError> {
        let path = self.path().ok_or(StoreError::NoBackingFile)?.to_path_buf();

        let (mut watcher, mut event_rx) =
            FileWatcher::new().map_err(|e| StoreError::FileWatcherInitError {
                details: e.to_string(),
            })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileWatchError {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }

        watcher
            .watch_file(&path)
            .map_err(|e| StoreError::FileWatchError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        info!("Watching {} for changes", path.display());
        let store = self.clone();

        Ok(tokio::spawn(async move {
            let _watcher = watcher;
            let mut pending = false;

            let debounce_sleep = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce_sleep);

            loop {
                tokio::select! {
                    event = event_rx.recv() => {
                        let Some(event) = event else {
                            break;
                        };
                        debug!(path = %event.path.display(), kind = ?event.kind, "Preference file event");
                        pending = true;
                        debounce_sleep.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
                    }

                    _ = &mut debounce_sleep, if pending => {
                        if let Err(e) = store.reload() {
                            error!("Failed to reload preferences: {}", e);
                        }
                        pending = false;
                    }
                }
            }
        }))
    }
}
