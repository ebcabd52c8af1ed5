use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;

/// Represents a file system event for a watched file.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created
    Created,
    /// File was removed
    Removed,
}

/// File system watcher for the preference file.
///
/// Watches the parent directory rather than the file itself so editors that
/// save by replacing the file are still picked up. Events for other files in
/// that directory are dropped.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched_files: Arc<RwLock<HashSet<PathBuf>>>,
}

impl FileWatcher {
    /// Creates a new file watcher and returns the watcher and event receiver.
    ///
    /// Uses an unbounded channel since file events are typically infrequent but bursty.
    ///
    /// # Errors
    /// Returns error if the underlying file system watcher cannot be initialized.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), notify::Error> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let watched_files: Arc<RwLock<HashSet<PathBuf>>> = Arc::default();
        let filter = Arc::clone(&watched_files);

        let watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            let Ok(watched) = filter.read() else {
                return;
            };

            for path in event.paths {
                if watched.contains(&path) {
                    let _ = event_tx.send(FileEvent {
                        path,
                        kind: kind.clone(),
                    });
                }
            }
        })?;

        Ok((
            Self {
                watcher,
                watched_files,
            },
            event_rx,
        ))
    }

    /// Adds a file to the watch list.
    ///
    /// The file does not need to exist yet, but its parent directory does.
    /// Watching an already watched file is a no-op.
    ///
    /// # Errors
    /// Returns error if the parent directory cannot be resolved or watched.
    pub fn watch_file(&mut self, path: impl AsRef<Path>) -> Result<(), notify::Error> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .canonicalize()?;

        let file_name = path
            .file_name()
            .ok_or_else(|| notify::Error::generic("watched path has no file name"))?;
        let resolved = parent.join(file_name);

        let mut watched = self
            .watched_files
            .write()
            .map_err(|_| notify::Error::generic("watch list lock poisoned"))?;

        if watched.contains(&resolved) {
            return Ok(());
        }

        self.watcher.watch(&parent, RecursiveMode::NonRecursive)?;
        watched.insert(resolved);

        Ok(())
    }

    /// Files currently being watched, resolved against their canonical parent.
    pub fn watched_files(&self) -> Vec<PathBuf> {
        self.watched_files
            .read()
            .map(|watched| watched.iter().cloned().collect())
            .unwrap_or_default()
    }
}
