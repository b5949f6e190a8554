/*!
 * Directory scanner: discovers subtitle files under a root directory,
 * parses them through the registry, and aggregates a flat entry corpus.
 *
 * Per-file parse failures are logged and skipped so one malformed file
 * never aborts indexing a whole collection. Progress is emitted through a
 * caller-supplied callback as a side channel.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;
use futures::future::join_all;
use log::{debug, info, warn};
use parking_lot::Mutex;
use walkdir::{DirEntry, WalkDir};

use crate::errors::SubtitleError;
use crate::parsers::ParserRegistry;
use crate::subtitle::SubtitleEntry;

/// Directory names with these suffixes are opaque bundles, not folders to
/// descend into
const PACKAGE_DIR_EXTENSIONS: &[&str] = &["app", "bundle", "framework"];

// @struct: Progress snapshot emitted while a scan runs
#[derive(Debug, Clone)]
pub struct ScanProgress {
    // @field: Monotonically increasing fraction in [0, 1]
    pub fraction: f64,

    // @field: Human-readable status line
    pub status: String,
}

/// Scans a directory tree for subtitle files and parses them into a corpus
pub struct DirectoryScanner {
    registry: Arc<ParserRegistry>,
}

impl DirectoryScanner {
    // @creates: Scanner backed by the default parser registry
    pub fn new() -> Self {
        DirectoryScanner {
            registry: Arc::new(ParserRegistry::new()),
        }
    }

    /// Check that a path exists, is a directory, and can be enumerated
    pub fn validate_directory(path: &Path) -> bool {
        path.is_dir() && std::fs::read_dir(path).is_ok()
    }

    /// Scan the tree under `root`, returning every entry parsed from every
    /// discovered subtitle file, concatenated in discovery order.
    ///
    /// Files are parsed concurrently on blocking tasks; the merge preserves
    /// discovery order. `progress` receives status updates as files finish.
    pub async fn scan<F>(
        &self,
        root: &Path,
        progress: F,
    ) -> Result<Vec<SubtitleEntry>, SubtitleError>
    where
        F: Fn(ScanProgress) + Send + Sync + 'static,
    {
        if !root.is_dir() {
            return Err(SubtitleError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a scannable directory: {:?}", root),
            )));
        }

        progress(ScanProgress {
            fraction: 0.0,
            status: "Scanning directory...".to_string(),
        });

        let files = self.find_subtitle_files(root);
        let total = files.len();
        info!("Found {} subtitle file(s) under {:?}", total, root);

        progress(ScanProgress {
            fraction: 0.0,
            status: format!("Found {} subtitle file(s), parsing...", total),
        });

        if files.is_empty() {
            progress(ScanProgress {
                fraction: 1.0,
                status: "Scan complete, 0 entries".to_string(),
            });
            return Ok(Vec::new());
        }

        // Completed-file counter shared across tasks; the fraction is derived
        // from it under the lock so concurrent completions stay monotonic.
        let tracker = Arc::new(Mutex::new((0usize, progress)));

        let tasks: Vec<_> = files
            .into_iter()
            .map(|file| {
                let registry = Arc::clone(&self.registry);
                let tracker = Arc::clone(&tracker);
                tokio::task::spawn_blocking(move || {
                    let parsed = registry.parse(&file);

                    let mut guard = tracker.lock();
                    guard.0 += 1;
                    let done = guard.0;
                    let file_name = file
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_default();
                    (guard.1)(ScanProgress {
                        fraction: done as f64 / total as f64,
                        status: format!("Parsed: {}", file_name),
                    });
                    drop(guard);

                    (file, parsed)
                })
            })
            .collect();

        // join_all keeps discovery order regardless of completion order
        let mut entries = Vec::new();
        for joined in join_all(tasks).await {
            let (file, parsed) = joined
                .map_err(|e| {
                    SubtitleError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
                })?;
            match parsed {
                Ok(mut file_entries) => entries.append(&mut file_entries),
                Err(e) => warn!("Failed to parse subtitle file {:?}: {}", file, e),
            }
        }

        let guard = tracker.lock();
        (guard.1)(ScanProgress {
            fraction: 1.0,
            status: format!("Scan complete, {} entries", entries.len()),
        });

        Ok(entries)
    }

    /// Parse a single subtitle file directly. Unlike `scan`, failures here
    /// are hard errors.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        self.registry.parse(path)
    }

    /// Recursively discover subtitle files, skipping hidden entries and
    /// package-style directories
    fn find_subtitle_files(&self, root: &Path) -> Vec<PathBuf> {
        let extensions = self.registry.supported_extensions();

        WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry) && !is_package_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .map(|ext| {
                        let ext = ext.to_string_lossy().to_lowercase();
                        extensions.contains(&ext.as_str())
                    })
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

fn is_package_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .path()
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                PACKAGE_DIR_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
}
