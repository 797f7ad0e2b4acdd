//! File scanner for discovering documents to index

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions the repository serves, lowercase without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "html", "json"];

/// Result of scanning a file
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Path relative to the document root
    pub relative_path: String,
    /// File size in bytes
    pub size: u64,
}

/// Recursive scanner over the document root.
///
/// Yields every regular file whose extension is in the allow-list,
/// following symlinks and skipping hidden entries. Files outside the
/// allow-list are silently skipped.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new scanner over `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Scanner {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan for all supported files
    pub fn scan(&self) -> impl Iterator<Item = ScanResult> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_supported(e.path()))
            .filter_map(|e| {
                let size = e.metadata().ok()?.len();
                let relative_path = e
                    .path()
                    .strip_prefix(&self.root)
                    .ok()?
                    .to_string_lossy()
                    .to_string();

                Some(ScanResult {
                    path: e.path().to_path_buf(),
                    relative_path,
                    size,
                })
            })
    }
}

/// Check a path against the extension allow-list (case-insensitive)
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}
