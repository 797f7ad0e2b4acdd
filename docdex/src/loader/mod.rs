//! Bulk index construction at startup
//!
//! The loader walks the document root once, extracts each supported
//! file, and feeds the results into the store's index. Files that fail
//! extraction are logged and skipped so one corrupt document never
//! blocks the rest of the corpus.

use crate::extract::extract_file;
use crate::scanner::Scanner;
use crate::store::DocStore;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Supported files found under the root
    pub files_scanned: usize,
    /// Files successfully extracted and indexed
    pub files_loaded: usize,
    /// Files skipped because extraction failed
    pub errors: usize,
    /// Wall-clock time spent loading
    pub duration: Duration,
}

/// One-shot loader that populates a store's index.
pub struct Loader<'a> {
    store: &'a mut DocStore,
}

impl<'a> Loader<'a> {
    /// Create a loader for `store`
    pub fn new(store: &'a mut DocStore) -> Self {
        Loader { store }
    }

    /// Scan the document root and index everything extractable.
    pub fn load(&mut self) -> LoadStats {
        let started = Instant::now();
        let mut stats = LoadStats::default();

        let root = self.store.root().to_path_buf();
        let results: Vec<_> = Scanner::new(&root).scan().collect();

        for entry in results {
            stats.files_scanned += 1;

            match extract_file(&entry.path) {
                Ok(content) => {
                    self.store.insert_document(&entry.relative_path, content);
                    stats.files_loaded += 1;
                }
                Err(e) => {
                    warn!("skipping {}: {}", entry.relative_path, e);
                    stats.errors += 1;
                }
            }
        }

        stats.duration = started.elapsed();
        info!(
            "loaded {}/{} documents in {:?} ({} errors)",
            stats.files_loaded, stats.files_scanned, stats.duration, stats.errors
        );

        stats
    }
}
