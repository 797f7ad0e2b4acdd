//! Document store rooted at a directory
//!
//! Owns the canonicalized document root and the inverted index built
//! over it. All path-taking operations verify that the resolved path
//! stays inside the root before touching the filesystem; escaping
//! paths fail with `Error::AccessDenied`.

use crate::error::{Error, Result};
use crate::extract::extract_file;
use crate::index::InvertedIndex;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Default number of lines returned by a summary
pub const DEFAULT_SUMMARY_LINES: usize = 5;

/// Listing metadata for one indexed document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// File name without directories
    pub name: String,
    /// Path relative to the document root
    pub path: String,
    /// Content size in bytes
    pub size: usize,
    /// Lowercased extension tag (e.g. ".md"), empty if none
    pub file_type: String,
    /// Number of tokens in the content
    pub word_count: usize,
}

/// A document root plus the index built over it.
#[derive(Debug)]
pub struct DocStore {
    root: PathBuf,
    index: InvertedIndex,
}

impl DocStore {
    /// Open a store over `root`.
    ///
    /// The root is canonicalized once here; containment checks compare
    /// against this resolved form so a symlinked root still confines
    /// lookups to its target.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            )));
        }

        Ok(DocStore {
            root,
            index: InvertedIndex::new(),
        })
    }

    /// Canonicalized document root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read access to the underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Index `content` under a root-relative path.
    pub fn insert_document(&mut self, relative_path: &str, content: String) {
        self.index.add_document(relative_path, content);
    }

    /// Listing metadata for every indexed document, in path order.
    pub fn list_documents(&self) -> Vec<DocumentInfo> {
        self.index
            .documents()
            .map(|(path, entry)| DocumentInfo {
                name: file_name(path),
                path: path.to_string(),
                size: entry.size,
                file_type: entry.file_type.clone(),
                word_count: entry.token_count,
            })
            .collect()
    }

    /// Full content of a document by root-relative path.
    ///
    /// Indexed documents are served from memory. Paths missing from the
    /// index fall back to a containment-checked disk read, so files the
    /// loader skipped are still readable on demand.
    pub fn read_document(&self, relative_path: &str) -> Result<String> {
        if let Some(content) = self.index.content(relative_path) {
            return Ok(content.to_string());
        }

        let resolved = self.resolve(relative_path)?;
        extract_file(&resolved)
    }

    /// First `max_lines` lines of a document.
    pub fn summarize(&self, relative_path: &str, max_lines: usize) -> Result<String> {
        let content = self.read_document(relative_path)?;
        Ok(crate::first_lines(&content, max_lines))
    }

    /// Resolve a root-relative path to a canonical path inside the root.
    ///
    /// Absolute paths and `..` components are rejected before touching
    /// the filesystem, so escape attempts fail the same way whether or
    /// not their target exists. Canonicalization then pins down symlinks
    /// pointing outside the root.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        let relative = Path::new(relative_path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(Error::AccessDenied(relative_path.to_string()));
        }

        let resolved = self
            .root
            .join(relative)
            .canonicalize()
            .map_err(|_| Error::NotFound(relative_path.to_string()))?;

        if !resolved.starts_with(&self.root) {
            return Err(Error::AccessDenied(relative_path.to_string()));
        }

        Ok(resolved)
    }
}

/// Final path component, the path itself when it has none.
fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}
