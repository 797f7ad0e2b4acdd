//! In-memory inverted index
//!
//! Maps each token to the postings (document path, ordinal position) where
//! it occurs, and each document path to its content and derived metadata.
//! The index is built once at startup and only read afterwards; postings
//! are never removed during the process lifetime.

mod tokenizer;

pub use tokenizer::tokenize;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A single occurrence of a token within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Document path relative to the root
    pub path: String,
    /// Ordinal offset of the token within the document's token sequence
    pub position: usize,
}

/// Indexed document content plus metadata derived at add time.
#[derive(Debug, Clone)]
pub struct DocumentEntry {
    /// Raw text content
    pub content: String,
    /// Content size in bytes
    pub size: usize,
    /// Lowercased extension tag with leading dot (e.g. ".md"), empty if none
    pub file_type: String,
    /// Number of tokens in the content
    pub token_count: usize,
}

/// Inverted index over a set of documents.
///
/// Documents iterate in path order so listings and score tie-breaks are
/// deterministic for a given index state.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, Vec<Posting>>,
    documents: BTreeMap<String, DocumentEntry>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path` and index every (token, position) pair.
    ///
    /// Re-adding the same path replaces the stored content but merges the
    /// new postings with the old ones; callers that need collision-free
    /// postings must guarantee unique paths per build, which the loader does.
    pub fn add_document(&mut self, path: &str, content: String) {
        let tokens = tokenize(&content);

        // Content must be registered before its postings so that every
        // posting path always has a matching document entry.
        self.documents.insert(
            path.to_string(),
            DocumentEntry {
                size: content.len(),
                file_type: file_type_tag(path),
                token_count: tokens.len(),
                content,
            },
        );

        for (position, token) in tokens.into_iter().enumerate() {
            self.terms.entry(token).or_default().push(Posting {
                path: path.to_string(),
                position,
            });
        }
    }

    /// Postings for a token; unknown tokens yield an empty slice.
    pub fn postings(&self, token: &str) -> &[Posting] {
        self.terms.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up an indexed document entry by path.
    pub fn get(&self, path: &str) -> Option<&DocumentEntry> {
        self.documents.get(path)
    }

    /// Content of an indexed document, if present.
    pub fn content(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(|e| e.content.as_str())
    }

    /// All indexed documents in path order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &DocumentEntry)> {
        self.documents.iter().map(|(p, e)| (p.as_str(), e))
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when no documents have been indexed
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Lowercased extension tag with leading dot, empty string when absent.
fn file_type_tag(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_document_records_postings() {
        let mut index = InvertedIndex::new();
        index.add_document("a.txt", "BGP routing uses BGP peers".to_string());

        let postings = index.postings("bgp");
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].path, "a.txt");
        assert_eq!(postings[0].position, 0);
        assert_eq!(postings[1].position, 3);
    }

    #[test]
    fn test_unknown_token_yields_empty_slice() {
        let index = InvertedIndex::new();
        assert!(index.postings("missing").is_empty());
    }

    #[test]
    fn test_every_posting_has_a_document_entry() {
        let mut index = InvertedIndex::new();
        index.add_document("a.md", "alpha beta".to_string());
        index.add_document("b.md", "beta gamma".to_string());

        for token in ["alpha", "beta", "gamma"] {
            for posting in index.postings(token) {
                assert!(index.get(&posting.path).is_some());
            }
        }
    }

    #[test]
    fn test_metadata_derived_at_add_time() {
        let mut index = InvertedIndex::new();
        index.add_document("guides/BGP.MD", "one two three".to_string());

        let entry = index.get("guides/BGP.MD").unwrap();
        assert_eq!(entry.size, "one two three".len());
        assert_eq!(entry.file_type, ".md");
        assert_eq!(entry.token_count, 3);
    }

    #[test]
    fn test_file_type_tag_missing_extension() {
        let mut index = InvertedIndex::new();
        index.add_document("README", "hello".to_string());
        assert_eq!(index.get("README").unwrap().file_type, "");
    }

    #[test]
    fn test_re_add_replaces_content_and_merges_postings() {
        let mut index = InvertedIndex::new();
        index.add_document("a.txt", "old words".to_string());
        index.add_document("a.txt", "new words".to_string());

        assert_eq!(index.content("a.txt"), Some("new words"));
        // Postings from both adds are retained
        assert_eq!(index.postings("old").len(), 1);
        assert_eq!(index.postings("new").len(), 1);
        assert_eq!(index.postings("words").len(), 2);
    }

    #[test]
    fn test_documents_iterate_in_path_order() {
        let mut index = InvertedIndex::new();
        index.add_document("z.txt", "z".to_string());
        index.add_document("a.txt", "a".to_string());
        index.add_document("m.txt", "m".to_string());

        let paths: Vec<&str> = index.documents().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["a.txt", "m.txt", "z.txt"]);
    }

    #[test]
    fn test_empty_content() {
        let mut index = InvertedIndex::new();
        index.add_document("empty.txt", String::new());

        assert_eq!(index.len(), 1);
        let entry = index.get("empty.txt").unwrap();
        assert_eq!(entry.token_count, 0);
        assert_eq!(entry.size, 0);
    }
}
