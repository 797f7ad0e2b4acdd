//! Keyword search over the inverted index
//!
//! Scoring is plain term frequency: every posting of every query token
//! adds one point to its document. Results sort by score descending with
//! path-ascending tie-breaks, so a given index state always ranks the
//! same way.

use crate::index::{tokenize, InvertedIndex};
use serde::Serialize;
use std::collections::HashMap;

/// Default maximum number of results returned by a search
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Characters of context kept on each side of the first match
const SNIPPET_CONTEXT_CHARS: usize = 150;

/// Characters of the fallback head snippet
const HEAD_SNIPPET_CHARS: usize = 200;

/// A single ranked search hit.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Document path relative to the root
    pub path: String,
    /// Term-frequency score across all query tokens
    pub score: usize,
    /// Context snippet around the first query-token occurrence
    pub snippet: String,
}

/// Read-only search engine borrowing an index.
pub struct Searcher<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `index`
    pub fn new(index: &'a InvertedIndex) -> Self {
        Searcher { index }
    }

    /// Rank documents matching `query`, returning at most `limit` results.
    ///
    /// The query is tokenized with the same rules as document content.
    /// Repeated query tokens count every time, mirroring how their
    /// postings stack up. An empty query or a zero limit yields no
    /// results.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scores: HashMap<&str, usize> = HashMap::new();
        for token in &query_tokens {
            for posting in self.index.postings(token) {
                *scores.entry(posting.path.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(path, score)| {
                let content = self.index.content(path).unwrap_or("");
                SearchResult {
                    path: path.to_string(),
                    score,
                    snippet: extract_snippet(content, &query_tokens),
                }
            })
            .collect()
    }
}

/// Context window around the earliest query-token occurrence.
///
/// Matching is a case-insensitive substring scan, which also catches
/// tokens embedded in longer words. When no token occurs as a substring
/// the head of the document stands in. All offsets are computed in the
/// character domain so multi-byte content never splits a code point.
fn extract_snippet(content: &str, query_tokens: &[String]) -> String {
    let lowered = content.to_lowercase();

    let earliest = query_tokens
        .iter()
        .filter_map(|token| lowered.find(token.as_str()))
        .min();

    let byte_pos = match earliest {
        Some(pos) => pos,
        None => return head_snippet(content),
    };

    // Translate the byte offset in the lowercased text into a character
    // offset, then window over the original characters.
    let char_pos = lowered[..byte_pos].chars().count();
    let chars: Vec<char> = content.chars().collect();

    let start = char_pos.saturating_sub(SNIPPET_CONTEXT_CHARS);
    let end = (char_pos + SNIPPET_CONTEXT_CHARS).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str("...");
    }
    snippet
}

/// First `HEAD_SNIPPET_CHARS` characters of the document.
fn head_snippet(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= HEAD_SNIPPET_CHARS {
        content.to_string()
    } else {
        let mut snippet: String = chars[..HEAD_SNIPPET_CHARS].iter().collect();
        snippet.push_str("...");
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.add_document(
            "routing/bgp.md",
            "BGP routing uses autonomous systems. BGP peers exchange routes.".to_string(),
        );
        index.add_document(
            "switching/vlan.md",
            "VLAN configuration on switches.".to_string(),
        );
        index.add_document(
            "routing/ospf.md",
            "OSPF routing uses link-state advertisements.".to_string(),
        );
        index
    }

    #[test]
    fn test_search_ranks_by_term_frequency() {
        let index = sample_index();
        let results = Searcher::new(&index).search("bgp", DEFAULT_RESULT_LIMIT);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "routing/bgp.md");
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_search_multiple_tokens_accumulate() {
        let index = sample_index();
        let results = Searcher::new(&index).search("bgp routing", DEFAULT_RESULT_LIMIT);

        assert_eq!(results.len(), 2);
        // bgp.md: bgp x2 + routing x1 = 3, ospf.md: routing x1 = 1
        assert_eq!(results[0].path, "routing/bgp.md");
        assert_eq!(results[0].score, 3);
        assert_eq!(results[1].path, "routing/ospf.md");
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn test_search_repeated_query_token_doubles_score() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        let once = searcher.search("vlan", DEFAULT_RESULT_LIMIT);
        let twice = searcher.search("vlan vlan", DEFAULT_RESULT_LIMIT);

        assert_eq!(once[0].score, 1);
        assert_eq!(twice[0].score, 2);
    }

    #[test]
    fn test_search_tie_breaks_on_path() {
        let mut index = InvertedIndex::new();
        index.add_document("b.txt", "shared term".to_string());
        index.add_document("a.txt", "shared term".to_string());

        let results = Searcher::new(&index).search("shared", DEFAULT_RESULT_LIMIT);
        assert_eq!(results[0].path, "a.txt");
        assert_eq!(results[1].path, "b.txt");
    }

    #[test]
    fn test_search_respects_limit() {
        let index = sample_index();
        let results = Searcher::new(&index).search("routing", 1);

        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_zero_limit_is_empty() {
        let index = sample_index();
        assert!(Searcher::new(&index).search("bgp", 0).is_empty());
    }

    #[test]
    fn test_search_empty_query_is_empty() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        assert!(searcher.search("", DEFAULT_RESULT_LIMIT).is_empty());
        assert!(searcher.search("!!! ---", DEFAULT_RESULT_LIMIT).is_empty());
    }

    #[test]
    fn test_search_no_stemming() {
        let index = sample_index();
        // "switch" does not match "switches"; tokens are exact
        assert!(Searcher::new(&index)
            .search("switch", DEFAULT_RESULT_LIMIT)
            .is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        let first = searcher.search("routing bgp", DEFAULT_RESULT_LIMIT);
        let second = searcher.search("routing bgp", DEFAULT_RESULT_LIMIT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_snippet_contains_match() {
        let index = sample_index();
        let results = Searcher::new(&index).search("autonomous", DEFAULT_RESULT_LIMIT);

        assert!(results[0].snippet.contains("autonomous"));
    }

    #[test]
    fn test_snippet_windows_long_content() {
        let mut index = InvertedIndex::new();
        let padding = "x".repeat(500);
        let content = format!("{} needle {}", padding, padding);
        index.add_document("long.txt", content);

        let results = Searcher::new(&index).search("needle", DEFAULT_RESULT_LIMIT);
        let snippet = &results[0].snippet;

        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert!(snippet.contains("needle"));
        // window + both markers stays well under the full document
        assert!(snippet.chars().count() <= 2 * 150 + 6);
    }

    #[test]
    fn test_snippet_multibyte_safe() {
        let mut index = InvertedIndex::new();
        let padding = "ü".repeat(300);
        index.add_document("unicode.txt", format!("{}zürich{}", padding, padding));

        let results = Searcher::new(&index).search("zürich", DEFAULT_RESULT_LIMIT);
        assert!(results[0].snippet.contains("zürich"));
    }

    #[test]
    fn test_snippet_falls_back_to_head() {
        let long = format!("intro text {}", "a".repeat(300));
        let tokens = vec!["absent".to_string()];

        let snippet = extract_snippet(&long, &tokens);
        assert!(snippet.starts_with("intro text"));
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().count(), 203);
    }

    #[test]
    fn test_head_snippet_truncates() {
        let long = "b".repeat(250);
        let snippet = head_snippet(&long);
        assert_eq!(snippet.chars().count(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_head_snippet_short_content_untouched() {
        assert_eq!(head_snippet("short"), "short");
    }

    #[test]
    fn test_search_result_serializes_camel_case() {
        let result = SearchResult {
            path: "a.txt".to_string(),
            score: 3,
            snippet: "context".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["path"], "a.txt");
        assert_eq!(json["score"], 3);
        assert_eq!(json["snippet"], "context");
    }
}
