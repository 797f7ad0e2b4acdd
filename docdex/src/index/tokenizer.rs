//! Tokenization for indexing and queries
//!
//! A token is a lowercased run of word characters (`\w+`, Unicode-aware).
//! Punctuation and whitespace act purely as separators; underscore is a
//! word character and stays token-internal. No stemming, no stopwords.

use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Split text into an ordered sequence of lowercase word tokens.
///
/// Pure and deterministic; an empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("BGP routing"), vec!["bgp", "routing"]);
    }

    #[test]
    fn test_tokenize_separators() {
        // Hyphen and slash are separators; digits adjacent to letters stay attached
        assert_eq!(tokenize("Router-1 eth0/1"), vec!["router", "1", "eth0", "1"]);
    }

    #[test]
    fn test_tokenize_underscore_is_token_internal() {
        assert_eq!(tokenize("vlan_config"), vec!["vlan_config"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
        assert!(tokenize("--- !!! ...").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("OSPF Area"), vec!["ospf", "area"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Zürich café"), vec!["zürich", "café"]);
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "interface GigabitEthernet0/0/1 description uplink";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
