// ============================================================
// Layer 4 — Whitespace Tokenizer
// ============================================================
// Splits corpus fragments on whitespace. No casing rules and no
// punctuation handling: "Hello," and "hello" are different tokens.
//
// Two entry points with two result shapes:
//
//   tokenize_flat        every token of every fragment in one Vec
//                        → feeds vocabulary construction
//
//   tokenize_sentences   one token Vec per fragment
//                        → feeds example construction, where the
//                          fragment boundaries ARE the examples
//
// An empty fragment yields an empty token Vec, never an error.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::records::SentenceGroup;

/// Whitespace-split one fragment.
pub fn split_fragment(fragment: &str) -> Vec<String> {
    fragment.split_whitespace().map(str::to_string).collect()
}

/// All tokens across all fragments, in corpus order, duplicates kept.
pub fn tokenize_flat(groups: &[SentenceGroup]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|group| group.fragments())
        .flat_map(|fragment| fragment.split_whitespace())
        .map(str::to_string)
        .collect()
}

/// One token sequence per fragment, in corpus order.
pub fn tokenize_sentences(groups: &[SentenceGroup]) -> Vec<Vec<String>> {
    groups
        .iter()
        .flat_map(|group| group.fragments())
        .map(|fragment| split_fragment(fragment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<SentenceGroup> {
        vec![
            SentenceGroup::new(["  hello   world ", "hi"]),
            SentenceGroup::new(["how are you", ""]),
        ]
    }

    #[test]
    fn test_flat_keeps_duplicates_and_order() {
        let groups = vec![SentenceGroup::new(["a b", "b a"])];
        assert_eq!(tokenize_flat(&groups), vec!["a", "b", "b", "a"]);
    }

    #[test]
    fn test_flat_spans_all_groups() {
        assert_eq!(
            tokenize_flat(&corpus()),
            vec!["hello", "world", "hi", "how", "are", "you"]
        );
    }

    #[test]
    fn test_sentences_keep_fragment_boundaries() {
        let sentences = tokenize_sentences(&corpus());
        assert_eq!(sentences.len(), 4);
        assert_eq!(sentences[0], vec!["hello", "world"]);
        assert_eq!(sentences[1], vec!["hi"]);
        assert_eq!(sentences[2], vec!["how", "are", "you"]);
        // The empty fragment still produces an (empty) sentence
        assert!(sentences[3].is_empty());
    }

    #[test]
    fn test_no_normalisation() {
        assert_eq!(split_fragment("Hello, hello"), vec!["Hello,", "hello"]);
    }
}
