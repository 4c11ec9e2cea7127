//! Naive lexical retrieval over an in-memory document index.
//!
//! Scoring is deliberately crude: lower-case whitespace tokens, score =
//! size of the query/document token-set intersection. No stemming, no
//! stop words, no frequency weighting. Good enough to put retrieval on a
//! slide, useless for anything else.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A unit of indexed text. Immutable once indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A document paired with its overlap score for one retrieval call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub score: usize,
    pub document: Document,
}

/// In-memory retriever holding an insertion-ordered index.
///
/// Not safe for concurrent mutation; embedding hosts must serialize
/// access externally.
#[derive(Debug, Default)]
pub struct LexicalRetriever {
    docs: Vec<Document>,
}

impl LexicalRetriever {
    /// Create an empty retriever
    pub fn new() -> Self {
        Self { docs: Vec::new() }
    }

    /// Append a document to the index.
    ///
    /// Duplicate ids are accepted; later lookups by id are then ambiguous,
    /// which is the caller's problem to avoid.
    pub fn index(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.docs.push(Document::new(id, text));
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Retrieve up to `top_k` documents with a non-zero overlap score,
    /// highest score first. Ties keep insertion order (the sort is stable).
    ///
    /// Empty query, empty index, or `top_k == 0` all yield an empty vec.
    /// Scores are recomputed in full on every call; the index is never
    /// mutated by retrieval.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<ScoredMatch> {
        if top_k == 0 {
            return Vec::new();
        }

        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredMatch> = self
            .docs
            .iter()
            .filter_map(|doc| {
                let score = query_tokens.intersection(&tokenize(&doc.text)).count();
                if score > 0 {
                    Some(ScoredMatch {
                        score,
                        document: doc.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps insertion order for equal scores
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_k);
        scored
    }
}

/// Lower-cased whitespace tokens, duplicates collapsed
fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn seeded_retriever() -> LexicalRetriever {
        let mut retriever = LexicalRetriever::new();
        retriever.index("u1", "alice admin");
        retriever.index("u2", "bob user");
        retriever
    }

    #[test]
    fn test_tokenize_lowercases_and_collapses() {
        let tokens = tokenize("Admin admin LOGS");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("admin"));
        assert!(tokens.contains("logs"));
    }

    #[test]
    fn test_retrieve_scores_by_overlap() {
        let retriever = seeded_retriever();
        let matches = retriever.retrieve("admin", 3);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].document.id, "u1");
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_retrieve_orders_descending() {
        let mut retriever = LexicalRetriever::new();
        retriever.index("a", "one");
        retriever.index("b", "one two three");
        retriever.index("c", "one two");

        let matches = retriever.retrieve("one two three", 3);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].document.id, "b");
        assert_eq!(matches[0].score, 3);
        assert_eq!(matches[1].document.id, "c");
        assert_eq!(matches[2].document.id, "a");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut retriever = LexicalRetriever::new();
        retriever.index("first", "shared token here");
        retriever.index("second", "shared token there");

        let matches = retriever.retrieve("shared token", 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, matches[1].score);
        assert_eq!(matches[0].document.id, "first");
        assert_eq!(matches[1].document.id, "second");
    }

    #[test]
    fn test_retrieve_respects_top_k() {
        let mut retriever = LexicalRetriever::new();
        for i in 0..10 {
            retriever.index(format!("d{}", i), "common word");
        }

        let matches = retriever.retrieve("common", 3);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_top_k_zero_returns_empty() {
        let retriever = seeded_retriever();
        assert!(retriever.retrieve("admin", 0).is_empty());
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let retriever = seeded_retriever();
        assert!(retriever.retrieve("", 3).is_empty());
        assert!(retriever.retrieve("   ", 3).is_empty());
    }

    #[test]
    fn test_empty_index_returns_empty() {
        let retriever = LexicalRetriever::new();
        assert!(retriever.retrieve("anything", 3).is_empty());
    }

    #[test]
    fn test_zero_score_docs_excluded() {
        let retriever = seeded_retriever();
        let matches = retriever.retrieve("missing words only", 5);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_retrieve_does_not_mutate_index() {
        let retriever = seeded_retriever();
        let before = retriever.len();
        let _ = retriever.retrieve("admin", 3);
        assert_eq!(retriever.len(), before);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let mut retriever = LexicalRetriever::new();
        retriever.index("k1", "Parameterized Queries prevent SQL injection");

        let matches = retriever.retrieve("sql INJECTION", 3);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 2);
    }

    #[quickcheck]
    fn prop_result_bounded_by_top_k(texts: Vec<String>, query: String, top_k: usize) -> bool {
        let mut retriever = LexicalRetriever::new();
        for (i, text) in texts.iter().enumerate() {
            retriever.index(format!("d{}", i), text.clone());
        }
        retriever.retrieve(&query, top_k).len() <= top_k
    }

    #[quickcheck]
    fn prop_all_scores_positive(texts: Vec<String>, query: String) -> bool {
        let mut retriever = LexicalRetriever::new();
        for (i, text) in texts.iter().enumerate() {
            retriever.index(format!("d{}", i), text.clone());
        }
        retriever.retrieve(&query, 5).iter().all(|m| m.score > 0)
    }

    #[quickcheck]
    fn prop_scores_descend(texts: Vec<String>, query: String) -> bool {
        let mut retriever = LexicalRetriever::new();
        for (i, text) in texts.iter().enumerate() {
            retriever.index(format!("d{}", i), text.clone());
        }
        let matches = retriever.retrieve(&query, texts.len());
        matches.windows(2).all(|w| w[0].score >= w[1].score)
    }

    #[quickcheck]
    fn prop_retrieve_idempotent(texts: Vec<String>, query: String) -> bool {
        let mut retriever = LexicalRetriever::new();
        for (i, text) in texts.iter().enumerate() {
            retriever.index(format!("d{}", i), text.clone());
        }
        retriever.retrieve(&query, 3) == retriever.retrieve(&query, 3)
    }
}
