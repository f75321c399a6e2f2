//! # clir-search
//!
//! Relevance scoring and ranking for cross-language document search.
//!
//! Given a free-text query and a fixed, in-memory corpus, this crate scores
//! every document with TF-IDF, orders the documents by descending relevance,
//! keeps the top k, and pairs each result with any pre-translated title and
//! body found in an exact-match translation index.
//!
//! ## Design
//!
//! - Pure and synchronous: no I/O, no shared mutable state, no caching
//! - The corpus is rescored in full on every query
//! - Deterministic: equal scores keep corpus order (stable sort)
//! - Blank queries fail fast with [`SearchError::InvalidQuery`]
//!
//! Loading documents, serving HTTP and rendering results are the host's job.

pub mod config;
pub mod corpus;
pub mod error;
pub mod ranking;
pub mod types;

pub use config::{RankConfig, DEFAULT_TOP_K};
pub use corpus::{Corpus, TranslationIndex};
pub use error::{Result, SearchError};
pub use ranking::rank::{rank, Ranker};
pub use ranking::scoring::{score, DocumentScore};
pub use types::{Document, ScoredResult};

/// Rank `corpus` against `query` with the default top-5 cut-off.
///
/// Convenience wrapper around [`rank`] using [`DEFAULT_TOP_K`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] if `query` is blank.
///
/// # Examples
///
/// ```
/// use clir_search::{Corpus, Document, TranslationIndex};
///
/// let corpus = Corpus::new(vec![
///     Document::new("1", "Query Translation", "machine translation of queries"),
///     Document::new("2", "Evaluation", "precision and recall"),
/// ]);
/// let translations = TranslationIndex::new();
///
/// let results = clir_search::search("translation", &corpus, &translations)?;
/// assert_eq!(results[0].id(), "1");
/// # Ok::<(), clir_search::SearchError>(())
/// ```
pub fn search(
    query: &str,
    corpus: &Corpus,
    translations: &TranslationIndex,
) -> Result<Vec<ScoredResult>> {
    rank(query, corpus.documents(), translations, DEFAULT_TOP_K)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_rejects_blank_query() {
        let result = search("  ", &Corpus::default(), &TranslationIndex::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid query"));
    }

    #[test]
    fn search_caps_at_default_top_k() {
        let corpus: Corpus = (0..9)
            .map(|i| Document::new(i.to_string(), "title", "content"))
            .collect();
        let results = search("title", &corpus, &TranslationIndex::new()).unwrap();
        assert_eq!(results.len(), DEFAULT_TOP_K);
    }
}
