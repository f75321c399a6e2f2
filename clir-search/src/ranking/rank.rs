//! Ranking pipeline: validate, score, sort, truncate, translate.
//!
//! The full corpus is scored on every call. Results are ordered by
//! descending relevance with a stable sort, so documents that tie keep
//! their corpus order. Only the surviving top-k documents are cloned into
//! [`ScoredResult`]s.

use std::cmp::Ordering;

use crate::config::RankConfig;
use crate::corpus::{Corpus, TranslationIndex};
use crate::error::SearchError;
use crate::types::{Document, ScoredResult};

use super::scoring::{score_terms, tokenize_query};

/// Rank `documents` against `query` and return at most `top_k` results.
///
/// # Pipeline
///
/// 1. Reject blank queries with [`SearchError::InvalidQuery`]
/// 2. Score every document with TF-IDF
/// 3. Stable sort by score descending (ties keep corpus order)
/// 4. Truncate to `top_k`
/// 5. Attach exact-match translations of title and content
///
/// A `top_k` larger than the corpus returns every document; `top_k == 0`
/// returns nothing.
///
/// # Errors
///
/// Returns [`SearchError::InvalidQuery`] if `query` is empty or whitespace
/// only. No scoring work happens in that case.
pub fn rank(
    query: &str,
    documents: &[Document],
    translations: &TranslationIndex,
    top_k: usize,
) -> Result<Vec<ScoredResult>, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidQuery("query is empty".into()));
    }

    tracing::trace!(query, "ranking query");
    let terms = tokenize_query(query);
    let scores = score_terms(&terms, documents);

    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .map(|(index, s)| (index, s.score))
        .collect();

    // sort_by is stable.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);

    let results: Vec<ScoredResult> = ranked
        .into_iter()
        .map(|(index, relevance_score)| {
            let document = &documents[index];
            ScoredResult {
                translated_title: translations.lookup(&document.title).map(str::to_owned),
                translated_content: translations.lookup(&document.content).map(str::to_owned),
                document: document.clone(),
                relevance_score,
            }
        })
        .collect();

    tracing::debug!(
        terms = terms.len(),
        documents = documents.len(),
        returned = results.len(),
        "ranked corpus"
    );

    Ok(results)
}

/// A ranker bound to one corpus and one translation index.
///
/// Built once by the host and shared read-only between requests; every
/// call to [`Ranker::rank`] is independent.
#[derive(Debug, Clone)]
pub struct Ranker {
    corpus: Corpus,
    translations: TranslationIndex,
    config: RankConfig,
}

impl Ranker {
    /// Create a ranker over `corpus` with the given translations.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation.
    pub fn new(
        corpus: Corpus,
        translations: TranslationIndex,
        config: RankConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        tracing::debug!(
            documents = corpus.len(),
            translations = translations.len(),
            top_k = config.top_k,
            "ranker ready"
        );
        Ok(Self {
            corpus,
            translations,
            config,
        })
    }

    /// Create a ranker with [`RankConfig::default()`].
    pub fn with_defaults(corpus: Corpus, translations: TranslationIndex) -> Self {
        Self {
            corpus,
            translations,
            config: RankConfig::default(),
        }
    }

    /// Rank the corpus against `query`, returning up to `config.top_k` results.
    ///
    /// # Errors
    ///
    /// Same as [`rank`].
    pub fn rank(&self, query: &str) -> Result<Vec<ScoredResult>, SearchError> {
        self.rank_top(query, self.config.top_k)
    }

    /// Rank with an explicit result count instead of the configured one.
    ///
    /// # Errors
    ///
    /// Same as [`rank`].
    pub fn rank_top(&self, query: &str, top_k: usize) -> Result<Vec<ScoredResult>, SearchError> {
        rank(query, self.corpus.documents(), &self.translations, top_k)
    }

    /// The corpus this ranker searches.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The translation index attached to results.
    pub fn translations(&self) -> &TranslationIndex {
        &self.translations
    }

    /// The active configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }
}
