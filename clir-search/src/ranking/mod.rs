//! Relevance ranking: TF-IDF scoring and the top-k ranking pipeline.
//!
//! [`scoring`] computes one score per document; [`rank`] validates the
//! query, sorts the scored corpus, truncates it and attaches translations.

pub mod rank;
pub mod scoring;
