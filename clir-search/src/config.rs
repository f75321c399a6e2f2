//! Ranking configuration with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default number of results returned by a ranking pass.
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration for a [`crate::Ranker`].
///
/// Use [`Default::default()`] for the standard top-5 behaviour, or
/// construct with field overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Maximum number of results to return after scoring and sorting.
    pub top_k: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl RankConfig {
    /// Validates this configuration.
    ///
    /// `top_k` must be greater than 0: a ranker that can never return a
    /// result is a host misconfiguration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.top_k == 0 {
            return Err(SearchError::Config("top_k must be greater than 0".into()));
        }
        Ok(())
    }
}
