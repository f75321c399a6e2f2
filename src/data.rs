//! Corpus and translation data for the search service.
//!
//! The service ships with a small reference corpus about information
//! retrieval and a Hindi translation table for part of it. A JSON data file
//! can replace both:
//!
//! ```json
//! {
//!   "documents": [{ "id": "1", "title": "...", "content": "..." }],
//!   "translations": { "source text": "translated text" }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use clir_search::{Corpus, Document, RankConfig, Ranker, TranslationIndex};
use serde::{Deserialize, Serialize};

use crate::config::DataConfig;
use crate::error::ServiceError;

/// Built-in documents as `(id, title, content)`.
const REFERENCE_DOCUMENTS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Understanding Vector Space Models",
        "Vector space models represent text documents as vectors in a high-dimensional space. Each dimension corresponds to a term in the vocabulary, and the value represents the term's importance in the document.",
    ),
    (
        "2",
        "Cross-Language Information Retrieval",
        "CLIR systems enable users to search documents in one language using queries in another language. This is achieved through techniques like translation-based retrieval and cross-lingual embeddings.",
    ),
    (
        "3",
        "Query Translation Methods",
        "Dictionary-based translation and machine translation are two primary approaches for query translation in CLIR. Machine translation often provides better context-aware translations.",
    ),
    (
        "4",
        "Document Embedding Techniques",
        "Modern CLIR systems use multilingual document embeddings to create language-agnostic vector representations, enabling direct cross-lingual similarity comparison.",
    ),
    (
        "5",
        "Evaluation Metrics in IR",
        "Information retrieval systems are evaluated using metrics like precision, recall, and mean average precision (MAP). These metrics help assess both relevance and ranking quality.",
    ),
];

/// Built-in English → Hindi translations, keyed by exact title or content.
const REFERENCE_TRANSLATIONS: &[(&str, &str)] = &[
    (
        "Understanding Vector Space Models",
        "वेक्टर स्पेस मॉडल को समझना",
    ),
    (
        "Vector space models represent text documents as vectors in a high-dimensional space. Each dimension corresponds to a term in the vocabulary, and the value represents the term's importance in the document.",
        "वेक्टर स्पेस मॉडल टेक्स्ट डॉक्यूमेंट्स को उच्च-आयामी स्पेस में वेक्टर्स के रूप में दर्शाते हैं। प्रत्येक आयाम शब्दावली में एक शब्द से संबंधित होता है, और मान दस्तावेज़ में शब्द के महत्व को दर्शाता है।",
    ),
    (
        "Cross-Language Information Retrieval",
        "क्रॉस-लैंग्वेज इनफॉर्मेशन रिट्रीवल",
    ),
    (
        "CLIR systems enable users to search documents in one language using queries in another language. This is achieved through techniques like translation-based retrieval and cross-lingual embeddings.",
        "CLIR सिस्टम उपयोगकर्ताओं को एक भाषा में क्वेरी का उपयोग करके दूसरी भाषा में दस्तावेज़ खोजने में सक्षम बनाते हैं। यह अनुवाद-आधारित पुनर्प्राप्ति और क्रॉस-लिंगुअल एम्बेडिंग जैसी तकनीकों के माध्यम से प्राप्त किया जाता है।",
    ),
    ("Query Translation Methods", "क्वेरी अनुवाद विधियाँ"),
    (
        "Dictionary-based translation and machine translation are two primary approaches for query translation in CLIR. Machine translation often provides better context-aware translations.",
        "डिक्शनरी-आधारित अनुवाद और मशीन अनुवाद CLIR में क्वेरी अनुवाद के लिए दो प्राथमिक दृष्टिकोण हैं। मशीन अनुवाद अक्सर बेहतर संदर्भ-जागरूक अनुवाद प्रदान करता है।",
    ),
];

/// A corpus together with the translations attached to its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    /// Documents in ranking tie-break order.
    pub documents: Corpus,
    /// Exact-match translations of titles and contents.
    #[serde(default)]
    pub translations: TranslationIndex,
}

impl SearchData {
    /// The built-in reference corpus and its Hindi translations.
    pub fn builtin() -> Self {
        let documents = REFERENCE_DOCUMENTS
            .iter()
            .map(|(id, title, content)| Document::new(*id, *title, *content))
            .collect();
        let translations = REFERENCE_TRANSLATIONS.iter().copied().collect();
        Self {
            documents,
            translations,
        }
    }

    /// Load and validate a JSON data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON of the
    /// expected shape, or fails [`SearchData::validate`].
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("{}: {e}", path.display())))?;
        data.validate()?;
        tracing::info!(
            path = %path.display(),
            documents = data.documents.len(),
            translations = data.translations.len(),
            "loaded search data"
        );
        Ok(data)
    }

    /// Load the configured data file, or the built-in data when none is set.
    ///
    /// # Errors
    ///
    /// Same as [`SearchData::from_file`].
    pub fn load(config: &DataConfig) -> crate::error::Result<Self> {
        match &config.path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Check the preconditions the ranking core relies on.
    ///
    /// Checks:
    /// - every document id is non-empty
    /// - document ids are unique
    /// - translation keys are non-empty
    pub fn validate(&self) -> crate::error::Result<()> {
        let mut seen = HashSet::with_capacity(self.documents.len());
        for doc in self.documents.documents() {
            if doc.id.trim().is_empty() {
                return Err(ServiceError::Config("document id must not be empty".into()));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(ServiceError::Config(format!(
                    "duplicate document id: {}",
                    doc.id
                )));
            }
        }
        if self.translations.iter().any(|(source, _)| source.is_empty()) {
            return Err(ServiceError::Config(
                "translation source text must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build a [`Ranker`] that owns this data.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Search`] if `config` is invalid.
    pub fn into_ranker(self, config: RankConfig) -> crate::error::Result<Ranker> {
        Ok(Ranker::new(self.documents, self.translations, config)?)
    }
}
