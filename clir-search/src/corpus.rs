//! The searchable corpus and the translation lookup table.
//!
//! Both are built once by the host and then only read. Neither type offers
//! mutation after construction, so a single instance can be shared across
//! concurrent ranking passes without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Document;

/// An ordered, immutable set of documents.
///
/// Order carries meaning: documents with equal relevance keep their corpus
/// order in ranked output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Wrap an ordered list of documents.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// All documents in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look a document up by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl From<Vec<Document>> for Corpus {
    fn from(documents: Vec<Document>) -> Self {
        Self::new(documents)
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Exact-match lookup from source text to its pre-translated form.
///
/// Keys are whole title or content strings. There is no normalisation and
/// no partial matching: a lookup either hits the exact key or returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationIndex {
    entries: HashMap<String, String>,
}

impl TranslationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a translation.
    pub fn with_entry(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.entries.insert(source.into(), translated.into());
        self
    }

    /// Translation of `source`, if one is known.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Iterate over `(source, translated)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for TranslationIndex {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_preserves_order() {
        let corpus: Corpus = vec![
            Document::new("b", "Second", "x"),
            Document::new("a", "First", "y"),
        ]
        .into();
        let ids: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn corpus_get_by_id() {
        let corpus: Corpus = [Document::new("7", "Seven", "body")].into_iter().collect();
        assert_eq!(corpus.get("7").map(|d| d.title.as_str()), Some("Seven"));
        assert!(corpus.get("8").is_none());
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert!(corpus.documents().is_empty());
    }

    #[test]
    fn corpus_deserialises_from_plain_array() {
        let json = r#"[{"id":"1","title":"T","content":"C"}]"#;
        let corpus: Corpus = serde_json::from_str(json).expect("deserialize");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.documents()[0].content, "C");
    }

    #[test]
    fn translation_lookup_is_exact() {
        let index = TranslationIndex::new().with_entry("Query Translation Methods", "क्वेरी अनुवाद विधियाँ");
        assert_eq!(index.lookup("Query Translation Methods"), Some("क्वेरी अनुवाद विधियाँ"));
        assert!(index.lookup("query translation methods").is_none());
        assert!(index.lookup("Query Translation").is_none());
        assert!(index.lookup("Query Translation Methods ").is_none());
    }

    #[test]
    fn translation_index_from_pairs() {
        let index: TranslationIndex = [("a", "A"), ("b", "B")].into_iter().collect();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("b"), Some("B"));
    }

    #[test]
    fn translation_index_deserialises_from_object() {
        let json = r#"{"hello":"नमस्ते"}"#;
        let index: TranslationIndex = serde_json::from_str(json).expect("deserialize");
        assert_eq!(index.lookup("hello"), Some("नमस्ते"));
    }
}
