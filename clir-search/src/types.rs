//! Core types for documents and ranked results.

use serde::{Deserialize, Serialize};

/// A searchable document.
///
/// Documents are created once from static data and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier within a corpus.
    pub id: String,
    /// The document title.
    pub title: String,
    /// The document body text.
    pub content: String,
}

impl Document {
    /// Create a document from its three fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// The lower-cased `title + " " + content` text that scoring runs over.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}

/// A document paired with its relevance score and any known translations.
///
/// Serialises with the document fields inlined:
///
/// ```text
/// { "id", "title", "content", "translated_title", "translated_content", "relevance_score" }
/// ```
///
/// Missing translations serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The matched document.
    #[serde(flatten)]
    pub document: Document,
    /// Translation of the exact title string, if the index has one.
    pub translated_title: Option<String>,
    /// Translation of the exact content string, if the index has one.
    pub translated_content: Option<String>,
    /// TF-IDF relevance (higher is better, never negative).
    pub relevance_score: f64,
}

impl ScoredResult {
    /// The id of the matched document.
    pub fn id(&self) -> &str {
        &self.document.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScoredResult {
        ScoredResult {
            document: Document::new("3", "Query Translation Methods", "Dictionary-based translation."),
            translated_title: Some("क्वेरी अनुवाद विधियाँ".into()),
            translated_content: None,
            relevance_score: 0.75,
        }
    }

    #[test]
    fn searchable_text_joins_and_lowercases() {
        let doc = Document::new("1", "Vector Space", "Models Represent TEXT");
        assert_eq!(doc.searchable_text(), "vector space models represent text");
    }

    #[test]
    fn scored_result_serialises_flat_with_nulls() {
        let json = serde_json::to_value(sample_result()).expect("serialize");
        assert_eq!(json["id"], "3");
        assert_eq!(json["title"], "Query Translation Methods");
        assert_eq!(json["content"], "Dictionary-based translation.");
        assert_eq!(json["translated_title"], "क्वेरी अनुवाद विधियाँ");
        assert!(json["translated_content"].is_null());
        assert!((json["relevance_score"].as_f64().unwrap_or_default() - 0.75).abs() < f64::EPSILON);
        assert!(json.get("document").is_none());
    }

    #[test]
    fn scored_result_reads_wire_format() {
        let json = r#"{
            "id": "2",
            "title": "Cross-Language Information Retrieval",
            "content": "CLIR systems",
            "translated_title": null,
            "translated_content": null,
            "relevance_score": 0.0
        }"#;
        let result: ScoredResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.id(), "2");
        assert!(result.translated_title.is_none());
        assert_eq!(result.relevance_score, 0.0);
    }
}
