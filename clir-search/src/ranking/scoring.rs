//! TF-IDF relevance scoring.
//!
//! Every document is scored against the whole query:
//!
//! ```text
//! df(t)     = documents whose lower-cased "title content" contains t as a substring
//! idf(t)    = ln(N / df(t))                      (terms with df(t) == 0 are skipped)
//! tf(t, d)  = whitespace-delimited words of d equal to t
//! score(d)  = Σ_{t in query} tf(t, d) * idf(t) / |query terms|
//! ```
//!
//! Document frequency uses substring containment while term frequency uses
//! exact word equality, so `"lang"` counts towards df for a document about
//! "languages" yet never adds tf there. Repeated query terms are summed once
//! per occurrence, and the average is taken over term positions, not over
//! distinct terms.

use std::collections::HashMap;

use crate::types::Document;

/// Relevance of one document, reported in corpus order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentScore<'a> {
    /// Id of the scored document.
    pub id: &'a str,
    /// TF-IDF relevance, `>= 0.0`.
    pub score: f64,
}

/// Split a query into lower-cased terms.
///
/// Runs of whitespace are collapsed and leading/trailing whitespace is
/// ignored, so the result never contains empty terms. Duplicates are kept.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Score every document in `documents` against `query`.
///
/// Returns one entry per document in the same order. An empty corpus gives
/// an empty vector; a query without terms scores every document 0.
pub fn score<'a>(query: &str, documents: &'a [Document]) -> Vec<DocumentScore<'a>> {
    score_terms(&tokenize_query(query), documents)
}

/// Score every document against already tokenized, lower-cased terms.
pub fn score_terms<'a>(terms: &[String], documents: &'a [Document]) -> Vec<DocumentScore<'a>> {
    let texts: Vec<String> = documents.iter().map(Document::searchable_text).collect();
    let idf = inverse_document_frequencies(terms, &texts);

    documents
        .iter()
        .zip(&texts)
        .map(|(doc, text)| DocumentScore {
            id: &doc.id,
            score: score_text(terms, text, &idf),
        })
        .collect()
}

/// Number of texts containing `term` anywhere, as a substring.
pub fn document_frequency(term: &str, texts: &[String]) -> usize {
    texts.iter().filter(|text| text.contains(term)).count()
}

/// `ln(n / df)`, or `None` when the term occurs in no document.
pub fn idf_weight(n: usize, df: usize) -> Option<f64> {
    if df == 0 {
        return None;
    }
    Some((n as f64 / df as f64).ln())
}

/// Number of whitespace-delimited words of `text` exactly equal to `term`.
pub fn term_frequency(term: &str, text: &str) -> usize {
    text.split_whitespace().filter(|word| *word == term).count()
}

/// IDF per distinct term that occurs in at least one text.
fn inverse_document_frequencies<'t>(terms: &'t [String], texts: &[String]) -> HashMap<&'t str, f64> {
    let n = texts.len();
    let mut idf = HashMap::with_capacity(terms.len());
    for term in terms {
        if idf.contains_key(term.as_str()) {
            continue;
        }
        let df = document_frequency(term, texts);
        if let Some(weight) = idf_weight(n, df) {
            idf.insert(term.as_str(), weight);
        }
    }
    idf
}

fn score_text(terms: &[String], text: &str, idf: &HashMap<&str, f64>) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    // fold from +0.0: an empty float sum is -0.0.
    let raw = terms.iter().fold(0.0_f64, |acc, term| match idf.get(term.as_str()) {
        Some(weight) => acc + term_frequency(term, text) as f64 * weight,
        None => acc,
    });
    raw / terms.len() as f64
}
