//! Content similarity — TF-IDF vectors over the resume/job pair, compared by cosine.
//!
//! Vectorizer rules:
//! - lowercase, tokens are runs of two or more word characters
//! - English stop words removed, then unigrams and bigrams
//! - vocabulary capped at the `max_features` terms with the highest total count
//!   (ties alphabetical)
//! - idf = ln((1 + n) / (1 + df)) + 1, weight = count × idf, rows L2-normalised

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::matching::stopwords::is_stop_word;

/// Vocabulary cap used for resume/job comparison.
pub const MAX_FEATURES: usize = 100;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("empty vocabulary: documents contain only stop words or single characters")]
    EmptyVocabulary,
}

/// Document-term weights produced by [`TfIdfVectorizer::fit_transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    /// Kept terms, alphabetical. Column `j` of every row belongs to `vocabulary[j]`.
    pub vocabulary: Vec<String>,
    /// One L2-normalised row per input document.
    pub rows: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    pub max_features: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            max_features: MAX_FEATURES,
        }
    }
}

impl TfIdfVectorizer {
    /// Builds the vocabulary over `docs` jointly and returns their weighted rows.
    pub fn fit_transform(&self, docs: &[&str]) -> Result<TfIdfMatrix, ComputationError> {
        // term -> count per document
        let mut counts: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for (doc_idx, doc) in docs.iter().enumerate() {
            for term in analyze(doc) {
                counts.entry(term).or_insert_with(|| vec![0; docs.len()])[doc_idx] += 1;
            }
        }

        if counts.is_empty() {
            return Err(ComputationError::EmptyVocabulary);
        }

        // BTreeMap iterates alphabetically and sort_by is stable, so equal
        // totals stay in alphabetical order.
        let mut ranked: Vec<(String, Vec<u32>)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| total(&b.1).cmp(&total(&a.1)));
        ranked.truncate(self.max_features);
        ranked.sort_by(|a, b| a.0.cmp(&b.0));

        let n_docs = docs.len() as f64;
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(_, per_doc)| {
                let df = per_doc.iter().filter(|&&c| c > 0).count() as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = (0..docs.len())
            .map(|doc_idx| {
                let mut row: Vec<f64> = ranked
                    .iter()
                    .zip(&idf)
                    .map(|((_, per_doc), idf)| per_doc[doc_idx] as f64 * idf)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TfIdfMatrix {
            vocabulary: ranked.into_iter().map(|(term, _)| term).collect(),
            rows,
        })
    }
}

/// Lowercased tokens with stop words removed, followed by their bigrams.
pub fn analyze(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

fn total(per_doc: &[u32]) -> u32 {
    per_doc.iter().sum()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Cosine of the angle between two vectors; 0.0 if either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// TF-IDF cosine similarity in [0, 1]. Empty input on either side is 0.0.
pub fn try_content_similarity(resume_text: &str, job_text: &str) -> Result<f64, ComputationError> {
    if resume_text.is_empty() || job_text.is_empty() {
        return Ok(0.0);
    }

    let matrix = TfIdfVectorizer::default().fit_transform(&[resume_text, job_text])?;
    let similarity = cosine_similarity(&matrix.rows[0], &matrix.rows[1]);
    debug!(terms = matrix.vocabulary.len(), similarity, "Computed content similarity");

    Ok(similarity.clamp(0.0, 1.0))
}

/// Like [`try_content_similarity`], but a computation failure scores 0.0.
pub fn content_similarity(resume_text: &str, job_text: &str) -> f64 {
    match try_content_similarity(resume_text, job_text) {
        Ok(similarity) => similarity,
        Err(e) => {
            warn!(error = %e, "Content similarity unavailable, scoring 0.0");
            0.0
        }
    }
}
