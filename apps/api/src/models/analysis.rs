use serde::{Deserialize, Serialize};

/// Immutable output of one review action. A re-review replaces the whole
/// value; callers never observe a partially updated result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity to the reference resume, 0-100, two decimals.
    pub rating: f64,
    /// Strongest shared terms, ranked by the weaker of the two document
    /// weights, capped at ten.
    pub matching_keywords: Vec<String>,
    /// Terms characteristic of the reference but nearly absent from the
    /// candidate.
    pub missing_keywords: Vec<String>,
    /// Canonical sections with no match, in canonical order.
    pub missing_sections: Vec<String>,
    /// Advisory rule output. Never empty.
    pub suggestions: Vec<String>,
    /// Word count of the raw extracted text.
    pub word_count: usize,
}
