//! Similarity engine: builds a two-document TF-IDF vector space over the
//! candidate and reference resumes and scores their cosine similarity.
//!
//! Determinism rules:
//! - the joint vocabulary is sorted alphabetically, and every downstream
//!   ordering (tie-breaks, missing-term order) derives from it;
//! - IDF uses the non-smoothed formula `ln(n / df) + 1` over the
//!   two-document corpus (df = 2 gives 1.0, df = 1 gives ln 2 + 1);
//! - each document vector is L2-normalized before comparison, so the
//!   thresholds below apply to normalized weights and cosine similarity is
//!   a plain dot product.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Minimum reference weight for a term to count as characteristic of the
/// reference resume.
const MISSING_REF_MIN: f64 = 0.1;
/// Maximum candidate weight for a characteristic term to still count as
/// absent from the candidate. Asymmetric with [`MISSING_REF_MIN`] so only
/// strong, one-sided gaps are flagged.
const MISSING_CAND_MAX: f64 = 0.05;
/// Matching terms reported to the caller, strongest first.
const TOP_MATCHING: usize = 10;

/// A vocabulary term with its weight in each document vector. Both
/// documents are vectorized together so the weights are comparable.
#[derive(Debug, Clone)]
pub struct TermWeight {
    pub term: String,
    pub candidate: f64,
    pub reference: f64,
}

/// Output of comparing the candidate resume against the reference.
#[derive(Debug, Clone)]
pub struct SimilarityReport {
    /// Cosine similarity scaled to 0-100, rounded to two decimal places.
    pub score: f64,
    /// Terms weighted in both documents, ranked descending by the weaker of
    /// the two weights, capped at [`TOP_MATCHING`]. Disjoint from
    /// `missing_terms`.
    pub matching_terms: Vec<String>,
    /// Terms strongly characteristic of the reference but nearly absent
    /// from the candidate, in vocabulary order.
    pub missing_terms: Vec<String>,
}

/// Compares two normalized documents. Empty input is valid: a zero vector
/// on either side yields score 0 rather than an error.
pub fn compare(candidate_norm: &str, reference_norm: &str) -> SimilarityReport {
    let weights = vectorize(candidate_norm, reference_norm);

    let cosine: f64 = weights.iter().map(|w| w.candidate * w.reference).sum();
    let score = round2(cosine * 100.0);

    // A term classified missing is never also a match, even if its
    // candidate weight is technically positive. The two lists stay
    // disjoint by construction.
    let mut matching: Vec<&TermWeight> = weights
        .iter()
        .filter(|w| w.candidate > 0.0 && w.reference > 0.0 && !is_missing(w))
        .collect();
    // Stable sort: ties keep vocabulary order.
    matching.sort_by(|a, b| {
        let a_min = a.candidate.min(a.reference);
        let b_min = b.candidate.min(b.reference);
        b_min.partial_cmp(&a_min).unwrap_or(Ordering::Equal)
    });
    matching.truncate(TOP_MATCHING);

    let missing_terms = weights
        .iter()
        .filter(|w| is_missing(w))
        .map(|w| w.term.clone())
        .collect();

    SimilarityReport {
        score,
        matching_terms: matching.into_iter().map(|w| w.term.clone()).collect(),
        missing_terms,
    }
}

/// Builds the joint vocabulary and each document's L2-normalized TF-IDF
/// weights. Exposed separately so tests can assert on raw weights.
pub fn vectorize(candidate_norm: &str, reference_norm: &str) -> Vec<TermWeight> {
    let cand_tf = term_counts(candidate_norm);
    let ref_tf = term_counts(reference_norm);

    let vocabulary: BTreeSet<&str> = cand_tf
        .keys()
        .chain(ref_tf.keys())
        .map(|s| s.as_str())
        .collect();

    let mut weights: Vec<TermWeight> = vocabulary
        .into_iter()
        .map(|term| {
            let tf_c = *cand_tf.get(term).unwrap_or(&0) as f64;
            let tf_r = *ref_tf.get(term).unwrap_or(&0) as f64;
            let df = f64::from(u8::from(tf_c > 0.0) + u8::from(tf_r > 0.0));
            let idf = (2.0 / df).ln() + 1.0;
            TermWeight {
                term: term.to_string(),
                candidate: tf_c * idf,
                reference: tf_r * idf,
            }
        })
        .collect();

    let cand_norm_len = norm(weights.iter().map(|w| w.candidate));
    if cand_norm_len > 0.0 {
        for w in &mut weights {
            w.candidate /= cand_norm_len;
        }
    }
    let ref_norm_len = norm(weights.iter().map(|w| w.reference));
    if ref_norm_len > 0.0 {
        for w in &mut weights {
            w.reference /= ref_norm_len;
        }
    }

    weights
}

fn is_missing(weight: &TermWeight) -> bool {
    weight.reference > MISSING_REF_MIN && weight.candidate < MISSING_CAND_MAX
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

fn norm(values: impl Iterator<Item = f64>) -> f64 {
    values.map(|v| v * v).sum::<f64>().sqrt()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
