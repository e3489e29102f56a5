// Core analysis pipeline: normalization, section detection, TF-IDF
// similarity, and the advisory rules. Everything here is pure and
// synchronous; the HTTP layer in handlers.rs is the only I/O.

pub mod advisor;
pub mod handlers;
pub mod normalize;
pub mod sections;
pub mod similarity;

use crate::models::analysis::AnalysisResult;
use crate::reference::STANDARD_RESUME;

/// Runs the full analysis of a candidate resume against the fixed
/// reference. One call produces one complete, immutable result.
pub fn analyze(raw_text: &str) -> AnalysisResult {
    let candidate_norm = normalize::normalize(raw_text);
    let reference_norm = normalize::normalize(STANDARD_RESUME);

    let report = similarity::compare(&candidate_norm, &reference_norm);
    let missing_sections = sections::missing_sections(raw_text);
    let suggestions =
        advisor::build_suggestions(raw_text, &missing_sections, &report.missing_terms);

    AnalysisResult {
        rating: report.score,
        matching_keywords: report.matching_terms,
        missing_keywords: report.missing_terms,
        missing_sections,
        suggestions,
        word_count: normalize::word_count(raw_text),
    }
}
