//! Advisory rule engine: fixed heuristics over the analysis output.
//! Every rule is evaluated independently; none of them short-circuits the
//! rest, and a failure to match one never suppresses another.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::normalize::word_count;

/// Resumes shorter than this read as thin.
pub const MIN_WORDS: usize = 300;
/// Resumes longer than this read as padded.
pub const MAX_WORDS: usize = 1000;
/// More missing keywords than this triggers the generic keyword suggestion.
const MISSING_KEYWORD_LIMIT: usize = 5;

/// Quantifiable-achievement markers: percentages, scale figures, impact verbs.
static ACHIEVEMENT_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\d+M|\d+K|reduced by|improved by|led|developed|implemented")
        .expect("valid achievement pattern")
});

/// Runs every advisory rule against the candidate resume and returns the
/// triggered suggestions in rule order. If nothing triggered, returns the
/// single positive alignment message instead of an empty list.
pub fn build_suggestions(
    raw_text: &str,
    missing_sections: &[String],
    missing_keywords: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();
    let words = word_count(raw_text);

    if words < MIN_WORDS {
        suggestions.push(
            "Your resume is quite short. Add more detail to experiences and skills to match \
             the depth of the reference resume."
                .to_string(),
        );
    }
    if words > MAX_WORDS {
        suggestions.push(
            "Your resume is lengthy. Be more concise, focusing on quantifiable achievements \
             like the reference resume does."
                .to_string(),
        );
    }
    if !missing_sections.is_empty() {
        suggestions.push(format!(
            "Add these missing sections: {}. The reference resume includes them for completeness.",
            missing_sections.join(", ")
        ));
    }
    if missing_keywords.len() > MISSING_KEYWORD_LIMIT {
        suggestions.push(
            "Incorporate more relevant keywords from skills and experience to boost alignment \
             with the reference resume."
                .to_string(),
        );
    }
    if !ACHIEVEMENT_MARKERS.is_match(raw_text) {
        suggestions.push(
            "Use quantifiable achievements (e.g. 'improved performance by 40%') as the \
             reference resume's experience section does."
                .to_string(),
        );
    }

    if suggestions.is_empty() {
        suggestions.push("Your resume aligns well with the reference resume. Great job!".to_string());
    }
    suggestions
}
