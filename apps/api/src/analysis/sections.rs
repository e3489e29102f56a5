//! Section detection: scans raw resume text for the five canonical section
//! headers via case-insensitive synonym patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical section names and their synonym patterns, in report order.
const SECTION_PATTERNS: &[(&str, &str)] = &[
    ("Professional Summary", r"professional summary|summary|objective"),
    ("Technical Skills", r"technical skills|skills|key skills"),
    (
        "Professional Experience",
        r"professional experience|work experience|experience|employment history",
    ),
    ("Education", r"education|academic background"),
    ("Certifications", r"certifications|certificates|credentials"),
];

static COMPILED: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            (
                *name,
                Regex::new(&format!("(?i){pattern}")).expect("valid section pattern"),
            )
        })
        .collect()
});

/// Returns the canonical sections with no match in `raw_text`, in canonical
/// order. Pure function of the raw (non-normalized) text.
pub fn missing_sections(raw_text: &str) -> Vec<String> {
    COMPILED
        .iter()
        .filter(|(_, re)| !re.is_match(raw_text))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: &[&str] = &[
        "Professional Summary",
        "Technical Skills",
        "Professional Experience",
        "Education",
        "Certifications",
    ];

    #[test]
    fn test_empty_text_misses_everything() {
        assert_eq!(missing_sections(""), ALL_NAMES);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        for variant in ["EXPERIENCE", "Experience", "experience"] {
            let missing = missing_sections(variant);
            assert!(
                !missing.iter().any(|s| s == "Professional Experience"),
                "{variant} should satisfy the experience pattern"
            );
        }
    }

    #[test]
    fn test_synonyms_match() {
        let missing = missing_sections("Employment History\nObjective\nKey Skills\nCredentials");
        assert_eq!(missing, vec!["Education"]);
    }

    #[test]
    fn test_missing_list_keeps_canonical_order() {
        // Education and Certifications present, the rest absent
        let missing = missing_sections("education and certifications only");
        assert_eq!(
            missing,
            vec![
                "Professional Summary",
                "Technical Skills",
                "Professional Experience"
            ]
        );
    }

    #[test]
    fn test_full_resume_has_no_missing_sections() {
        let text = "Professional Summary\nTechnical Skills\nProfessional Experience\nEducation\nCertifications";
        assert!(missing_sections(text).is_empty());
    }
}
