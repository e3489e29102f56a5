//! Conversational responder: ordered pattern matching over the user's
//! question, answered from the current analysis. Stateless; reads the
//! analysis and never mutates it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::advisor::{MAX_WORDS, MIN_WORDS};
use crate::models::analysis::AnalysisResult;

/// Returned by the chat endpoint when no completed review exists yet.
/// The responder itself is not invoked in that case.
pub const REVIEW_FIRST: &str = "Please upload and review a resume first to enable the chatbot.";

const GREETING: &str = "I'm here to help with your resume! ";

/// Intent categories, tried in declaration order. First match wins, so the
/// order is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Intent {
    Skills,
    Experience,
    Sections,
    Keywords,
    Rating,
    Length,
}

static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    [
        (Intent::Skills, r"improve.*skills|skills.*section|add.*skills"),
        (
            Intent::Experience,
            r"improve.*experience|work.*history|experience.*section",
        ),
        (Intent::Sections, r"missing.*section|section.*missing|structure"),
        (Intent::Keywords, r"keywords|missing.*keywords|relevant.*skills"),
        (Intent::Rating, r"rating|score|how.*good"),
        (Intent::Length, r"length|too.*long|too.*short"),
    ]
    .into_iter()
    .map(|(intent, pattern)| (intent, Regex::new(pattern).expect("valid intent pattern")))
    .collect()
});

/// Answers a free-text question about the current analysis.
pub fn respond(query: &str, analysis: &AnalysisResult) -> String {
    let query = query.trim().to_lowercase();

    let intent = INTENT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&query))
        .map(|(intent, _)| *intent);

    let body = match intent {
        Some(Intent::Skills) => skills_advice(analysis),
        Some(Intent::Experience) => experience_advice(analysis),
        Some(Intent::Sections) => sections_advice(analysis),
        Some(Intent::Keywords) => keywords_advice(analysis),
        Some(Intent::Rating) => rating_advice(analysis),
        Some(Intent::Length) => length_advice(analysis),
        None => "Could you clarify your question? Ask about specific sections (e.g. skills, \
                 experience), keywords, or your rating to get tailored advice."
            .to_string(),
    };

    format!("{GREETING}{body}")
}

fn skills_advice(analysis: &AnalysisResult) -> String {
    if analysis
        .missing_sections
        .iter()
        .any(|s| s == "Technical Skills")
    {
        "Your resume is missing a 'Technical Skills' section. Add one like the reference \
         resume, listing specific skills (e.g. JavaScript, React, AWS)."
            .to_string()
    } else if analysis.missing_keywords.is_empty() {
        "Your skills section already covers the reference resume's keywords. Tailor the \
         ordering so the most role-relevant skills come first."
            .to_string()
    } else {
        format!(
            "Enhance your skills section by adding relevant keywords like: {}. Tailor them to \
             match the reference resume's skills.",
            join_first(&analysis.missing_keywords, 5)
        )
    }
}

fn experience_advice(analysis: &AnalysisResult) -> String {
    if analysis
        .missing_sections
        .iter()
        .any(|s| s == "Professional Experience")
    {
        "Your resume lacks a 'Professional Experience' section. Include detailed roles like \
         the reference resume, with quantifiable achievements (e.g. 'Improved performance by 40%')."
            .to_string()
    } else {
        "Strengthen your experience section with action verbs and metrics, like 'Led \
         microservices development' or 'Reduced deployment time by 60%' as the reference \
         resume does."
            .to_string()
    }
}

fn sections_advice(analysis: &AnalysisResult) -> String {
    if analysis.missing_sections.is_empty() {
        "Your resume has all key sections! Make sure each one is detailed and matches the \
         reference resume's structure."
            .to_string()
    } else {
        format!(
            "Your resume is missing these sections: {}. Add them to match the reference \
             resume's structure (Professional Summary, Technical Skills, and so on).",
            analysis.missing_sections.join(", ")
        )
    }
}

fn keywords_advice(analysis: &AnalysisResult) -> String {
    if analysis.missing_keywords.is_empty() {
        "Your resume already includes the reference resume's key terms! Double-check for \
         niche skills from its technical skills section."
            .to_string()
    } else {
        format!(
            "Add these missing keywords to align with the reference resume: {}.",
            join_first(&analysis.missing_keywords, 5)
        )
    }
}

fn rating_advice(analysis: &AnalysisResult) -> String {
    let focus = if analysis.missing_sections.is_empty() {
        "adding more quantifiable achievements".to_string()
    } else {
        analysis.missing_sections.join(", ")
    };
    let keywords = if analysis.missing_keywords.is_empty() {
        "specific tools".to_string()
    } else {
        join_first(&analysis.missing_keywords, 3)
    };
    format!(
        "Your resume scored {:.2}% compared to the reference resume. To improve, focus on \
         {focus} and keywords like {keywords}.",
        analysis.rating
    )
}

fn length_advice(analysis: &AnalysisResult) -> String {
    let words = analysis.word_count;
    if words < MIN_WORDS {
        format!(
            "Your resume is short (word count: {words}). Add more detail to skills and \
             experience, like the reference resume's descriptions."
        )
    } else if words > MAX_WORDS {
        format!(
            "Your resume is lengthy (word count: {words}). Be concise, focusing on key \
             achievements as the reference resume does."
        )
    } else {
        format!(
            "Your resume length is good (word count: {words}). Make sure the content is \
             impactful, like the reference resume's quantifiable metrics."
        )
    }
}

fn join_first(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
