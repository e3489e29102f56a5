use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;

/// One question/answer exchange with the advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// Per-session state: the extracted resume text, the current analysis, and
/// the append-only chat log. A session only exists after a completed
/// review, so a stored analysis is always complete.
#[derive(Debug, Clone)]
pub struct Session {
    pub resume_text: String,
    pub analysis: AnalysisResult,
    pub chat_log: Vec<ChatTurn>,
}
