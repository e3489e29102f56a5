use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::analysis::AnalysisResult;
use crate::models::session::Session;
use crate::reference::STANDARD_RESUME;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub resume_text: String,
}

/// POST /api/v1/review
///
/// Multipart form: `resume` (PDF file, required) and `session_id` (text,
/// optional). Re-reviewing an existing session replaces its analysis
/// wholesale and keeps the chat log.
pub async fn handle_review(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    let mut resume_bytes: Option<bytes::Bytes> = None;
    let mut session_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read resume field: {e}")))?;
                resume_bytes = Some(data);
            }
            Some("session_id") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read session_id field: {e}"))
                })?;
                let id = text
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation(format!("invalid session_id: {text}")))?;
                session_id = Some(id);
            }
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;

    let resume_text = extract_text(&resume_bytes)?;
    if resume_text.trim().is_empty() {
        // Scanned-image PDFs have no text layer; the analysis still runs
        // but its result is zero-signal.
        warn!("extracted resume text is empty, producing a degraded analysis");
    }

    let analysis = analyze(&resume_text);
    info!(
        rating = analysis.rating,
        missing_keywords = analysis.missing_keywords.len(),
        missing_sections = analysis.missing_sections.len(),
        "resume reviewed"
    );

    let session_id = session_id.unwrap_or_else(Uuid::new_v4);
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(&session_id) {
        Some(session) => {
            session.resume_text = resume_text.clone();
            session.analysis = analysis.clone();
        }
        None => {
            sessions.insert(
                session_id,
                Session {
                    resume_text: resume_text.clone(),
                    analysis: analysis.clone(),
                    chat_log: Vec::new(),
                },
            );
        }
    }

    Ok(Json(ReviewResponse {
        session_id,
        analysis,
        resume_text,
    }))
}

/// GET /api/v1/review/:session_id
pub async fn handle_get_review(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReviewResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(ReviewResponse {
        session_id,
        analysis: session.analysis.clone(),
        resume_text: session.resume_text.clone(),
    }))
}

/// GET /api/v1/reference
/// The fixed reference resume, for display next to the review results.
pub async fn handle_reference() -> &'static str {
    STANDARD_RESUME
}
