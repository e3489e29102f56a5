use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::responder;
use crate::errors::AppError;
use crate::models::session::ChatTurn;
use crate::state::AppState;

/// Most recent turns shown by default. The full log is always retained.
pub const DISPLAY_TURNS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<Uuid>,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    /// False when no completed review exists and the guidance message was
    /// returned instead of a responder answer.
    pub answered: bool,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }

    let Some(session_id) = req.session_id else {
        return Ok(Json(ChatResponse {
            answer: responder::REVIEW_FIRST.to_string(),
            answered: false,
        }));
    };

    let mut sessions = state.sessions.write().await;
    let Some(session) = sessions.get_mut(&session_id) else {
        return Ok(Json(ChatResponse {
            answer: responder::REVIEW_FIRST.to_string(),
            answered: false,
        }));
    };

    let answer = responder::respond(&req.query, &session.analysis);
    session.chat_log.push(ChatTurn {
        question: req.query,
        answer: answer.clone(),
        asked_at: Utc::now(),
    });

    Ok(Json(ChatResponse {
        answer,
        answered: true,
    }))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub session_id: Uuid,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub turns: Vec<ChatTurn>,
    pub total: usize,
}

/// GET /api/v1/chat/history
/// Returns the most recent `limit` turns (default [`DISPLAY_TURNS`]) plus
/// the total retained count.
pub async fn handle_chat_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&params.session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", params.session_id)))?;

    let limit = params.limit.unwrap_or(DISPLAY_TURNS);
    let total = session.chat_log.len();
    let turns = session
        .chat_log
        .iter()
        .skip(total.saturating_sub(limit))
        .cloned()
        .collect();

    Ok(Json(ChatHistoryResponse { turns, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::Config;
    use crate::models::session::Session;

    fn test_state() -> AppState {
        AppState::new(Config {
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes: 1024 * 1024,
        })
    }

    async fn state_with_session(text: &str) -> (AppState, Uuid) {
        let state = test_state();
        let id = Uuid::new_v4();
        state.sessions.write().await.insert(
            id,
            Session {
                resume_text: text.to_string(),
                analysis: analyze(text),
                chat_log: Vec::new(),
            },
        );
        (state, id)
    }

    #[tokio::test]
    async fn test_chat_without_session_returns_guidance() {
        let response = handle_chat(
            State(test_state()),
            Json(ChatRequest {
                session_id: None,
                query: "how good is my resume?".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.answer, responder::REVIEW_FIRST);
        assert!(!response.0.answered);
    }

    #[tokio::test]
    async fn test_chat_with_unknown_session_returns_guidance() {
        let response = handle_chat(
            State(test_state()),
            Json(ChatRequest {
                session_id: Some(Uuid::new_v4()),
                query: "what is my rating?".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.answer, responder::REVIEW_FIRST);
        assert!(!response.0.answered);
    }

    #[tokio::test]
    async fn test_chat_appends_to_the_session_log() {
        let (state, id) = state_with_session("Professional Experience at Tech Corp").await;
        let response = handle_chat(
            State(state.clone()),
            Json(ChatRequest {
                session_id: Some(id),
                query: "what is my rating?".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(response.0.answered);

        let sessions = state.sessions.read().await;
        let log = &sessions.get(&id).unwrap().chat_log;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].question, "what is my rating?");
        assert_eq!(log[0].answer, response.0.answer);
    }

    #[tokio::test]
    async fn test_empty_query_is_a_validation_error() {
        let (state, id) = state_with_session("resume").await;
        let result = handle_chat(
            State(state),
            Json(ChatRequest {
                session_id: Some(id),
                query: "   ".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_history_returns_display_window_but_retains_all() {
        let (state, id) = state_with_session("resume text").await;
        for i in 0..7 {
            handle_chat(
                State(state.clone()),
                Json(ChatRequest {
                    session_id: Some(id),
                    query: format!("what is my rating? ({i})"),
                }),
            )
            .await
            .unwrap();
        }

        let response = handle_chat_history(
            State(state.clone()),
            Query(HistoryQuery {
                session_id: id,
                limit: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.total, 7);
        assert_eq!(response.0.turns.len(), DISPLAY_TURNS);
        // The window is the most recent turns, oldest first
        assert_eq!(response.0.turns[0].question, "what is my rating? (2)");
        assert_eq!(response.0.turns[4].question, "what is my rating? (6)");
    }

    #[tokio::test]
    async fn test_history_unknown_session_is_not_found() {
        let result = handle_chat_history(
            State(test_state()),
            Query(HistoryQuery {
                session_id: Uuid::new_v4(),
                limit: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
