use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::session::Session;

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// Each session is one map entry, mutated in a single write under the lock,
/// so a half-updated analysis is never observable and sessions cannot see
/// each other's state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
