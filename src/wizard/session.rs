//! Session store: in-memory per-session wizard state with idle expiry.
//!
//! Each session sits behind its own mutex, so interactions on one session
//! run strictly one after another while different sessions never contend.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::llm::LlmProvider;

use super::machine::{RenderOutcome, WizardAction, render};
use super::state::WizardState;

/// How often the expiry task sweeps for idle sessions.
const EXPIRY_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// One user's wizard session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub state: WizardState,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: WizardState::default(),
            created_at: now,
            last_active: now,
        }
    }

    fn is_idle(&self, idle_timeout: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.last_active > idle_timeout
    }
}

/// In-memory store of wizard sessions keyed by session id.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
    idle_timeout: chrono::Duration,
}

impl SessionStore {
    /// Create a new store. Sessions idle for longer than `idle_timeout` are
    /// removed by [`SessionStore::expire_idle`].
    pub fn new(idle_timeout: Duration) -> Arc<Self> {
        let idle_timeout =
            chrono::Duration::from_std(idle_timeout).unwrap_or(chrono::Duration::MAX);
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        })
    }

    /// Start a fresh session and return its id.
    pub async fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        info!(session_id = %id, "Wizard session created");
        id
    }

    /// Snapshot a session.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    /// End a session. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Wizard session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Run one wizard interaction against a stored session and keep the
    /// resulting state. Returns `None` for an unknown session.
    pub async fn interact(
        &self,
        id: Uuid,
        action: Option<WizardAction>,
        llm: &dyn LlmProvider,
    ) -> Option<RenderOutcome> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;

        let outcome = render(session.state.clone(), action, llm).await;
        session.state = outcome.state.clone();
        session.last_active = Utc::now();
        debug!(session_id = %id, stage = %outcome.view.stage, "Session state saved");

        Some(outcome)
    }

    /// Remove sessions idle for longer than the timeout. Sessions in the
    /// middle of an interaction are left alone. Returns how many were removed.
    pub async fn expire_idle(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => !session.is_idle(self.idle_timeout, now),
            Err(_) => true,
        });
        let expired = before - sessions.len();
        if expired > 0 {
            info!(expired, remaining = sessions.len(), "Expired idle wizard sessions");
        }
        expired
    }

    async fn handle(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(&id).cloned()
    }
}

/// Spawn a background task that expires idle sessions every minute.
pub fn spawn_expiry_task(store: Arc<SessionStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EXPIRY_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            store.expire_idle().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::LlmError;
    use crate::llm::{CompletionRequest, CompletionResponse};
    use crate::wizard::machine::FieldEdit;
    use crate::wizard::state::WizardStage;

    struct NoLlm;

    #[async_trait]
    impl LlmProvider for NoLlm {
        fn model_name(&self) -> &str {
            "none"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::ServiceUnavailable {
                provider: "none".to_string(),
                reason: "not used in session tests".to_string(),
            })
        }
    }

    fn sport(value: &str) -> Option<WizardAction> {
        Some(WizardAction::Edit {
            edit: FieldEdit::Sport(value.to_string()),
        })
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = SessionStore::new(Duration::from_secs(3600));
        assert!(store.is_empty().await);

        let id = store.create().await;
        assert_eq!(store.len().await, 1);

        let session = store.get(id).await.unwrap();
        assert_eq!(session.id, id);
        assert_eq!(session.state, WizardState::default());
    }

    #[tokio::test]
    async fn interact_persists_state() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create().await;

        let outcome = store.interact(id, sport("Rowing"), &NoLlm).await.unwrap();
        assert_eq!(outcome.view.stage, WizardStage::Start);

        let session = store.get(id).await.unwrap();
        assert_eq!(session.state.sport, "Rowing");
        assert!(session.last_active >= session.created_at);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let a = store.create().await;
        let b = store.create().await;

        store.interact(a, sport("Rowing"), &NoLlm).await.unwrap();
        store.interact(b, sport("Sailing"), &NoLlm).await.unwrap();

        assert_eq!(store.get(a).await.unwrap().state.sport, "Rowing");
        assert_eq!(store.get(b).await.unwrap().state.sport, "Sailing");
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let store = SessionStore::new(Duration::from_secs(3600));
        assert!(store.get(Uuid::new_v4()).await.is_none());
        assert!(store.interact(Uuid::new_v4(), None, &NoLlm).await.is_none());
        assert!(!store.remove(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn remove_ends_session() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create().await;
        assert!(store.remove(id).await);
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn expire_idle_removes_only_idle_sessions() {
        let store = SessionStore::new(Duration::from_millis(50));
        let stale = store.create().await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        let fresh = store.create().await;

        let expired = store.expire_idle().await;
        assert_eq!(expired, 1);
        assert!(store.get(stale).await.is_none());
        assert!(store.get(fresh).await.is_some());
    }

    #[tokio::test]
    async fn zero_timeout_keeps_nothing_idle() {
        let store = SessionStore::new(Duration::ZERO);
        store.create().await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.expire_idle().await, 1);
        assert!(store.is_empty().await);
    }
}
