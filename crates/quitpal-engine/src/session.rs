use chrono::{DateTime, Utc};
use quitpal_core::{ProfilePayload, QuitpalResult, UserProfile};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::intent;
use crate::select::{select_reply, FALLBACK_REPLY};
use crate::similarity::score_rows;
use crate::store::SentenceStore;
use crate::vectorizer::TermCountMatrix;

/// One long-lived conversational session.
///
/// Owns the corpus-backed sentence store and the user profile. The store's
/// append → vectorize → rank → select → remove sequence runs under a
/// single lock so concurrent requests cannot interleave their transient
/// utterances.
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    store: Mutex<SentenceStore>,
    profile: RwLock<UserProfile>,
}

impl ChatSession {
    /// Create a session over the given corpus sentences.
    pub fn new(corpus: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            store: Mutex::new(SentenceStore::new(corpus)),
            profile: RwLock::new(UserProfile::default()),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of corpus sentences currently held.
    pub async fn corpus_len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Replace the profile wholesale from a raw payload, returning the
    /// normalized result.
    pub async fn initialize(&self, payload: ProfilePayload) -> UserProfile {
        let profile = UserProfile::from_payload(payload);
        *self.profile.write().await = profile.clone();
        debug!(session_id = %self.id, "session profile replaced");
        profile
    }

    /// A snapshot of the current profile.
    pub async fn profile(&self) -> UserProfile {
        self.profile.read().await.clone()
    }

    /// Produce the reply for one utterance.
    ///
    /// Fixed intents short-circuit first; otherwise the similarity engine
    /// runs. Engine-internal failures are absorbed into the fallback reply
    /// rather than surfaced to the caller.
    pub async fn respond(&self, utterance: &str) -> String {
        let lowered = utterance.to_lowercase();

        let profile = self.profile.read().await.clone();
        if let Some(reply) = intent::dispatch(&lowered, &profile) {
            return reply;
        }

        match self.similarity_reply(&lowered).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "similarity ranking failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// The critical section: append → vectorize → rank → select → remove.
    ///
    /// The transient utterance is removed on every path, including
    /// vectorizer failure, so the store always returns to its pre-query
    /// state.
    async fn similarity_reply(&self, utterance: &str) -> QuitpalResult<String> {
        let mut store = self.store.lock().await;
        let query_row = store.append(utterance);
        let result = Self::rank_and_select(store.sentences(), query_row);
        store.remove_at(query_row);
        result
    }

    fn rank_and_select(sentences: &[String], query_row: usize) -> QuitpalResult<String> {
        let matrix = TermCountMatrix::fit(sentences)?;
        let scores = score_rows(&matrix, query_row);
        Ok(select_reply(sentences, &scores, query_row))
    }
}
