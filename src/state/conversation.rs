//! Conversation store
//!
//! In-memory, per-user, append-only message history. Lives for the lifetime
//! of the process; nothing here is persisted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{ConversationEntry, UserId};

#[derive(Debug, Default)]
pub struct ConversationStore {
    histories: RwLock<HashMap<UserId, Vec<ConversationEntry>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, creating the user's history on first use
    pub async fn append(&self, user_id: &UserId, text: &str, timestamp: DateTime<Utc>) {
        let mut histories = self.histories.write().await;
        let history = histories.entry(user_id.clone()).or_default();
        history.push(ConversationEntry::new(text, timestamp));
        debug!(user_id = %user_id, entries = history.len(), "Message appended to history");
    }

    /// All entries for a user in arrival order
    pub async fn get_all(&self, user_id: &UserId) -> Vec<ConversationEntry> {
        self.histories
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop a user's whole history
    pub async fn clear(&self, user_id: &UserId) {
        if self.histories.write().await.remove(user_id).is_some() {
            debug!(user_id = %user_id, "Conversation history cleared");
        }
    }

    pub async fn len(&self, user_id: &UserId) -> usize {
        self.histories.read().await.get(user_id).map_or(0, Vec::len)
    }

    /// Number of users with a non-empty history
    pub async fn user_count(&self) -> usize {
        self.histories.read().await.len()
    }
}
