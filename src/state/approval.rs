//! Approval tracker
//!
//! Remembers which users have an outstanding confirm/decline prompt.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{PendingApproval, UserId};

#[derive(Debug, Default)]
pub struct ApprovalTracker {
    pending: RwLock<HashMap<UserId, PendingApproval>>,
}

impl ApprovalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a user as awaiting approval; refreshes the timestamp if already pending
    pub async fn mark_pending(&self, user_id: &UserId, timestamp: DateTime<Utc>) {
        self.pending
            .write()
            .await
            .insert(user_id.clone(), PendingApproval::new(timestamp));
        debug!(user_id = %user_id, "Approval marked pending");
    }

    pub async fn is_pending(&self, user_id: &UserId) -> bool {
        self.pending.read().await.contains_key(user_id)
    }

    pub async fn get(&self, user_id: &UserId) -> Option<PendingApproval> {
        self.pending.read().await.get(user_id).cloned()
    }

    pub async fn clear_pending(&self, user_id: &UserId) {
        if self.pending.write().await.remove(user_id).is_some() {
            debug!(user_id = %user_id, "Pending approval cleared");
        }
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}
