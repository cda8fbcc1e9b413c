//! Pending approval model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker stored for every user with an outstanding confirmation prompt
pub const PENDING_MARKER: &str = "awaiting_approval";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingApproval {
    pub marker: String,
    pub timestamp: DateTime<Utc>,
}

impl PendingApproval {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            marker: PENDING_MARKER.to_string(),
            timestamp,
        }
    }
}
