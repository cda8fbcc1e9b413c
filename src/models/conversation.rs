//! Conversation models

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a chat participant by the messaging platform
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One logged inbound text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationEntry {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            timestamp,
        }
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Text message event delivered by the inbound event source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeEvent {
    pub user_id: UserId,
    pub text: String,
    pub timestamp_millis: i64,
}

impl IntakeEvent {
    pub fn new(user_id: impl Into<UserId>, text: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
            timestamp_millis,
        }
    }

    /// Event time, falling back to now for out-of-range timestamps
    pub fn timestamp(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_millis)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_conversion() {
        let event = IntakeEvent::new("U1", "hello", 1_714_555_800_123);
        let entry = ConversationEntry::new(event.text.clone(), event.timestamp());
        assert_eq!(entry.timestamp_iso(), "2024-05-01T09:30:00.123Z");
    }

    #[test]
    fn test_user_id_display() {
        let user_id = UserId::from("U1234");
        assert_eq!(user_id.to_string(), "U1234");
        assert_eq!(user_id.as_str(), "U1234");
    }
}
