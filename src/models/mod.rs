//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod approval;
pub mod conversation;
pub mod outbound;

// Re-export commonly used models
pub use approval::{PendingApproval, PENDING_MARKER};
pub use conversation::{ConversationEntry, IntakeEvent, UserId};
pub use outbound::{OutboundMessage, AFFIRMATIVE_PHRASE, NEGATIVE_PHRASE};
