//! State management module
//!
//! This module holds the in-memory conversation state and the intake state
//! machine that drives it.

pub mod approval;
pub mod conversation;
pub mod machine;
pub mod scheduler;
pub mod transcript;

// Re-export commonly used state components
pub use approval::ApprovalTracker;
pub use conversation::ConversationStore;
pub use machine::{IntakeMachine, IntakeOutcome, IntakeState};
pub use scheduler::RepromptScheduler;
pub use transcript::format_transcript;
