//! IntakeBot Telegram Bot
//!
//! A chat bot for customer intake: it keeps each user's message history,
//! watches for a contact phone number, asks the user to confirm and then
//! hands the whole conversation transcript to staff.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{IntakeBotError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{IntakeMachine, IntakeOutcome, IntakeState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
