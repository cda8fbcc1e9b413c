//! Bot handlers module
//!
//! This module contains the Telegram bot handlers. Only text messages take
//! part in the intake flow.

pub mod messages;

// Re-export commonly used handler functions
pub use messages::*;
