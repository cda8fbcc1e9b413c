//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, phone number validation and
//! helper functions.

pub mod errors;
pub mod helpers;
pub mod logging;
pub mod phone;

pub use errors::{IntakeBotError, Result};
