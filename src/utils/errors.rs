//! Error handling for IntakeBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for IntakeBot application
#[derive(Error, Debug)]
pub enum IntakeBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Transcript export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Transcript export specific errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No export recipients configured")]
    NoRecipients,

    #[error("Invalid export recipient: {0}")]
    InvalidRecipient(String),

    #[error("Transcript delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Result type alias for IntakeBot operations
pub type Result<T> = std::result::Result<T, IntakeBotError>;

impl IntakeBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            IntakeBotError::Telegram(_) => true,
            IntakeBotError::Export(ExportError::DeliveryFailed(_)) => true,
            IntakeBotError::Export(_) => false,
            IntakeBotError::ConfigLoad(_) => false,
            IntakeBotError::Config(_) => false,
            IntakeBotError::Io(_) => true,
            IntakeBotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IntakeBotError::ConfigLoad(_) => ErrorSeverity::Critical,
            IntakeBotError::Config(_) => ErrorSeverity::Critical,
            IntakeBotError::InvalidInput(_) => ErrorSeverity::Info,
            IntakeBotError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
