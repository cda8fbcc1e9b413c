//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the IntakeBot application.

use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::UserId;
use crate::utils::errors::{IntakeBotError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the application runs.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "intake_bot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
        .try_init()
        .map_err(|e| IntakeBotError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the result of handling one inbound text
pub fn log_intake_outcome(user_id: &UserId, outcome: &str) {
    info!(
        user_id = %user_id,
        outcome = outcome,
        "Intake event handled"
    );
}

/// Log transcript export attempts
pub fn log_export_result(user_id: &UserId, entries: usize, failure: Option<&IntakeBotError>) {
    match failure {
        None => info!(
            user_id = %user_id,
            entries = entries,
            "Transcript exported"
        ),
        Some(e) => error!(
            user_id = %user_id,
            entries = entries,
            error = %e,
            recoverable = e.is_recoverable(),
            severity = %e.severity(),
            "Transcript export failed; state left untouched"
        ),
    }
}
