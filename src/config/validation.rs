//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{IntakeBotError, Result};
use super::{ExportMode, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(IntakeBotError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate transcript export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.subject.trim().is_empty() {
        return Err(IntakeBotError::Config(
            "Export subject is required".to_string()
        ));
    }

    match config.mode {
        ExportMode::Chat => {
            let recipients = config.recipient_list();
            if recipients.is_empty() {
                return Err(IntakeBotError::Config(
                    "At least one export recipient must be configured".to_string()
                ));
            }

            if let Some(bad) = recipients.iter().find(|r| r.parse::<i64>().is_err()) {
                return Err(IntakeBotError::Config(
                    format!("Export recipient is not a chat id: {}", bad)
                ));
            }
        }
        ExportMode::File => {
            if config.directory.trim().is_empty() {
                return Err(IntakeBotError::Config(
                    "Export directory is required".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(IntakeBotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(IntakeBotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings.export.recipients = "111,222".to_string();
        settings
    }

    #[test]
    fn test_valid_settings() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token() {
        let mut settings = valid_settings();
        settings.bot.token.clear();
        assert!(matches!(validate_settings(&settings), Err(IntakeBotError::Config(_))));
    }

    #[test]
    fn test_chat_export_needs_numeric_recipients() {
        let mut settings = valid_settings();
        settings.export.recipients = " , ".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.export.recipients = "111,ops@example.com".to_string();
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("ops@example.com"));
    }

    #[test]
    fn test_file_export_ignores_recipients() {
        let mut settings = valid_settings();
        settings.export.mode = ExportMode::File;
        settings.export.recipients.clear();
        assert!(validate_settings(&settings).is_ok());

        settings.export.directory.clear();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
