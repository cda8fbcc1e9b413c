//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub intake: IntakeConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Intake flow configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntakeConfig {
    /// Delay before the confirmation card is shown again after a decline
    pub reprompt_delay_seconds: u64,
}

/// Where approved transcripts go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Send to the recipient chats through the bot
    Chat,
    /// Write one text file per transcript
    File,
}

/// Transcript export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub mode: ExportMode,
    /// Comma-separated recipient chat ids
    pub recipients: String,
    pub subject: String,
    pub directory: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    /// Include a preview of inbound message text in debug logs
    pub log_message_text: bool,
}

impl ExportConfig {
    /// Recipient list with blanks removed
    pub fn recipient_list(&self) -> Vec<String> {
        self.recipients
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("INTAKE_BOT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Load settings from a TOML document layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Settings::default();
        config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("intake.reprompt_delay_seconds", defaults.intake.reprompt_delay_seconds as i64)?
            .set_default("export.mode", "chat")?
            .set_default("export.recipients", defaults.export.recipients)?
            .set_default("export.subject", defaults.export.subject)?
            .set_default("export.directory", defaults.export.directory)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .set_default("logging.log_message_text", defaults.logging.log_message_text)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::IntakeBotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            intake: IntakeConfig {
                reprompt_delay_seconds: 1,
            },
            export: ExportConfig {
                mode: ExportMode::Chat,
                recipients: String::new(),
                subject: "【お問い合わせ】チャット履歴".to_string(),
                directory: "./transcripts".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
                log_message_text: false,
            },
        }
    }
}
