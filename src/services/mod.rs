//! Services module
//!
//! Outbound collaborators of the intake flow: message delivery and
//! transcript export.

pub mod dispatcher;
pub mod exporter;

// Re-export commonly used services
pub use dispatcher::{MessageDispatcher, TelegramDispatcher};
pub use exporter::{ChatTranscriptExporter, FileTranscriptExporter, TranscriptExporter};

use std::sync::Arc;

use teloxide::Bot;
use tracing::info;

use crate::config::{ExportMode, Settings};
use crate::utils::errors::Result;

/// Service factory for creating and wiring the outbound services
#[derive(Clone)]
pub struct ServiceFactory {
    pub dispatcher: Arc<dyn MessageDispatcher>,
    pub exporter: Arc<dyn TranscriptExporter>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with the exporter selected by `export.mode`
    pub fn new(bot: Bot, settings: &Settings) -> Result<Self> {
        let dispatcher: Arc<dyn MessageDispatcher> = Arc::new(TelegramDispatcher::new(bot.clone()));

        let exporter: Arc<dyn TranscriptExporter> = match settings.export.mode {
            ExportMode::Chat => Arc::new(ChatTranscriptExporter::new(bot, &settings.export)?),
            ExportMode::File => Arc::new(FileTranscriptExporter::new(&settings.export)),
        };
        info!(mode = ?settings.export.mode, "Transcript exporter configured");

        Ok(Self { dispatcher, exporter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_mode_needs_no_recipients() {
        let mut settings = Settings::default();
        settings.export.mode = ExportMode::File;
        assert!(ServiceFactory::new(Bot::new("12345:test_token"), &settings).is_ok());
    }

    #[test]
    fn test_chat_mode_without_recipients_fails() {
        let settings = Settings::default();
        assert!(ServiceFactory::new(Bot::new("12345:test_token"), &settings).is_err());
    }
}
