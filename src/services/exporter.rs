//! Transcript export
//!
//! Approved conversations are handed to a [`TranscriptExporter`]. The intake
//! flow only supplies the formatted body; subject and destinations come from
//! [`ExportConfig`].

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use teloxide::{prelude::*, types::ChatId, Bot};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::models::UserId;
use crate::utils::errors::{ExportError, Result};
use crate::utils::helpers::{sanitize_filename, split_text};

/// Telegram rejects messages longer than 4096 UTF-16 code units
const TELEGRAM_MAX_UNITS: usize = 4000;

#[async_trait]
pub trait TranscriptExporter: Send + Sync {
    /// Deliver `body` for `user_id`. Any error means nothing may be assumed delivered.
    async fn export(&self, user_id: &UserId, body: &str) -> Result<()>;
}

/// Sends transcripts to a fixed list of staff chats through the bot.
///
/// A failure for any recipient fails the whole export, even if other
/// recipients already received it, so a retry may deliver duplicates.
#[derive(Clone)]
pub struct ChatTranscriptExporter {
    bot: Bot,
    recipients: Vec<ChatId>,
    subject: String,
}

impl ChatTranscriptExporter {
    pub fn new(bot: Bot, config: &ExportConfig) -> Result<Self> {
        let recipients = config
            .recipient_list()
            .into_iter()
            .map(|r| {
                r.parse::<i64>()
                    .map(ChatId)
                    .map_err(|_| ExportError::InvalidRecipient(r.clone()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if recipients.is_empty() {
            return Err(ExportError::NoRecipients.into());
        }

        Ok(Self {
            bot,
            recipients,
            subject: config.subject.clone(),
        })
    }
}

#[async_trait]
impl TranscriptExporter for ChatTranscriptExporter {
    async fn export(&self, user_id: &UserId, body: &str) -> Result<()> {
        let document = format!("{}\n\n{}", self.subject, body);
        let chunks = split_text(&document, TELEGRAM_MAX_UNITS);
        let mut failures = Vec::new();

        for chat_id in &self.recipients {
            for chunk in &chunks {
                if let Err(e) = self.bot.send_message(*chat_id, chunk.as_str()).await {
                    warn!(user_id = %user_id, chat_id = ?chat_id, error = %e, "Failed to deliver transcript");
                    failures.push(format!("{}: {}", chat_id.0, e));
                    break;
                }
            }
        }

        if !failures.is_empty() {
            return Err(ExportError::DeliveryFailed(failures.join("; ")).into());
        }

        info!(user_id = %user_id, recipients = self.recipients.len(), "Transcript delivered to chats");
        Ok(())
    }
}

/// Writes one text file per transcript
#[derive(Debug, Clone)]
pub struct FileTranscriptExporter {
    directory: PathBuf,
    subject: String,
}

impl FileTranscriptExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            subject: config.subject.clone(),
        }
    }

    fn file_name(user_id: &UserId) -> String {
        format!(
            "{}_{}_{}.txt",
            Utc::now().format("%Y%m%dT%H%M%S"),
            sanitize_filename(user_id.as_str()),
            Uuid::new_v4()
        )
    }
}

#[async_trait]
impl TranscriptExporter for FileTranscriptExporter {
    async fn export(&self, user_id: &UserId, body: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory).await?;

        let path = self.directory.join(Self::file_name(user_id));
        debug!(user_id = %user_id, path = %path.display(), "Writing transcript file");
        tokio::fs::write(&path, format!("{}\n\n{}", self.subject, body)).await?;

        info!(user_id = %user_id, path = %path.display(), "Transcript written");
        Ok(())
    }
}
