//! Logging middleware
//!
//! This module provides logging for inbound chat updates and handling
//! latency. Message text may contain phone numbers, so it is only logged
//! when explicitly enabled.

use std::time::Instant;
use teloxide::types::Message;
use tracing::{debug, info, warn, Span};
use serde_json::json;

use crate::config::LoggingConfig;
use crate::utils::helpers::truncate_text;

const TEXT_PREVIEW_CHARS: usize = 40;

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_message_text: bool,
    log_performance: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_message_text: bool, log_performance: bool) -> Self {
        Self {
            log_message_text,
            log_performance,
        }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.log_message_text, true)
    }

    /// Log an inbound message and return its type name
    pub fn log_message(&self, message: &Message) -> &'static str {
        let user_info = message.from.as_ref().map(|user| {
            json!({
                "id": user.id.0,
                "is_bot": user.is_bot,
            })
        });

        let chat_info = json!({
            "id": message.chat.id.0,
            "private": message.chat.is_private(),
        });

        let message_type = match &message.kind {
            teloxide::types::MessageKind::Common(common) => match &common.media_kind {
                teloxide::types::MediaKind::Text(_) => "text",
                teloxide::types::MediaKind::Photo(_) => "photo",
                teloxide::types::MediaKind::Sticker(_) => "sticker",
                teloxide::types::MediaKind::Voice(_) => "voice",
                _ => "other_media",
            },
            _ => "other",
        };

        if self.log_message_text {
            if let Some(text) = message.text() {
                debug!(
                    chat = %chat_info,
                    text = %truncate_text(text, TEXT_PREVIEW_CHARS),
                    "Text message received"
                );
            }
        }

        info!(
            user = ?user_info,
            chat = %chat_info,
            message_type = message_type,
            message_id = message.id.0,
            "Message received"
        );

        message_type
    }

    /// Log an update that never reaches the intake flow
    pub fn log_ignored(&self, message: &Message, reason: &str) {
        debug!(
            chat_id = message.chat.id.0,
            message_id = message.id.0,
            reason = reason,
            "Message ignored"
        );
    }

    /// Create a performance tracking span
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        if self.log_performance {
            Some(PerformanceTracker::new(operation.to_string()))
        } else {
            None
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(false, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::info_span!("performance", operation = %operation);

        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;

        if success {
            debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation completed successfully"
            );
        } else {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        if duration_ms > 1000 {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }
}
