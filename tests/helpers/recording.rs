//! Recording doubles for the outbound services

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use intake_bot::models::{OutboundMessage, UserId};
use intake_bot::services::{MessageDispatcher, TranscriptExporter};
use intake_bot::utils::errors::{ExportError, IntakeBotError, Result};

/// Dispatcher that records every payload it is asked to send
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<(UserId, OutboundMessage)>>,
    failing: AtomicBool,
}

impl RecordingDispatcher {
    pub fn sent(&self) -> Vec<(UserId, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }

    /// Payload kinds sent to one user, in order
    pub fn sent_to(&self, user_id: &UserId) -> Vec<OutboundMessage> {
        self.sent()
            .into_iter()
            .filter(|(u, _)| u == user_id)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl MessageDispatcher for RecordingDispatcher {
    async fn send(&self, user_id: &UserId, message: OutboundMessage) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(IntakeBotError::InvalidInput("dispatcher offline".to_string()));
        }
        self.sent.lock().unwrap().push((user_id.clone(), message));
        Ok(())
    }
}

/// Exporter that records successful exports and can be switched to fail
#[derive(Default)]
pub struct RecordingExporter {
    exports: Mutex<Vec<(UserId, String)>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingExporter {
    pub fn exports(&self) -> Vec<(UserId, String)> {
        self.exports.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl TranscriptExporter for RecordingExporter {
    async fn export(&self, user_id: &UserId, body: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ExportError::DeliveryFailed("mail relay unavailable".to_string()).into());
        }
        self.exports.lock().unwrap().push((user_id.clone(), body.to_string()));
        Ok(())
    }
}
