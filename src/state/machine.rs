//! Intake state machine
//!
//! Drives the per-user intake conversation. A user is `Idle` until a valid
//! phone number shows up in one of their messages, then `AwaitingApproval`
//! until they answer the confirmation card with one of the canonical phrases.
//!
//! Every inbound text is appended to the user's history before anything else
//! happens. History is only cleared after a successful transcript export.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::models::{IntakeEvent, OutboundMessage, UserId, AFFIRMATIVE_PHRASE, NEGATIVE_PHRASE};
use crate::services::{MessageDispatcher, TranscriptExporter};
use crate::utils::logging;
use crate::utils::phone;

use super::approval::ApprovalTracker;
use super::conversation::ConversationStore;
use super::scheduler::RepromptScheduler;
use super::transcript::format_transcript;

/// Derived per-user state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    Idle,
    AwaitingApproval,
}

/// What handling one inbound text resulted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Message logged, nothing else to do
    Logged,
    /// Valid phone number found, confirmation card sent
    ConfirmationRequested,
    /// Transcript exported and state cleared
    Approved,
    /// Export failed; history and pending approval left as they were
    ExportFailed,
    /// Decline acknowledged, confirmation card re-sent after the delay
    Declined,
    /// Phone-like text with characters other than digits and hyphens
    InvalidPhoneFormat,
}

impl IntakeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeOutcome::Logged => "logged",
            IntakeOutcome::ConfirmationRequested => "confirmation_requested",
            IntakeOutcome::Approved => "approved",
            IntakeOutcome::ExportFailed => "export_failed",
            IntakeOutcome::Declined => "declined",
            IntakeOutcome::InvalidPhoneFormat => "invalid_phone_format",
        }
    }
}

pub struct IntakeMachine {
    conversations: Arc<ConversationStore>,
    approvals: Arc<ApprovalTracker>,
    reprompts: RepromptScheduler,
    dispatcher: Arc<dyn MessageDispatcher>,
    exporter: Arc<dyn TranscriptExporter>,
    reprompt_delay: Duration,
}

impl IntakeMachine {
    pub fn new(
        dispatcher: Arc<dyn MessageDispatcher>,
        exporter: Arc<dyn TranscriptExporter>,
        reprompt_delay: Duration,
    ) -> Self {
        Self::with_stores(
            Arc::new(ConversationStore::new()),
            Arc::new(ApprovalTracker::new()),
            dispatcher,
            exporter,
            reprompt_delay,
        )
    }

    /// Build around existing stores
    pub fn with_stores(
        conversations: Arc<ConversationStore>,
        approvals: Arc<ApprovalTracker>,
        dispatcher: Arc<dyn MessageDispatcher>,
        exporter: Arc<dyn TranscriptExporter>,
        reprompt_delay: Duration,
    ) -> Self {
        Self {
            conversations,
            approvals,
            reprompts: RepromptScheduler::new(),
            dispatcher,
            exporter,
            reprompt_delay,
        }
    }

    pub fn conversations(&self) -> &Arc<ConversationStore> {
        &self.conversations
    }

    pub fn approvals(&self) -> &Arc<ApprovalTracker> {
        &self.approvals
    }

    pub async fn state(&self, user_id: &UserId) -> IntakeState {
        if self.approvals.is_pending(user_id).await {
            IntakeState::AwaitingApproval
        } else {
            IntakeState::Idle
        }
    }

    /// Apply one inbound text event. Never fails: delivery and export problems
    /// are logged and reflected in the returned outcome.
    pub async fn handle_text(&self, event: IntakeEvent) -> IntakeOutcome {
        let IntakeEvent { user_id, text, .. } = &event;

        self.conversations
            .append(user_id, text, event.timestamp())
            .await;

        let outcome = match self.state(user_id).await {
            IntakeState::AwaitingApproval => {
                if text == AFFIRMATIVE_PHRASE {
                    self.on_approve(user_id).await
                } else if text == NEGATIVE_PHRASE {
                    self.on_decline(user_id).await
                } else {
                    debug!(user_id = %user_id, "Unrelated text while awaiting approval");
                    IntakeOutcome::Logged
                }
            }
            IntakeState::Idle => {
                let verdict = phone::evaluate(text);
                if verdict.is_no_match_like() {
                    debug!(user_id = %user_id, verdict = ?verdict, "No usable phone number");
                    IntakeOutcome::Logged
                } else if verdict.is_valid() {
                    self.on_phone_detected(user_id).await
                } else {
                    self.send(user_id, OutboundMessage::InvalidPhoneFormat).await;
                    IntakeOutcome::InvalidPhoneFormat
                }
            }
        };

        logging::log_intake_outcome(user_id, outcome.as_str());
        outcome
    }

    async fn on_phone_detected(&self, user_id: &UserId) -> IntakeOutcome {
        // The card goes out now, so a re-prompt still waiting from a decline is redundant
        self.reprompts.cancel(user_id).await;
        self.approvals.mark_pending(user_id, Utc::now()).await;
        self.send(user_id, OutboundMessage::ConfirmationCard).await;
        IntakeOutcome::ConfirmationRequested
    }

    async fn on_approve(&self, user_id: &UserId) -> IntakeOutcome {
        let entries = self.conversations.get_all(user_id).await;
        let body = format_transcript(user_id, &entries);

        if let Err(e) = self.exporter.export(user_id, &body).await {
            logging::log_export_result(user_id, entries.len(), Some(&e));
            return IntakeOutcome::ExportFailed;
        }
        logging::log_export_result(user_id, entries.len(), None);

        self.send(user_id, OutboundMessage::ApprovalAcknowledged).await;
        self.reprompts.cancel(user_id).await;
        self.conversations.clear(user_id).await;
        self.approvals.clear_pending(user_id).await;

        info!(user_id = %user_id, entries = entries.len(), "Intake approved");
        IntakeOutcome::Approved
    }

    async fn on_decline(&self, user_id: &UserId) -> IntakeOutcome {
        self.send(user_id, OutboundMessage::DeclineAcknowledged).await;
        self.approvals.clear_pending(user_id).await;

        let approvals = Arc::clone(&self.approvals);
        let dispatcher = Arc::clone(&self.dispatcher);
        let target = user_id.clone();
        self.reprompts
            .schedule(user_id, self.reprompt_delay, async move {
                approvals.mark_pending(&target, Utc::now()).await;
                if let Err(e) = dispatcher.send(&target, OutboundMessage::ConfirmationCard).await {
                    warn!(user_id = %target, error = %e, "Failed to re-send confirmation card");
                }
                debug!(user_id = %target, "Confirmation card re-sent after decline");
            })
            .await;

        info!(user_id = %user_id, "Intake declined, re-prompt scheduled");
        IntakeOutcome::Declined
    }

    /// Fire-and-forget delivery
    async fn send(&self, user_id: &UserId, message: OutboundMessage) {
        if let Err(e) = self.dispatcher.send(user_id, message).await {
            warn!(user_id = %user_id, kind = message.kind(), error = %e, "Failed to dispatch message");
        }
    }
}
