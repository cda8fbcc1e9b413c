//! Message handlers module
//!
//! Inbound event source for the intake flow: private-chat text messages
//! become [`IntakeEvent`]s, everything else is dropped here.

use std::sync::Arc;

use teloxide::types::Message;
use tracing::debug;

use crate::middleware::LoggingMiddleware;
use crate::models::IntakeEvent;
use crate::state::{IntakeMachine, IntakeOutcome};
use crate::utils::errors::Result;

/// Convert a Telegram message into an intake event, if it is one
pub fn intake_event_from_message(msg: &Message) -> Option<IntakeEvent> {
    if !msg.chat.is_private() {
        return None;
    }

    let text = msg.text()?;
    Some(IntakeEvent::new(
        msg.chat.id.0.to_string(),
        text,
        msg.date.timestamp_millis(),
    ))
}

/// Handle an incoming message
pub async fn handle_message(
    msg: Message,
    machine: Arc<IntakeMachine>,
    logging: Arc<LoggingMiddleware>,
) -> Result<Option<IntakeOutcome>> {
    let message_type = logging.log_message(&msg);

    let event = match intake_event_from_message(&msg) {
        Some(event) => event,
        None => {
            let reason = if msg.chat.is_private() { "not_text" } else { "not_private_chat" };
            logging.log_ignored(&msg, reason);
            return Ok(None);
        }
    };

    debug!(user_id = %event.user_id, message_type = message_type, "Dispatching to intake flow");

    let tracker = logging.create_performance_span("intake_event");
    let outcome = machine.handle_text(event).await;
    if let Some(tracker) = tracker {
        tracker.complete(outcome != IntakeOutcome::ExportFailed);
    }

    Ok(Some(outcome))
}
