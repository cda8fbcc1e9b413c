//! Test helpers module
//!
//! This module provides utilities and helpers for testing the intake bot:
//! recording doubles for the outbound services, a mock Telegram Bot API
//! server and small event builders.

#![allow(dead_code)]

pub mod recording;
pub mod telegram_mock;

pub use recording::*;
pub use telegram_mock::*;

use std::sync::{Arc, Once};
use std::time::Duration;

use intake_bot::models::{IntakeEvent, UserId};
use intake_bot::IntakeMachine;

static INIT: Once = Once::new();

/// Base timestamp for test events: 2024-05-01T09:30:00Z
pub const BASE_MILLIS: i64 = 1_714_555_800_000;

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Build a text event `offset_secs` after [`BASE_MILLIS`]
pub fn text_event(user_id: &UserId, text: &str, offset_secs: i64) -> IntakeEvent {
    IntakeEvent::new(user_id.clone(), text, BASE_MILLIS + offset_secs * 1000)
}

/// Intake machine wired to recording doubles
pub struct TestIntake {
    pub machine: IntakeMachine,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub exporter: Arc<RecordingExporter>,
}

impl TestIntake {
    pub fn new(reprompt_delay: Duration) -> Self {
        init_test_env();

        let dispatcher = Arc::new(RecordingDispatcher::default());
        let exporter = Arc::new(RecordingExporter::default());
        let machine = IntakeMachine::new(dispatcher.clone(), exporter.clone(), reprompt_delay);

        Self {
            machine,
            dispatcher,
            exporter,
        }
    }
}
