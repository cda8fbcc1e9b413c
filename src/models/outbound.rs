//! Outbound message payloads
//!
//! The texts below are part of the contract with the chat platform: the two
//! canonical phrases are echoed back verbatim when the user taps a reply
//! button, and the intake flow compares them byte-for-byte.

use serde::{Deserialize, Serialize};

/// Canonical affirmative reply
pub const AFFIRMATIVE_PHRASE: &str = "はい、大丈夫です";

/// Canonical negative reply
pub const NEGATIVE_PHRASE: &str = "いいえ、結構です";

pub const CONFIRMATION_TEXT: &str = "ご入力いただいた内容で担当者へお問い合わせを送信してもよろしいですか？";
pub const APPROVAL_ACK_TEXT: &str = "お問い合わせを受け付けました。担当者より折り返しご連絡いたします。";
pub const DECLINE_ACK_TEXT: &str = "承知しました。内容を修正される場合は、続けてメッセージをお送りください。";
pub const INVALID_PHONE_TEXT: &str = "電話番号の形式が正しくありません。半角数字とハイフンのみでご入力ください。";

/// Payload kinds the intake flow can push to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutboundMessage {
    /// Prompt with two reply actions carrying the canonical phrases
    ConfirmationCard,
    ApprovalAcknowledged,
    DeclineAcknowledged,
    InvalidPhoneFormat,
}

impl OutboundMessage {
    pub fn text(&self) -> &'static str {
        match self {
            OutboundMessage::ConfirmationCard => CONFIRMATION_TEXT,
            OutboundMessage::ApprovalAcknowledged => APPROVAL_ACK_TEXT,
            OutboundMessage::DeclineAcknowledged => DECLINE_ACK_TEXT,
            OutboundMessage::InvalidPhoneFormat => INVALID_PHONE_TEXT,
        }
    }

    /// Reply actions, each used as both button label and echoed text
    pub fn reply_actions(&self) -> Option<[&'static str; 2]> {
        match self {
            OutboundMessage::ConfirmationCard => Some([AFFIRMATIVE_PHRASE, NEGATIVE_PHRASE]),
            _ => None,
        }
    }

    /// Short name for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::ConfirmationCard => "confirmation_card",
            OutboundMessage::ApprovalAcknowledged => "approval_ack",
            OutboundMessage::DeclineAcknowledged => "decline_ack",
            OutboundMessage::InvalidPhoneFormat => "invalid_phone_format",
        }
    }
}
