//! Outbound message delivery
//!
//! The intake flow talks to the chat platform only through [`MessageDispatcher`].
//! [`TelegramDispatcher`] is the production implementation.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove},
    Bot,
};
use tracing::debug;

use crate::models::{OutboundMessage, UserId};
use crate::utils::errors::{IntakeBotError, Result};

/// Push one payload to one user
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(&self, user_id: &UserId, message: OutboundMessage) -> Result<()>;
}

/// Dispatcher backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramDispatcher {
    bot: Bot,
}

impl TelegramDispatcher {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Private-chat user ids double as chat ids on Telegram
pub fn parse_chat_id(user_id: &UserId) -> Result<ChatId> {
    user_id
        .as_str()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| IntakeBotError::InvalidInput(format!("Not a Telegram chat id: {}", user_id)))
}

/// One-time reply keyboard; tapping a button sends its label back verbatim
fn reply_keyboard(actions: [&str; 2]) -> KeyboardMarkup {
    KeyboardMarkup::new(vec![actions.iter().map(|a| KeyboardButton::new(*a)).collect::<Vec<_>>()])
        .resize_keyboard()
        .one_time_keyboard()
}

#[async_trait]
impl MessageDispatcher for TelegramDispatcher {
    async fn send(&self, user_id: &UserId, message: OutboundMessage) -> Result<()> {
        let chat_id = parse_chat_id(user_id)?;
        let request = self.bot.send_message(chat_id, message.text());

        match message.reply_actions() {
            Some(actions) => request.reply_markup(reply_keyboard(actions)).await?,
            None => request.reply_markup(KeyboardRemove::new()).await?,
        };

        debug!(user_id = %user_id, kind = message.kind(), "Message dispatched");
        Ok(())
    }
}
