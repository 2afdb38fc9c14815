//! Reply emission
//!
//! Builds launch replies and sends them through a [`ReplySink`]. Send
//! failures are returned to the caller as-is, there is no retry.

use crate::bot::router::Trigger;
use crate::bot::views::{
    webapp_inline_keyboard, webapp_reply_keyboard, DefaultLaunchView, LaunchView,
};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ReplyMarkup};
use teloxide::RequestError;
use tracing::debug;
use url::Url;

/// Outbound message: text plus its keyboard
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    /// Message text
    pub text: String,
    /// Attached keyboard
    pub markup: ReplyMarkup,
}

impl Reply {
    /// Welcome reply with a persistent launch button.
    #[must_use]
    pub fn welcome(url: &Url) -> Self {
        Self {
            text: DefaultLaunchView::welcome_message().to_string(),
            markup: ReplyMarkup::Keyboard(webapp_reply_keyboard(
                DefaultLaunchView::welcome_button(),
                url.clone(),
            )),
        }
    }

    /// Reply with an inline launch button.
    #[must_use]
    pub fn open_app(url: &Url) -> Self {
        Self {
            text: DefaultLaunchView::open_app_message().to_string(),
            markup: ReplyMarkup::InlineKeyboard(webapp_inline_keyboard(
                DefaultLaunchView::open_app_button(),
                url.clone(),
            )),
        }
    }

    /// Reply for a routed trigger.
    #[must_use]
    pub fn for_trigger(trigger: Trigger, url: &Url) -> Self {
        match trigger {
            Trigger::Start => Self::welcome(url),
            Trigger::OpenApp => Self::open_app(url),
        }
    }
}

/// Destination for outbound replies
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver `reply` to `chat_id`.
    async fn send_reply(&self, chat_id: ChatId, reply: Reply) -> Result<(), RequestError>;
}

/// [`ReplySink`] backed by the Bot API `sendMessage` call
pub struct TelegramReplySink {
    bot: Bot,
}

impl TelegramReplySink {
    /// Create a sink that sends through `bot`.
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySink for TelegramReplySink {
    async fn send_reply(&self, chat_id: ChatId, reply: Reply) -> Result<(), RequestError> {
        self.bot
            .send_message(chat_id, reply.text)
            .reply_markup(reply.markup)
            .await?;
        Ok(())
    }
}

/// Sends launch replies for the configured web app
#[derive(Clone)]
pub struct ReplyEmitter {
    sink: Arc<dyn ReplySink>,
    webapp_url: Url,
}

impl ReplyEmitter {
    /// Create an emitter that opens `webapp_url`.
    #[must_use]
    pub fn new(sink: Arc<dyn ReplySink>, webapp_url: Url) -> Self {
        Self { sink, webapp_url }
    }

    /// Send exactly one reply for `trigger` to `chat_id`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub async fn emit(&self, chat_id: ChatId, trigger: Trigger) -> Result<(), RequestError> {
        let reply = Reply::for_trigger(trigger, &self.webapp_url);
        debug!(chat_id = chat_id.0, ?trigger, "Sending launch reply");
        self.sink.send_reply(chat_id, reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::ApiError;

    fn url() -> Result<Url, url::ParseError> {
        Url::parse("https://culway.example.com/")
    }

    #[test]
    fn welcome_reply_matches_scenario() -> Result<(), url::ParseError> {
        let reply = Reply::welcome(&url()?);
        assert_eq!(reply.text, "Запускаем CulWay 🚀");
        assert_eq!(
            reply.markup,
            ReplyMarkup::Keyboard(webapp_reply_keyboard("Открыть CulWay", url()?))
        );
        Ok(())
    }

    #[test]
    fn open_app_reply_matches_scenario() -> Result<(), url::ParseError> {
        let reply = Reply::open_app(&url()?);
        assert_eq!(reply.text, "Открыть CulWay");
        assert_eq!(
            reply.markup,
            ReplyMarkup::InlineKeyboard(webapp_inline_keyboard("Открыть", url()?))
        );
        Ok(())
    }

    #[tokio::test]
    async fn emit_sends_once_to_origin_chat() -> Result<(), Box<dyn std::error::Error>> {
        let expected = Reply::welcome(&url()?);
        let mut sink = MockReplySink::new();
        sink.expect_send_reply()
            .withf(move |chat_id, reply| *chat_id == ChatId(42) && *reply == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let emitter = ReplyEmitter::new(Arc::new(sink), url()?);
        emitter.emit(ChatId(42), Trigger::Start).await?;
        Ok(())
    }

    #[tokio::test]
    async fn emit_propagates_send_failure() -> Result<(), url::ParseError> {
        let mut sink = MockReplySink::new();
        sink.expect_send_reply()
            .times(1)
            .returning(|_, _| Err(RequestError::Api(ApiError::BotBlocked)));

        let emitter = ReplyEmitter::new(Arc::new(sink), url()?);
        let result = emitter.emit(ChatId(7), Trigger::OpenApp).await;
        assert!(matches!(result, Err(RequestError::Api(ApiError::BotBlocked))));
        Ok(())
    }
}
