use crate::bot::replies::ReplyEmitter;
use crate::bot::router::{is_start_command, Trigger};
use crate::bot::views::OPEN_APP_COMMAND;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::RequestError;
use tracing::info;

/// Route a message to a trigger, if it carries one.
///
/// The start command is also recognised in media captions; `/app` only
/// matches plain text.
#[must_use]
pub fn message_trigger(msg: &Message, bot_username: &str) -> Option<Trigger> {
    let content = msg.text().or_else(|| msg.caption());
    if content.is_some_and(|c| is_start_command(c, bot_username)) {
        return Some(Trigger::Start);
    }

    msg.text()
        .filter(|text| *text == OPEN_APP_COMMAND)
        .map(|_| Trigger::OpenApp)
}

/// Dispatch tree: messages are routed, everything else falls through and is
/// dropped by the dispatcher.
#[must_use]
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| message_trigger(&msg, me.username()))
        .endpoint(handle_trigger)
}

/// Answer a routed message with its launch reply.
///
/// # Errors
///
/// Returns the Bot API error if sending fails.
pub async fn handle_trigger(
    msg: Message,
    trigger: Trigger,
    emitter: Arc<ReplyEmitter>,
) -> Result<(), RequestError> {
    info!(chat_id = msg.chat.id.0, ?trigger, "Handling trigger");
    emitter.emit(msg.chat.id, trigger).await
}
