//! Command routing
//!
//! Maps the text of an inbound message to a [`Trigger`]. Checks run in a
//! fixed order: the start command first, then the literal app command.

use std::borrow::Cow;
use teloxide::utils::command::BotCommands;
use tracing::debug;

use crate::bot::views::OPEN_APP_COMMAND;

/// Bot commands parsed with teloxide's command parser
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Start the bot; carries the optional deep-link payload
    #[command(description = "Запустить CulWay.")]
    Start(String),
}

/// What an inbound message asks the bot to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// `/start`, with or without payload or bot mention
    Start,
    /// Exact `/app` text
    OpenApp,
}

/// Check whether `content` is this bot's start command.
///
/// Leading whitespace is skipped and any whitespace (space, newline, tab)
/// separates the command from its payload, so `/start\npromo` matches.
#[must_use]
pub fn is_start_command(content: &str, bot_username: &str) -> bool {
    let normalized = normalize_command(content);
    match Command::parse(&normalized, bot_username) {
        Ok(Command::Start(payload)) => {
            if !payload.is_empty() {
                debug!(payload = %payload, "Start command with payload");
            }
            true
        }
        Err(_) => false,
    }
}

/// Rewrite `content` into the `"/cmd args"` shape teloxide's parser expects.
fn normalize_command(content: &str) -> Cow<'_, str> {
    let trimmed = content.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, args)) => {
            let args = args.trim_start();
            if args.is_empty() {
                Cow::Borrowed(command)
            } else {
                Cow::Owned(format!("{command} {args}"))
            }
        }
        None => Cow::Borrowed(trimmed),
    }
}

/// Route message text to a trigger.
///
/// `bot_username` is used to accept `/start@<bot>` and to reject commands
/// addressed to other bots. Returns `None` for anything that is neither
/// trigger.
///
/// # Examples
///
/// ```
/// use culway_bot::bot::router::{route, Trigger};
///
/// assert_eq!(route("/start", "culway_bot"), Some(Trigger::Start));
/// assert_eq!(route("/app", "culway_bot"), Some(Trigger::OpenApp));
/// assert_eq!(route("hello", "culway_bot"), None);
/// ```
#[must_use]
pub fn route(text: &str, bot_username: &str) -> Option<Trigger> {
    if is_start_command(text, bot_username) {
        return Some(Trigger::Start);
    }

    if text == OPEN_APP_COMMAND {
        return Some(Trigger::OpenApp);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "culway_bot";

    #[test]
    fn start_variants_route_to_start() {
        assert_eq!(route("/start", BOT), Some(Trigger::Start));
        assert_eq!(route("/start promo42", BOT), Some(Trigger::Start));
        assert_eq!(route("/start@culway_bot", BOT), Some(Trigger::Start));
    }

    #[test]
    fn start_accepts_any_whitespace_separator() {
        assert_eq!(route("/start\npromo42", BOT), Some(Trigger::Start));
        assert_eq!(route("/start\tpromo42", BOT), Some(Trigger::Start));
        assert_eq!(route("/start   promo42", BOT), Some(Trigger::Start));
        assert_eq!(route("/start\n", BOT), Some(Trigger::Start));
    }

    #[test]
    fn start_tolerates_leading_whitespace() {
        assert_eq!(route(" /start", BOT), Some(Trigger::Start));
        assert_eq!(route("\n/start promo42", BOT), Some(Trigger::Start));
    }

    #[test]
    fn normalize_keeps_plain_commands_borrowed() {
        assert!(matches!(normalize_command("/start"), Cow::Borrowed("/start")));
        assert_eq!(normalize_command("  /start \n x y"), "/start x y");
    }

    #[test]
    fn start_for_another_bot_is_ignored() {
        assert_eq!(route("/start@someone_else_bot", BOT), None);
    }

    #[test]
    fn app_matches_only_exact_text() {
        assert_eq!(route("/app", BOT), Some(Trigger::OpenApp));
        assert_eq!(route("/app now", BOT), None);
        assert_eq!(route("/app@culway_bot", BOT), None);
        assert_eq!(route("app", BOT), None);
        assert_eq!(route(" /app", BOT), None);
    }

    #[test]
    fn other_text_is_ignored() {
        for text in ["", "hello", "/help", "Открыть CulWay", "/startx"] {
            assert_eq!(route(text, BOT), None, "text: {text:?}");
        }
    }
}
