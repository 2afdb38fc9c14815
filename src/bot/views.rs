//! View layer: reply texts and launch keyboards
//!
//! Both keyboards carry a single button that opens the web app URL as a
//! Telegram Mini App.

use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    WebAppInfo,
};
use url::Url;

/// Literal text that asks for the inline launch button
pub const OPEN_APP_COMMAND: &str = "/app";

// ─────────────────────────────────────────────────────────────────────────────
// Texts
// ─────────────────────────────────────────────────────────────────────────────

/// Texts used by launch replies and the command menu
pub trait LaunchView {
    /// Text sent in reply to `/start`
    fn welcome_message() -> &'static str;

    /// Label of the reply-keyboard launch button
    fn welcome_button() -> &'static str;

    /// Text sent in reply to `/app`
    fn open_app_message() -> &'static str;

    /// Label of the inline launch button
    fn open_app_button() -> &'static str;

    /// Command menu description for `/start`
    fn start_description() -> &'static str;

    /// Command menu description for `/app`
    fn open_app_description() -> &'static str;
}

/// Default Russian-language implementation of `LaunchView`
pub struct DefaultLaunchView;

impl LaunchView for DefaultLaunchView {
    fn welcome_message() -> &'static str {
        "Запускаем CulWay 🚀"
    }

    fn welcome_button() -> &'static str {
        "Открыть CulWay"
    }

    fn open_app_message() -> &'static str {
        "Открыть CulWay"
    }

    fn open_app_button() -> &'static str {
        "Открыть"
    }

    fn start_description() -> &'static str {
        "Запустить CulWay."
    }

    fn open_app_description() -> &'static str {
        "Открыть CulWay."
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboards
// ─────────────────────────────────────────────────────────────────────────────

/// Reply keyboard with one web app button
///
/// # Examples
///
/// ```
/// use culway_bot::bot::views::webapp_reply_keyboard;
/// # fn main() -> Result<(), url::ParseError> {
/// let url = url::Url::parse("https://culway.example.com")?;
/// let keyboard = webapp_reply_keyboard("Открыть CulWay", url);
/// assert_eq!(keyboard.keyboard.len(), 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn webapp_reply_keyboard(label: &str, url: Url) -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(label).request(ButtonRequest::WebApp(WebAppInfo { url })),
    ]])
    .resize_keyboard()
}

/// Inline keyboard with one web app button
#[must_use]
pub fn webapp_inline_keyboard(label: &str, url: Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        label,
        WebAppInfo { url },
    )]])
}
