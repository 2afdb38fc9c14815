//! Configuration and settings management
//!
//! Loads bot settings from config files and environment variables and
//! validates them into a [`BotConfig`].

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors produced while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Underlying config source failed to load or deserialize
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// `TELEGRAM_TOKEN` is absent or blank
    #[error("TELEGRAM_TOKEN is empty")]
    MissingToken,
    /// A URL setting could not be parsed
    #[error("Invalid {key} '{value}': {source}")]
    InvalidUrl {
        /// Setting name
        key: &'static str,
        /// Raw value as supplied
        value: String,
        /// Parser error
        source: url::ParseError,
    },
    /// Telegram only opens Mini Apps served over HTTPS
    #[error("WEBAPP_URL must be an https:// URL with a host, got '{0}'")]
    InsecureWebAppUrl(String),
}

/// Raw settings as read from the environment and config files
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    #[serde(alias = "bot_token")]
    pub telegram_token: String,

    /// URL of the web application opened by the launch buttons
    pub webapp_url: String,

    /// Custom Bot API server (e.g. a local `telegram-bot-api`)
    pub bot_api_url: Option<String>,

    /// Publish the command menu on startup
    #[serde(default = "default_register_commands")]
    pub register_commands: bool,
}

const fn default_register_commands() -> bool {
    true
}

/// Builds the layered config source shared by all settings loaders.
///
/// # Errors
///
/// Returns a `ConfigError` if any present source is malformed.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Not checked into git
        .add_source(File::with_name("config/local").required(false))
        // `APP__WEBAPP_URL=...` style overrides
        .add_source(Environment::with_prefix("APP").separator("__"))
        // Plain `TELEGRAM_TOKEN`, `WEBAPP_URL`; empty vars count as unset
        .add_source(Environment::default().ignore_empty(true))
        .build()
}

impl Settings {
    /// Load raw settings from files and environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or a required key is missing.
    pub fn new() -> Result<Self, ConfigError> {
        build_config()?.try_deserialize()
    }

    /// Validate raw settings into a [`BotConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] for a blank token, an unparsable URL or a
    /// web app URL that is not served over HTTPS.
    pub fn validate(self) -> Result<BotConfig, SettingsError> {
        let telegram_token = self.telegram_token.trim().to_string();
        if telegram_token.is_empty() {
            return Err(SettingsError::MissingToken);
        }

        let webapp_url = parse_url("WEBAPP_URL", &self.webapp_url)?;
        if webapp_url.scheme() != "https" || webapp_url.host_str().is_none() {
            return Err(SettingsError::InsecureWebAppUrl(self.webapp_url));
        }

        let bot_api_url = self
            .bot_api_url
            .as_deref()
            .map(|raw| parse_url("BOT_API_URL", raw))
            .transpose()?;

        Ok(BotConfig {
            telegram_token,
            webapp_url,
            bot_api_url,
            register_commands: self.register_commands,
        })
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, SettingsError> {
    Url::parse(raw.trim()).map_err(|source| SettingsError::InvalidUrl {
        key,
        value: raw.to_string(),
        source,
    })
}

/// Validated, read-only bot configuration
#[derive(Clone)]
pub struct BotConfig {
    /// Telegram Bot API token
    pub telegram_token: String,
    /// HTTPS URL of the web application
    pub webapp_url: Url,
    /// Custom Bot API server, if any
    pub bot_api_url: Option<Url>,
    /// Publish the command menu on startup
    pub register_commands: bool,
}

impl BotConfig {
    /// Load and validate configuration in one step.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if loading or validation fails.
    pub fn load() -> Result<Self, SettingsError> {
        Settings::new()?.validate()
    }
}

// Keeps the token out of logs
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"[TELEGRAM_TOKEN]")
            .field("webapp_url", &self.webapp_url.as_str())
            .field("bot_api_url", &self.bot_api_url.as_ref().map(Url::as_str))
            .field("register_commands", &self.register_commands)
            .finish()
    }
}
