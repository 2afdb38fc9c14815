#![deny(missing_docs)]
//! CulWay launcher bot.
//!
//! Answers `/start` and `/app` with a button that opens the CulWay web app.

/// Telegram bot handlers, routing and views.
pub mod bot;
/// Configuration management.
pub mod config;
/// Tracing setup with secret redaction.
pub mod logging;
/// Bot runtime entrypoint.
pub mod runner;
