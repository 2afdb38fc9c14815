/// Dispatch tree and message endpoints
pub mod handlers;
/// Launch reply construction and delivery
pub mod replies;
/// Message text to trigger routing
pub mod router;
/// View layer for UI components (texts, keyboards)
pub mod views;

pub use replies::{Reply, ReplyEmitter, ReplySink, TelegramReplySink};
pub use router::Trigger;
