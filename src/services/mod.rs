pub mod health;
pub mod outbound;
pub mod pending_replies;
pub mod reply_router;
