//! # Kira Studio Bot
//!
//! A Telegram front end for a small photography and design studio.
//!
//! ## Features
//! - Price list with inline menus and prefilled package orders
//! - Order dialogue that relays text, photos and documents to administrators
//! - Reply routing: an administrator presses "Reply" under a relayed card and
//!   their next message is delivered to that user
//! - `/post` broadcast to the studio channel
//! - Health endpoints for the hosting platform

/// Telegram commands, callbacks and the update dispatch tree
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Reply routing, outbound delivery and the health server
pub mod services;
/// Feedback messages, logging helpers and validation
pub mod utils;
