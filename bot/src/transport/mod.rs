//! # QClip Messaging Transports
//!
//! File: bot/src/transport/mod.rs
//!
//! Adapters between a chat platform and the interaction handler. Telegram
//! is the only platform today.
//!

/// Telegram Bot API adapter built on teloxide.
pub mod telegram;
