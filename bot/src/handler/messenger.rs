//! # Messenger Port
//!
//! File: bot/src/handler/messenger.rs
//!
//! ## Overview
//!
//! The interaction handler only needs three things from a chat platform:
//! send a message, edit a message it sent earlier, and attach buttons to
//! either. `Messenger` captures exactly that, so the handler can be driven
//! by the Telegram adapter in production and by an in-memory recorder in
//! tests.
//!
//! ## Edit Outcomes
//!
//! Users delete messages and Telegram refuses edits that change nothing.
//! Neither is an error for the bot, so `edit` reports them as
//! `EditOutcome` variants and reserves `Err` for real transport failures.
//!
use crate::core::error::Result;
use crate::render::{Keyboard, OutgoingText};
use std::fmt;
use std::future::Future;

/// Identifies one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub i64);

/// Identifies a message the bot sent within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef(pub i32);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The message was deleted or can no longer be edited.
    TargetGone,
    /// The new content equals the current content.
    Unchanged,
}

pub trait Messenger: Send + Sync {
    fn send(
        &self,
        conversation: ConversationId,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> impl Future<Output = Result<MessageRef>> + Send;

    fn edit(
        &self,
        conversation: ConversationId,
        target: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> impl Future<Output = Result<EditOutcome>> + Send;
}
