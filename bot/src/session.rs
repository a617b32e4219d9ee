//! # Session Store
//!
//! File: bot/src/session.rs
//!
//! ## Overview
//!
//! Remembers, per conversation, which two messages show the current verse
//! (the preview and the glyph detail) and which global index they show, so
//! button presses can edit those messages in place.
//!
//! Sessions live in memory only. A restart forgets them; users recover by
//! sending a reference again.
//!
//! ## Concurrency
//!
//! The teloxide dispatcher handles different chats in parallel. Every
//! operation takes the map lock once and releases it before returning, so
//! no lock is ever held across a network call and updates to one
//! conversation never interleave.
//!
use crate::handler::messenger::{ConversationId, MessageRef};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub preview: MessageRef,
    pub detail: MessageRef,
    pub current_index: u32,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<ConversationId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session, replacing any previous one for the conversation.
    pub async fn create_or_replace(
        &self,
        conversation: ConversationId,
        preview: MessageRef,
        detail: MessageRef,
        current_index: u32,
    ) {
        let session = Session {
            preview,
            detail,
            current_index,
        };
        let previous = self.sessions.lock().await.insert(conversation, session);
        debug!(
            "Session for {} anchored at {} (replaced: {})",
            conversation,
            current_index,
            previous.is_some()
        );
    }

    pub async fn get(&self, conversation: ConversationId) -> Option<Session> {
        self.sessions.lock().await.get(&conversation).copied()
    }

    /// Moves an existing session to `index`. Returns `false` when there is no session.
    pub async fn set_current(&self, conversation: ConversationId, index: u32) -> bool {
        match self.sessions.lock().await.get_mut(&conversation) {
            Some(session) => {
                session.current_index = index;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, conversation: ConversationId) -> Option<Session> {
        self.sessions.lock().await.remove(&conversation)
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
