//! # QClip Interaction Handler
//!
//! File: bot/src/handler/mod.rs
//!
//! ## Overview
//!
//! The handler turns inbound chat events into replies. A conversation is
//! either *fresh* (no session) or *browsing* (a session points at the
//! preview and detail messages and at the current global index).
//!
//! | Event                  | Effect                                                         |
//! |------------------------|----------------------------------------------------------------|
//! | `/start`, `/help`      | send welcome, drop session → fresh                             |
//! | reference text         | status message, preview + detail placeholder, new session      |
//! | bad reference text     | status message edited to an error, session untouched           |
//! | `Glyph { mode, i }`    | edit detail message with glyph codes, move session to `i`      |
//! | `Navigate { dir, i }`  | clamp `i ± 1`, edit preview and detail (primary), move session |
//! | `Reset`                | edit the pressed message to welcome, drop session → fresh      |
//!
//! Button presses in a fresh conversation do nothing: the old messages are
//! no longer tracked, so there is nothing to edit.
//!
//! Navigation always re-renders the detail in `GlyphMode::Primary`; the mode
//! last chosen is not carried across verses.
//!
//! ## Failure Policy
//!
//! Sending a message is required for progress, so send failures propagate.
//! Edits are best-effort: a vanished target or an unchanged message is
//! expected, anything else is logged and skipped.
//!
use crate::action::{Action, Direction};
use crate::core::error::Result;
use crate::dataset::Dataset;
use crate::reference;
use crate::render::{self, keyboard, messages, GlyphMode, Keyboard, OutgoingText};
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod messenger;
#[cfg(test)]
pub(crate) mod recording;

use messenger::{ConversationId, EditOutcome, MessageRef, Messenger};

/// What happened to a button press. The transport uses this to decide how
/// to acknowledge the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Handled,
    /// The conversation has no session; nothing was edited.
    NoSession,
    /// The button pointed at a global index the dataset does not have.
    RecordMissing,
}

pub struct Handler<M> {
    dataset: Arc<Dataset>,
    sessions: Arc<SessionStore>,
    messenger: M,
}

impl<M: Messenger> Handler<M> {
    pub fn new(dataset: Arc<Dataset>, sessions: Arc<SessionStore>, messenger: M) -> Self {
        Self {
            dataset,
            sessions,
            messenger,
        }
    }

    /// Greeting command: welcome text and a fresh state. The session is
    /// dropped even when the welcome cannot be sent.
    pub async fn greet(&self, conversation: ConversationId) -> Result<()> {
        self.forget(conversation).await;
        self.messenger
            .send(conversation, messages::welcome(), None)
            .await?;
        Ok(())
    }

    /// Free text: resolve it as a reference and show the verse.
    pub async fn lookup_text(&self, conversation: ConversationId, text: &str) -> Result<()> {
        let status = self
            .messenger
            .send(conversation, messages::status(messages::FETCHING), None)
            .await?;

        let record = match reference::lookup(&self.dataset, text) {
            Ok(record) => record,
            Err(err) => {
                info!("Lookup in {} failed: {}", conversation, err);
                self.edit_best_effort(
                    conversation,
                    status,
                    messages::status(messages::lookup_failed(&err)),
                    None,
                )
                .await;
                return Ok(());
            }
        };

        self.edit_best_effort(
            conversation,
            status,
            messages::status(messages::PREPARING),
            None,
        )
        .await;

        let index = record.global_index;
        let preview = self
            .messenger
            .send(
                conversation,
                render::preview::render(record),
                Some(keyboard::preview(index)),
            )
            .await?;
        let detail = self
            .messenger
            .send(conversation, messages::detail_placeholder(), None)
            .await?;
        self.sessions
            .create_or_replace(conversation, preview, detail, index)
            .await;
        info!("Showing {} in {}", record.reference(), conversation);

        self.edit_best_effort(conversation, status, messages::status(messages::DONE), None)
            .await;
        Ok(())
    }

    /// Button press. `origin` is the message that carried the button.
    pub async fn handle_action(
        &self,
        conversation: ConversationId,
        origin: Option<MessageRef>,
        action: Action,
    ) -> Result<ActionOutcome> {
        debug!("Action {:?} in {}", action, conversation);
        match action {
            Action::Reset => self.reset(conversation, origin).await,
            Action::Glyph { mode, index } => self.show_glyphs(conversation, mode, index).await,
            Action::Navigate { direction, index } => {
                self.navigate(conversation, direction, index).await
            }
        }
    }

    async fn reset(
        &self,
        conversation: ConversationId,
        origin: Option<MessageRef>,
    ) -> Result<ActionOutcome> {
        self.forget(conversation).await;
        match origin {
            Some(message) => {
                self.edit_best_effort(conversation, message, messages::welcome(), None)
                    .await;
            }
            None => {
                self.messenger
                    .send(conversation, messages::welcome(), None)
                    .await?;
            }
        }
        Ok(ActionOutcome::Handled)
    }

    async fn show_glyphs(
        &self,
        conversation: ConversationId,
        mode: GlyphMode,
        index: u32,
    ) -> Result<ActionOutcome> {
        let Some(record) = self.dataset.by_global(index) else {
            warn!("Glyph request for unknown global index {}", index);
            return Ok(ActionOutcome::RecordMissing);
        };
        let Some(session) = self.sessions.get(conversation).await else {
            return Ok(ActionOutcome::NoSession);
        };

        let outcome = self
            .edit_best_effort(
                conversation,
                session.detail,
                render::detail::render(record, mode),
                Some(keyboard::detail(index)),
            )
            .await;
        if matches!(outcome, Some(EditOutcome::Applied | EditOutcome::Unchanged)) {
            self.sessions.set_current(conversation, index).await;
        }
        Ok(ActionOutcome::Handled)
    }

    async fn navigate(
        &self,
        conversation: ConversationId,
        direction: Direction,
        index: u32,
    ) -> Result<ActionOutcome> {
        let target = direction.step(index, self.dataset.total());
        let Some(record) = self.dataset.by_global(target) else {
            warn!("Navigation to unknown global index {}", target);
            return Ok(ActionOutcome::RecordMissing);
        };
        let Some(session) = self.sessions.get(conversation).await else {
            return Ok(ActionOutcome::NoSession);
        };

        self.edit_best_effort(
            conversation,
            session.preview,
            render::preview::render(record),
            Some(keyboard::preview(target)),
        )
        .await;
        self.edit_best_effort(
            conversation,
            session.detail,
            render::detail::render(record, GlyphMode::Primary),
            Some(keyboard::detail(target)),
        )
        .await;
        self.sessions.set_current(conversation, target).await;
        debug!(
            "{} moved {:?} from {} to {}",
            conversation, direction, session.current_index, target
        );
        Ok(ActionOutcome::Handled)
    }

    async fn forget(&self, conversation: ConversationId) {
        if self.sessions.remove(conversation).await.is_some() {
            debug!(
                "Session for {} cleared ({} still active)",
                conversation,
                self.sessions.active_count().await
            );
        }
    }

    /// Edits `target`, logging instead of failing. `None` means the edit failed.
    async fn edit_best_effort(
        &self,
        conversation: ConversationId,
        target: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> Option<EditOutcome> {
        match self
            .messenger
            .edit(conversation, target, text, keyboard)
            .await
        {
            Ok(EditOutcome::TargetGone) => {
                debug!("Message {} in {} is gone, skipping edit", target, conversation);
                Some(EditOutcome::TargetGone)
            }
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("Editing message {} in {} failed: {:#}", target, conversation, e);
                None
            }
        }
    }
}
