//! In-memory `Messenger` that records every call, for handler tests.

use super::messenger::{ConversationId, EditOutcome, MessageRef, Messenger};
use crate::core::error::{QclipError, Result};
use crate::render::{Keyboard, OutgoingText};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send {
        conversation: ConversationId,
        message: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    },
    Edit {
        conversation: ConversationId,
        message: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    },
}

impl Call {
    pub fn is_send(&self) -> bool {
        matches!(self, Call::Send { .. })
    }

    pub fn message(&self) -> MessageRef {
        match self {
            Call::Send { message, .. } | Call::Edit { message, .. } => *message,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Call::Send { text, .. } | Call::Edit { text, .. } => &text.body,
        }
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Call::Send { keyboard, .. } | Call::Edit { keyboard, .. } => keyboard.as_ref(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    next_id: i32,
    deleted: HashSet<MessageRef>,
    fail_edits: bool,
    fail_sends: bool,
    edits_unchanged: bool,
}

#[derive(Debug, Default)]
pub struct RecordingMessenger {
    state: Mutex<State>,
}

impl RecordingMessenger {
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Simulates the user deleting a message.
    pub fn delete(&self, message: MessageRef) {
        self.state.lock().unwrap().deleted.insert(message);
    }

    /// Makes every later edit fail with a transport error.
    pub fn fail_edits(&self) {
        self.state.lock().unwrap().fail_edits = true;
    }

    /// Makes every later send fail with a transport error.
    pub fn fail_sends(&self) {
        self.state.lock().unwrap().fail_sends = true;
    }

    /// Answers every later edit as "not modified" without recording it.
    pub fn edits_unchanged(&self) {
        self.state.lock().unwrap().edits_unchanged = true;
    }
}

impl Messenger for RecordingMessenger {
    async fn send(
        &self,
        conversation: ConversationId,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> Result<MessageRef> {
        let mut state = self.state.lock().unwrap();
        if state.fail_sends {
            return Err(QclipError::Transport("simulated outage".into()).into());
        }
        state.next_id += 1;
        let message = MessageRef(state.next_id);
        state.calls.push(Call::Send {
            conversation,
            message,
            text,
            keyboard,
        });
        Ok(message)
    }

    async fn edit(
        &self,
        conversation: ConversationId,
        target: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> Result<EditOutcome> {
        let mut state = self.state.lock().unwrap();
        if state.fail_edits {
            return Err(QclipError::Transport("simulated outage".into()).into());
        }
        if state.deleted.contains(&target) {
            return Ok(EditOutcome::TargetGone);
        }
        if state.edits_unchanged {
            return Ok(EditOutcome::Unchanged);
        }
        state.calls.push(Call::Edit {
            conversation,
            message: target,
            text,
            keyboard,
        });
        Ok(EditOutcome::Applied)
    }
}
