use uuid::Uuid;

use super::message::Message;
use super::reject::{RejectReason, validate_input};
use super::store::MessageStore;
use crate::intent::Intent;
use crate::response::GREETING;

/// The message log plus pending bookkeeping for one chat session.
///
/// `ConversationState` enforces the one-request-in-flight rule: a user
/// message can only be opened while nothing is pending, and an assistant
/// message can only be appended to close the pending request. Once
/// [`close`](Self::close)d the state refuses every further mutation.
#[derive(Debug, Clone)]
pub struct ConversationState {
    conversation_id: String,
    store: MessageStore,
    pending: bool,
    closed: bool,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    /// Creates an empty conversation with a fresh UUID.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            store: MessageStore::new(),
            pending: false,
            closed: false,
        }
    }

    /// Creates a conversation that opens with the coach's welcome message.
    ///
    /// The greeting is not a completed interaction and costs no credit.
    pub fn with_greeting() -> Self {
        let mut state = Self::new();
        state.store.push_assistant(GREETING, Intent::Router);
        state
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Adopts the id a remote backend assigned to this conversation.
    pub fn set_conversation_id(&mut self, conversation_id: impl Into<String>) {
        self.conversation_id = conversation_id.into();
    }

    pub fn messages(&self) -> &[Message] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True once the user has said anything; used to hide suggested prompts.
    pub fn has_user_message(&self) -> bool {
        self.store.iter().any(Message::is_user)
    }

    /// Appends a user message and marks the conversation pending.
    ///
    /// Credit checks belong to the caller; this only enforces input
    /// validity and the pending gate.
    ///
    /// A closed conversation also answers [`RejectReason::AlreadyPending`]:
    /// there is no dedicated reason for it, and callers are expected to check
    /// [`is_closed`](Self::is_closed) first when the distinction matters.
    /// `InteractionController` never submits into a closed conversation.
    pub fn open_request(&mut self, text: &str) -> Result<&Message, RejectReason> {
        validate_input(text)?;
        if self.pending || self.closed {
            return Err(RejectReason::AlreadyPending);
        }
        self.pending = true;
        Ok(self.store.push_user(text))
    }

    /// Appends the reply for the pending request and clears `pending`.
    ///
    /// Returns `None` without touching anything when the conversation is
    /// closed or has no request outstanding.
    pub fn complete_request(&mut self, content: String, intent: Intent) -> Option<&Message> {
        if self.closed || !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.store.push_assistant(content, intent))
    }

    /// Clears `pending` without appending a reply. Returns whether a request
    /// was actually outstanding.
    pub fn abandon_request(&mut self) -> bool {
        if self.closed || !self.pending {
            return false;
        }
        self.pending = false;
        true
    }

    /// Tears the conversation down. Later completions become no-ops.
    pub fn close(&mut self) {
        self.closed = true;
        self.pending = false;
    }
}
