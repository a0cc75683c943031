//! Append-only message log.

use super::message::Message;
use crate::intent::Intent;

/// Ordered log of the messages exchanged in one conversation.
///
/// The store only grows. Ids are assigned from a counter starting at 1, so
/// id order, insertion order and `created_at` order agree.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &Message {
        let id = self.allocate_id();
        self.push(Message::user(id, content.into()))
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, intent: Intent) -> &Message {
        let id = self.allocate_id();
        self.push(Message::assistant(id, content.into(), intent))
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        let index = self.messages.len() - 1;
        &self.messages[index]
    }
}
