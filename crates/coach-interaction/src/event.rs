use coach_core::conversation::Message;
use serde::Serialize;

/// Notifications published by an
/// [`InteractionController`](crate::InteractionController) as its
/// conversation changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InteractionEvent {
    /// A user or assistant message was appended.
    MessageAppended(Message),
    /// The typing indicator should be shown (`true`) or hidden.
    PendingChanged(bool),
    /// A credit was spent.
    CreditsChanged { remaining: u32 },
    /// A request ended without a reply. `message` is user-facing.
    Failed { message: String },
}
