//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Message types (`Message`, `MessageRole`)
//! - `store`: Append-only message log (`MessageStore`)
//! - `state`: Per-session conversation bookkeeping (`ConversationState`)
//! - `reject`: Reasons a submission is refused (`RejectReason`)

mod message;
mod reject;
mod state;
mod store;

pub use message::{Message, MessageRole};
pub use reject::{MAX_INPUT_CHARS, RejectReason, validate_input};
pub use state::ConversationState;
pub use store::MessageStore;
