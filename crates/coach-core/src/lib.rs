//! Domain core of the Coach interaction engine.
//!
//! Pure building blocks shared by the agents and the controller in
//! `coach-interaction`: intent routing, canned replies, the conversation
//! log, credit accounting and configuration.

pub mod api;
pub mod config;
pub mod conversation;
pub mod credit;
pub mod error;
pub mod intent;
pub mod response;

// Re-export common error type
pub use error::CoachError;
pub use intent::{Intent, classify};
pub use response::generate;
