//! The seam between the controller and whatever produces replies.

use async_trait::async_trait;
use coach_core::Intent;
use coach_core::error::Result;

/// One user message on its way to an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub conversation_id: String,
    pub message: String,
}

/// A classified reply from an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReply {
    pub content: String,
    pub intent: Intent,
    /// Set when the agent assigned or changed the conversation id.
    pub conversation_id: Option<String>,
}

/// Anything that can answer a chat message.
///
/// The controller races `respond` against its cancellation token, so an
/// implementation does not need to observe teardown itself. An `Err` must
/// leave no trace: the controller appends nothing and spends no credit.
#[async_trait]
pub trait CoachAgent: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn respond(&self, request: AgentRequest) -> Result<AgentReply>;
}
