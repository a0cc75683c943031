//! Chat interaction layer: agents that produce replies and the controller
//! that runs a conversation against them.

pub mod agent;
pub mod controller;
pub mod event;
pub mod http_agent;
pub mod simulated_agent;

use std::sync::Arc;

use coach_core::config::{AgentConfig, CoachConfig};
use coach_core::conversation::ConversationState;
use coach_core::credit::CreditLedger;

pub use agent::{AgentReply, AgentRequest, CoachAgent};
pub use controller::{InteractionController, SharedConversation};
pub use event::InteractionEvent;
pub use http_agent::HttpCoachAgent;
pub use simulated_agent::SimulatedAgent;

/// Builds the agent selected by `config`.
pub fn build_agent(config: &CoachConfig) -> Arc<dyn CoachAgent> {
    match &config.agent {
        AgentConfig::Simulated => Arc::new(SimulatedAgent::new(config.latency())),
        AgentConfig::Http { base_url } => Arc::new(HttpCoachAgent::new(base_url)),
    }
}

/// Opens a new conversation as configured, charging `ledger`.
pub fn open_conversation(config: &CoachConfig, ledger: Arc<CreditLedger>) -> InteractionController {
    let state = if config.greeting {
        ConversationState::with_greeting()
    } else {
        ConversationState::new()
    };
    InteractionController::new(state, ledger, build_agent(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_agent_follows_config() {
        let simulated = build_agent(&CoachConfig::default());
        assert_eq!(simulated.name(), "simulated");

        let http = build_agent(&CoachConfig {
            agent: AgentConfig::Http {
                base_url: "http://localhost:8000/api/v1".into(),
            },
            ..CoachConfig::default()
        });
        assert_eq!(http.name(), "http");
    }
}
