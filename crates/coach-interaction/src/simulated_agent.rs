//! Local stand-in for the coach backend.

use std::time::Duration;

use async_trait::async_trait;
use coach_core::config::DEFAULT_LATENCY_MS;
use coach_core::error::Result;
use coach_core::{classify, generate};

use crate::agent::{AgentReply, AgentRequest, CoachAgent};

/// Answers with canned templates after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedAgent {
    latency: Duration,
}

impl Default for SimulatedAgent {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LATENCY_MS))
    }
}

impl SimulatedAgent {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl CoachAgent for SimulatedAgent {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn respond(&self, request: AgentRequest) -> Result<AgentReply> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let intent = classify(&request.message);
        Ok(AgentReply {
            content: generate(&request.message, intent),
            intent,
            conversation_id: None,
        })
    }
}
