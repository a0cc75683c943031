use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::credit::Tier;

/// Latency of the simulated agent when nothing else is configured.
pub const DEFAULT_LATENCY_MS: u64 = 1500;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CoachConfig {
    /// Delay before a simulated reply is delivered.
    pub latency_ms: u64,
    /// Subscription tier; sets the credit ledger capacity.
    pub tier: Tier,
    /// Open new conversations with the welcome message.
    pub greeting: bool,
    pub agent: AgentConfig,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            tier: Tier::default(),
            greeting: true,
            agent: AgentConfig::default(),
        }
    }
}

impl CoachConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Which agent answers chat messages.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentConfig {
    /// Canned replies after a local delay.
    #[default]
    Simulated,
    /// A remote backend implementing `POST /chat/message`.
    Http { base_url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: CoachConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoachConfig::default());
        assert_eq!(config.latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_http_agent_section() {
        let config: CoachConfig = toml::from_str(
            r#"
            latency_ms = 10
            tier = "operator"

            [agent]
            kind = "http"
            base_url = "http://localhost:8000/api/v1"
            "#,
        )
        .unwrap();

        assert_eq!(config.latency_ms, 10);
        assert_eq!(config.tier, Tier::Operator);
        assert!(config.greeting);
        assert_eq!(
            config.agent,
            AgentConfig::Http {
                base_url: "http://localhost:8000/api/v1".into()
            }
        );
    }
}
