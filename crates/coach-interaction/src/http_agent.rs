//! HttpCoachAgent - client for the coach backend's `POST /chat/message`.
//!
//! This is the production replacement for [`SimulatedAgent`](crate::SimulatedAgent).
//! No retries: a failed call is reported once and the caller decides.

use async_trait::async_trait;
use coach_core::Intent;
use coach_core::api::{CHAT_MESSAGE_PATH, ChatRequest, ChatResponse};
use coach_core::error::{CoachError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::agent::{AgentReply, AgentRequest, CoachAgent};

const UNREACHABLE_MESSAGE: &str = "Could not reach the coach service. Please try again.";
const UNEXPECTED_RESPONSE_MESSAGE: &str = "The coach service sent an unexpected response.";

/// Agent implementation that talks to the coach HTTP API.
#[derive(Clone)]
pub struct HttpCoachAgent {
    client: Client,
    endpoint: String,
}

impl HttpCoachAgent {
    /// Creates an agent for the API rooted at `base_url`
    /// (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            endpoint: format!("{base}{CHAT_MESSAGE_PATH}"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CoachAgent for HttpCoachAgent {
    fn name(&self) -> &str {
        "http"
    }

    async fn respond(&self, request: AgentRequest) -> Result<AgentReply> {
        let body = ChatRequest {
            message: request.message,
            conversation_id: Some(request.conversation_id),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "chat request failed");
                CoachError::transport(None, UNREACHABLE_MESSAGE)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "chat backend returned an error");
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatResponse = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to parse chat response");
            CoachError::transport(Some(status.as_u16()), UNEXPECTED_RESPONSE_MESSAGE)
        })?;

        if parsed.credits_used != 1 {
            tracing::debug!(
                credits_used = parsed.credits_used,
                "backend reported a non-unit charge; the local ledger spends one credit per reply"
            );
        }

        Ok(AgentReply {
            intent: Intent::from_agent_type(&parsed.agent_type),
            content: parsed.content,
            conversation_id: parsed.conversation_id,
        })
    }
}

/// Builds the user-facing error for a non-2xx response.
///
/// A body that is not JSON reads "Request failed". A string `detail` is
/// surfaced as is; a validation list (`[{"msg": ...}]`) surfaces its first
/// `msg`. Anything else falls back to the status code.
pub fn map_http_error(status: StatusCode, body: &str) -> CoachError {
    let message = match serde_json::from_str::<Value>(body) {
        Ok(document) => {
            detail_message(&document).unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        }
        Err(_) => "Request failed".to_string(),
    };
    CoachError::transport(Some(status.as_u16()), message)
}

fn detail_message(document: &Value) -> Option<String> {
    let text = match document.get("detail")? {
        Value::String(detail) => detail.clone(),
        Value::Array(items) => match items.first()? {
            Value::String(item) => item.clone(),
            item => item.get("msg").and_then(Value::as_str)?.to_string(),
        },
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}
