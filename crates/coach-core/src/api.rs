//! JSON contract of the coach REST backend.
//!
//! Only the chat endpoint has a client in this workspace
//! (`coach_interaction::HttpCoachAgent`). The remaining types describe the
//! dashboard endpoints so a backend and a front end can agree on shapes:
//!
//! | Method | Path                               | Body / Response              |
//! |--------|------------------------------------|------------------------------|
//! | POST   | `/skills/diagnose`                 | [`DiagnoseRequest`] → `Vec<SkillProfile>` |
//! | GET    | `/skills/profile`                  | [`SkillProfile`]             |
//! | GET    | `/monetization/paths`              | `Vec<MonetizationPath>`      |
//! | POST   | `/monetization/paths/{id}/plan`    | [`Plan`]                     |
//! | GET    | `/revenue/overview`                | [`RevenueOverview`]          |
//! | GET    | `/revenue/streams`                 | `Vec<RevenueStream>`         |
//! | POST   | `/chat/message`                    | [`ChatRequest`] → [`ChatResponse`] |
//! | GET    | `/workflows`                       | [`WorkflowList`]             |
//! | POST   | `/workflows`                       | [`WorkflowCreate`] → [`Workflow`] |
//! | GET    | `/user/profile`                    | [`UserProfile`]              |
//! | PATCH  | `/user/profile`                    | [`UserProfileUpdate`] → [`ProfileUpdated`] |
//!
//! Non-2xx responses carry an [`ErrorDetail`]. Request validation failures
//! carry a list in `detail` instead of a string.
//!
//! Response types accept the backend's snake_case keys as aliases.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::credit::Tier;

pub const CHAT_MESSAGE_PATH: &str = "/chat/message";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseRequest {
    pub description: String,
    #[serde(default)]
    pub experience: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
    pub id: String,
    pub name: String,
    pub category: String,
    pub proficiency_level: u8,
    pub monetization_potential: u8,
    pub demand_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_revenue: RevenueRange,
    pub time_to_first_revenue: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub path_id: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStream {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub monthly_revenue: f64,
    pub trend: Trend,
    pub trend_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueOverview {
    pub total_monthly_revenue: f64,
    #[serde(default)]
    pub streams: Vec<RevenueStream>,
}

/// Body of `POST /chat/message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Reply from `POST /chat/message`.
///
/// Both the front-end shape (`content`, `agentType`) and the backend's
/// field names (`message`, `agent_type`) are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(alias = "message")]
    pub content: String,
    #[serde(rename = "agentType", alias = "agent_type")]
    pub agent_type: String,
    #[serde(default, alias = "conversationId")]
    pub conversation_id: Option<String>,
    /// Informational only. The local ledger charges one credit per
    /// delivered reply whatever the backend reports here.
    #[serde(default = "default_credits_used", alias = "creditsUsed")]
    pub credits_used: u32,
}

fn default_credits_used() -> u32 {
    1
}

/// One step of a workflow, e.g. `{"type": "send_email", "config": {}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl WorkflowAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            config: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Paused,
    #[default]
    Draft,
}

/// Body of `POST /workflows`. The backend rejects an empty name or one
/// longer than 200 characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub trigger: String,
    pub actions: Vec<WorkflowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub trigger: String,
    #[serde(default)]
    pub actions: Vec<WorkflowAction>,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default, alias = "last_run")]
    pub last_run: Option<String>,
    #[serde(default, alias = "runs_this_month")]
    pub runs_this_month: u32,
}

/// Response of `GET /workflows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowList {
    pub workflows: Vec<Workflow>,
    pub total: u32,
    pub active: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tier: Tier,
    #[serde(alias = "credits_remaining")]
    pub credits_remaining: u32,
    #[serde(alias = "credits_total")]
    pub credits_total: u32,
    #[serde(default, alias = "credits_reset_days")]
    pub credits_reset_days: u32,
    #[serde(default, alias = "income_goal")]
    pub income_goal: f64,
    #[serde(default, alias = "active_streams")]
    pub active_streams: u32,
    #[serde(default, alias = "member_since")]
    pub member_since: Option<String>,
}

/// Body of `PATCH /user/profile`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_goal: Option<f64>,
}

/// Response of `PATCH /user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdated {
    pub id: String,
    #[serde(alias = "updated_fields")]
    pub updated_fields: Vec<String>,
    pub status: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
