//! Intent classification.
//!
//! The keyword table in this module is the single source of truth for
//! routing a message to a specialist. Both [`classify`] and the response
//! generator in [`crate::response`] read it, so the agent badge shown on a
//! reply always matches the template used to produce it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The specialist a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intent {
    /// Assess skills and their monetization potential.
    SkillsDiagnosis,
    /// Pricing, revenue and monetization paths.
    MonetizationStrategy,
    /// Courses, templates and other content.
    ContentCreation,
    /// General coaching when no specialist matches.
    #[default]
    Router,
}

impl Intent {
    /// All intents, in routing order.
    pub const ALL: [Intent; 4] = [
        Intent::SkillsDiagnosis,
        Intent::MonetizationStrategy,
        Intent::ContentCreation,
        Intent::Router,
    ];

    /// Human readable agent name used for the reply badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::SkillsDiagnosis => "Skills Diagnosis",
            Intent::MonetizationStrategy => "Monetization Strategy",
            Intent::ContentCreation => "Content Creation",
            Intent::Router => "Router",
        }
    }

    /// Maps an agent label returned by the chat backend back to an intent.
    ///
    /// Accepts both the display names (`"Skills Diagnosis"`) and the router's
    /// raw labels (`"SKILLS_DIAGNOSIS"`). The backend's revenue tracker is the
    /// counterpart of [`Intent::MonetizationStrategy`]. Anything else,
    /// including `"GENERAL"` and `"AI Coach"`, is treated as [`Intent::Router`].
    pub fn from_agent_type(label: &str) -> Intent {
        let normalized = label
            .trim()
            .trim_end_matches(" Agent")
            .to_ascii_uppercase()
            .replace([' ', '-'], "_");

        match normalized.as_str() {
            "SKILLS_DIAGNOSIS" => Intent::SkillsDiagnosis,
            "MONETIZATION_STRATEGY" | "REVENUE_TRACKING" => Intent::MonetizationStrategy,
            "CONTENT_CREATION" => Intent::ContentCreation,
            _ => Intent::Router,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the routing table: any keyword routes to `intent`.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase substrings matched against the lowercased input.
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered routing table. The first matching row wins.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::SkillsDiagnosis,
        keywords: &["skill", "diagnos"],
    },
    IntentRule {
        intent: Intent::MonetizationStrategy,
        keywords: &["monetiz", "revenue", "price"],
    },
    IntentRule {
        intent: Intent::ContentCreation,
        keywords: &["content", "course", "create"],
    },
];

/// Classifies free text into an [`Intent`].
///
/// Matching is case-insensitive substring search over [`INTENT_RULES`];
/// text that matches no row falls through to [`Intent::Router`].
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_group() {
        assert_eq!(classify("Diagnose my strengths"), Intent::SkillsDiagnosis);
        assert_eq!(classify("what SKILLS do I have"), Intent::SkillsDiagnosis);
        assert_eq!(classify("How do I monetize?"), Intent::MonetizationStrategy);
        assert_eq!(classify("grow my revenue"), Intent::MonetizationStrategy);
        assert_eq!(classify("price my course"), Intent::MonetizationStrategy);
        assert_eq!(classify("Help me create a newsletter"), Intent::ContentCreation);
        assert_eq!(classify("outline a course"), Intent::ContentCreation);
        assert_eq!(classify("content calendar"), Intent::ContentCreation);
    }

    #[test]
    fn test_unmatched_text_routes_to_router() {
        assert_eq!(classify("hello there"), Intent::Router);
        assert_eq!(classify(""), Intent::Router);
        assert_eq!(classify("   "), Intent::Router);
    }

    #[test]
    fn test_first_group_wins_on_overlap() {
        assert_eq!(
            classify("Which skill brings the most revenue?"),
            Intent::SkillsDiagnosis
        );
        assert_eq!(
            classify("create content to increase revenue"),
            Intent::MonetizationStrategy
        );
    }

    #[test]
    fn test_classify_is_total_and_deterministic() {
        let inputs = [
            "Analyze my skills and suggest the best monetization path",
            "Help me set up a workflow for client onboarding",
            "Créer un cours",
            "日本語のテキスト",
            "🚀🚀🚀",
            "\n\t",
            "PRICE",
        ];
        for input in inputs {
            let first = classify(input);
            assert!(Intent::ALL.contains(&first));
            assert_eq!(first, classify(input));
        }
    }

    #[test]
    fn test_from_agent_type_accepts_display_and_raw_labels() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_agent_type(intent.display_name()), intent);
        }
        assert_eq!(
            Intent::from_agent_type("SKILLS_DIAGNOSIS"),
            Intent::SkillsDiagnosis
        );
        assert_eq!(
            Intent::from_agent_type("Revenue Tracking"),
            Intent::MonetizationStrategy
        );
        assert_eq!(
            Intent::from_agent_type("Content Creation Agent"),
            Intent::ContentCreation
        );
        assert_eq!(Intent::from_agent_type("AI Coach"), Intent::Router);
        assert_eq!(Intent::from_agent_type("GENERAL"), Intent::Router);
    }
}
