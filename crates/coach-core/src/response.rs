//! Canned coach replies.
//!
//! Every intent maps to one static template. Nothing from the user's text is
//! substituted into the reply.

use crate::intent::Intent;

/// Welcome message a new conversation may open with.
pub const GREETING: &str = "Welcome to your AI Income Coach! I'm here to help you diagnose skills, find monetization paths, create content, and optimize your revenue streams.

I can help you with:
- **Skills Analysis**: understanding your highest-value skills
- **Monetization Strategy**: finding the best revenue paths for you
- **Content Creation**: generating courses, templates, and marketing materials
- **Revenue Optimization**: analyzing your income and suggesting improvements

What would you like to work on today?";

/// Prompts offered while a conversation has no user message yet.
pub const SUGGESTED_PROMPTS: [&str; 6] = [
    "Analyze my skills and suggest the best monetization path",
    "Help me create a course outline for React developers",
    "How can I increase my consulting revenue?",
    "Create a content calendar for my newsletter",
    "What should I price my design templates at?",
    "Help me set up a workflow for client onboarding",
];

const SKILLS_DIAGNOSIS_REPLY: &str = "Based on our analysis, here's your skills assessment:

**Top Monetizable Skills:**
1. **UI/UX Design**: 92% monetization potential, high market demand
2. **React Development**: 95% monetization potential, very high demand
3. **Content Writing**: 75% monetization potential, steady demand

**Key Insight:** Your combination of design + development skills is rare and commands a premium. Creators with this dual skill set earn 2.3x more than single-skill specialists.

**Recommended Next Steps:**
- Run a full skills diagnostic for detailed scoring
- Explore the \"UI/UX Consulting\" monetization path (95% match)
- Consider creating a React + Design course

Would you like me to dive deeper into any of these areas?";

const MONETIZATION_STRATEGY_REPLY: &str = "Here are strategies to price your work and grow your revenue:

**Current Analysis:**
Your consulting stream ($1,200/mo) dropped 5% this month, while your template shop is your fastest-growing product.

**Quick Wins:**
1. **Raise your rate**: At $150/hr, you're underpriced for UI/UX consulting. Market rate for your experience level is $200-250/hr.
2. **Create packages**: Offer \"UI Audit\" ($500), \"UX Sprint\" ($2,500), and \"Full Redesign\" ($5,000+) packages.
3. **Anchor your products**: Price templates in three tiers ($19 / $49 / $99) so the middle tier converts best.

**Medium-term:**
4. **Build a referral system**: Offer a 10% referral fee to past clients.
5. **Publish case studies**: Turn past projects into detailed case studies for your website.

**Projected Impact:** These changes could lift monthly revenue by $1,800-2,800 within 2 months.

Should I help you set up the service packages or a pricing page?";

const CONTENT_CREATION_REPLY: &str = "Here's a suggested course outline based on your skills:

**\"Modern React UI Development\": Course Outline**

**Module 1:** React Fundamentals Refresher (2 lessons)
**Module 2:** TypeScript for React Developers (3 lessons)
**Module 3:** Component Architecture Patterns (3 lessons)
**Module 4:** Building a Design System (4 lessons)
**Module 5:** State Management Deep Dive (3 lessons)
**Module 6:** Performance Optimization (2 lessons)
**Module 7:** Testing & Deployment (2 lessons)
**Module 8:** Building a Complete Project (4 lessons)

**Launch Plan:** $79 early-bird, $129 regular
**Estimated Revenue:** $2,000-$5,000/month after launch
**Platform:** Gumroad (lowest fees, best for tech courses)

Want me to flesh out any specific module or write the marketing copy?";

const ROUTER_REPLY: &str = "Great question! Let me help you with that.

Based on your profile and goals, here are my recommendations:

1. **Focus on your highest-value skills**: Your design and development combination is your biggest competitive advantage.

2. **Diversify income streams**: Top earners maintain 3.3+ revenue streams on average. You're at 4, which is great!

3. **Invest in passive income**: Your course and template shop are growing fastest. Doubling down here will increase earnings with less time investment.

4. **Automate what you can**: Set up workflows for invoicing, client onboarding, and content distribution.

Would you like me to go deeper on any of these points? I can also help with specific tasks like creating content, analyzing revenue data, or setting up automation workflows.";

/// Returns the canned reply for `intent`.
///
/// `_text` is accepted so a real model can later take the same call shape;
/// the template is chosen by `intent` alone, which callers obtain from
/// [`crate::intent::classify`] over the shared rule table.
pub fn generate(_text: &str, intent: Intent) -> String {
    template_for(intent).to_string()
}

/// The static template backing [`generate`].
pub fn template_for(intent: Intent) -> &'static str {
    match intent {
        Intent::SkillsDiagnosis => SKILLS_DIAGNOSIS_REPLY,
        Intent::MonetizationStrategy => MONETIZATION_STRATEGY_REPLY,
        Intent::ContentCreation => CONTENT_CREATION_REPLY,
        Intent::Router => ROUTER_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::classify;

    #[test]
    fn test_skills_reply_carries_marker() {
        for text in ["diagnose me", "", "anything at all"] {
            assert!(generate(text, Intent::SkillsDiagnosis).contains("Monetizable Skills"));
        }
    }

    #[test]
    fn test_every_intent_has_distinct_template() {
        let mut seen = std::collections::HashSet::new();
        for intent in Intent::ALL {
            let reply = template_for(intent);
            assert!(!reply.trim().is_empty());
            assert!(reply.lines().count() > 1);
            assert!(seen.insert(reply));
        }
    }

    #[test]
    fn test_reply_follows_classified_intent() {
        let text = "How should I price my course?";
        let reply = generate(text, classify(text));
        assert_eq!(reply, template_for(Intent::MonetizationStrategy));
    }

    #[test]
    fn test_reply_does_not_echo_input() {
        let text = "my secret project name is Zebrafish";
        assert!(!generate(text, classify(text)).contains("Zebrafish"));
    }

    #[test]
    fn test_suggested_prompts_cover_specialists() {
        let routed: std::collections::HashSet<_> =
            SUGGESTED_PROMPTS.iter().map(|p| classify(p)).collect();
        assert!(routed.contains(&Intent::SkillsDiagnosis));
        assert!(routed.contains(&Intent::MonetizationStrategy));
        assert!(routed.contains(&Intent::ContentCreation));
    }
}
