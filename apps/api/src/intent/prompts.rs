// All LLM prompt constants for the Intent module.

use crate::intent::models::UserProfile;

/// System prompt for intent classification. Combined with `JSON_ONLY_SYSTEM` at call time.
pub const INTENT_SYSTEM: &str = "You are an expert career counsellor who classifies \
    the career intent of learners from their intake answers.";

pub const INTENT_MAX_TOKENS: u32 = 1000;

/// Intent classification prompt template.
/// Replace: {purpose}, {experience}, {current_role}, {target_roles},
///          {age_group}, {education}, {functional_area}
pub const INTENT_PROMPT_TEMPLATE: &str = r#"Classify the career intent of the following user.

USER PROFILE:
- Purpose: {purpose}
- Experience: {experience}
- Current role: {current_role}
- Target roles: {target_roles}
- Age group: {age_group}
- Education: {education}
- Functional area of interest: {functional_area}

INTENT OPTIONS (pick exactly one):
- "confused": no clear direction yet, exploring what is possible
- "interested": early in their career with specific roles in mind
- "grow": wants to advance within their current role or domain
- "switch": wants to move from their current role into a different one

Return a JSON object with this EXACT schema:
{
  "intent": "confused | interested | grow | switch",
  "confidence": 0.85,
  "reasoning": "One or two sentences explaining the classification",
  "recommendedPath": "The single most useful next step for this user",
  "careerInsights": "A short observation about their profile and market",
  "skillGaps": ["skill the user should build"],
  "suggestedLearningPath": ["ordered learning step"]
}"#;

const NOT_SPECIFIED: &str = "Not specified";

/// Renders the template. Absent fields become explicit tokens so the prompt is never partial.
pub fn render_intent_prompt(profile: &UserProfile) -> String {
    let target_roles = match &profile.target_roles {
        Some(roles) if !roles.is_empty() => roles.join(", "),
        _ => "None specified".to_string(),
    };

    INTENT_PROMPT_TEMPLATE
        .replace("{purpose}", or_not_specified(&profile.purpose))
        .replace("{experience}", or_not_specified(&profile.experience))
        .replace(
            "{current_role}",
            profile.current_role.as_deref().unwrap_or("None"),
        )
        .replace("{target_roles}", &target_roles)
        .replace("{age_group}", or_not_specified(&profile.age_group))
        .replace("{education}", or_not_specified(&profile.education))
        .replace("{functional_area}", or_not_specified(&profile.functional_area))
}

fn or_not_specified(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_SPECIFIED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_every_placeholder() {
        let profile = UserProfile {
            purpose: Some("Upskill".to_string()),
            experience: Some("5 years".to_string()),
            current_role: Some("Backend Dev".to_string()),
            target_roles: Some(vec!["PM".to_string(), "QA".to_string()]),
            age_group: Some("25-30".to_string()),
            education: Some("B.Tech".to_string()),
            functional_area: Some("Product".to_string()),
        };
        let prompt = render_intent_prompt(&profile);
        assert!(!prompt.contains("{purpose}"));
        assert!(!prompt.contains("{target_roles}"));
        assert!(prompt.contains("- Purpose: Upskill"));
        assert!(prompt.contains("- Current role: Backend Dev"));
        assert!(prompt.contains("- Target roles: PM, QA"));
        assert!(prompt.contains("- Functional area of interest: Product"));
    }

    #[test]
    fn test_render_absent_fields_use_explicit_tokens() {
        let prompt = render_intent_prompt(&UserProfile::default());
        assert!(prompt.contains("- Purpose: Not specified"));
        assert!(prompt.contains("- Experience: Not specified"));
        assert!(prompt.contains("- Current role: None"));
        assert!(prompt.contains("- Target roles: None specified"));
        assert!(prompt.contains("- Education: Not specified"));
        assert!(!prompt.contains("{purpose}"));
        assert!(!prompt.contains("{functional_area}"));
    }

    #[test]
    fn test_render_empty_target_roles() {
        let profile = UserProfile {
            target_roles: Some(vec![]),
            ..Default::default()
        };
        assert!(render_intent_prompt(&profile).contains("- Target roles: None specified"));
    }
}
