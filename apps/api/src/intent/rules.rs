//! Rule-based intent fallback. Deterministic and network-independent.
//!
//! Decision table over three facts derived from the profile:
//!
//! | fresher | target roles | current role | intent     |
//! |---------|--------------|--------------|------------|
//! | yes     | no           | -            | confused   |
//! | yes     | yes          | -            | interested |
//! | no      | no           | yes          | grow       |
//! | no      | yes          | yes          | switch     |
//! | no      | -            | no           | confused   |
//!
//! A purpose mentioning "role validation" overrides the table with `grow`.

use crate::intent::models::{Intent, IntentResult, UserProfile};

pub const FALLBACK_CONFIDENCE: f64 = 0.7;
const ROLE_VALIDATION_MARKER: &str = "role validation";

pub fn classify_by_rules(profile: &UserProfile) -> IntentResult {
    let intent = if profile
        .purpose
        .as_deref()
        .is_some_and(|p| p.contains(ROLE_VALIDATION_MARKER))
    {
        Intent::Grow
    } else {
        table_intent(profile)
    };

    let (reasoning, recommended_path) = branch_text(intent);

    IntentResult {
        intent,
        confidence: FALLBACK_CONFIDENCE,
        reasoning: reasoning.to_string(),
        recommended_path: recommended_path.to_string(),
        career_insights: None,
        skill_gaps: Vec::new(),
        suggested_learning_path: Vec::new(),
        fallback: true,
    }
}

fn table_intent(profile: &UserProfile) -> Intent {
    match (
        profile.is_fresher(),
        profile.has_target_roles(),
        profile.has_current_role(),
    ) {
        (true, false, _) => Intent::Confused,
        (true, true, _) => Intent::Interested,
        (false, false, true) => Intent::Grow,
        (false, true, true) => Intent::Switch,
        // Experienced but between roles: nothing in the profile points anywhere yet.
        (false, _, false) => Intent::Confused,
    }
}

fn branch_text(intent: Intent) -> (&'static str, &'static str) {
    match intent {
        Intent::Confused => (
            "You are at the start of your journey and have not settled on a direction yet.",
            "Take the career assessment to discover the roles that fit your strengths.",
        ),
        Intent::Interested => (
            "You are early in your career and already have specific roles in mind.",
            "Validate your target roles and build the foundational skills they require.",
        ),
        Intent::Grow => (
            "You have professional experience and want to progress in your current domain.",
            "Benchmark your current skills and close the gaps for the next level in your role.",
        ),
        Intent::Switch => (
            "You have professional experience and are looking to move into a different role.",
            "Map your transferable skills to your target roles and plan a focused transition.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(experience: &str, current_role: Option<&str>, targets: &[&str]) -> UserProfile {
        UserProfile {
            experience: Some(experience.to_string()),
            current_role: current_role.map(str::to_string),
            target_roles: Some(targets.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fresher_without_targets_is_confused() {
        let result = classify_by_rules(&profile("Fresher (0 years)", None, &[]));
        assert_eq!(result.intent, Intent::Confused);
    }

    #[test]
    fn test_fresher_with_targets_is_interested() {
        let result = classify_by_rules(&profile("Fresher (0 years)", None, &["QA"]));
        assert_eq!(result.intent, Intent::Interested);
    }

    #[test]
    fn test_experienced_with_role_no_targets_is_grow() {
        let result = classify_by_rules(&profile("5 years", Some("Backend Dev"), &[]));
        assert_eq!(result.intent, Intent::Grow);
    }

    #[test]
    fn test_experienced_with_role_and_targets_is_switch() {
        let result = classify_by_rules(&profile("5 years", Some("Backend Dev"), &["PM"]));
        assert_eq!(result.intent, Intent::Switch);
    }

    #[test]
    fn test_experienced_without_role_is_confused() {
        assert_eq!(
            classify_by_rules(&profile("5 years", None, &["PM"])).intent,
            Intent::Confused
        );
        assert_eq!(
            classify_by_rules(&profile("5 years", Some("None"), &[])).intent,
            Intent::Confused
        );
    }

    #[test]
    fn test_role_validation_purpose_forces_grow() {
        let mut p = profile("5 years", Some("Backend Dev"), &["PM"]);
        p.purpose = Some("I want role validation for my path".to_string());
        assert_eq!(classify_by_rules(&p).intent, Intent::Grow);

        let mut p = profile("Fresher (0 years)", None, &[]);
        p.purpose = Some("role validation".to_string());
        assert_eq!(classify_by_rules(&p).intent, Intent::Grow);
    }

    #[test]
    fn test_role_validation_match_is_case_sensitive() {
        let mut p = profile("Fresher (0 years)", None, &[]);
        p.purpose = Some("Role Validation".to_string());
        assert_eq!(classify_by_rules(&p).intent, Intent::Confused);
    }

    #[test]
    fn test_fallback_marker_and_confidence() {
        let result = classify_by_rules(&UserProfile::default());
        assert!(result.fallback);
        assert!((result.confidence - FALLBACK_CONFIDENCE).abs() < f64::EPSILON);
        assert!(!result.reasoning.is_empty());
        assert!(!result.recommended_path.is_empty());
        assert!(result.skill_gaps.is_empty());
    }
}
