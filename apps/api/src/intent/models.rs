use serde::{Deserialize, Serialize};

/// The experience band that marks a user with no professional history.
pub const FRESHER_EXPERIENCE: &str = "Fresher (0 years)";

/// Intake form answers. Exists only for the duration of one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub purpose: Option<String>,
    /// Enumerated band, e.g. "Fresher (0 years)", "3-5 years".
    pub experience: Option<String>,
    pub current_role: Option<String>,
    pub target_roles: Option<Vec<String>>,
    pub age_group: Option<String>,
    pub education: Option<String>,
    pub functional_area: Option<String>,
}

impl UserProfile {
    pub fn is_fresher(&self) -> bool {
        self.experience.as_deref() == Some(FRESHER_EXPERIENCE)
    }

    /// "None" is what the intake form submits when the user has no role.
    pub fn has_current_role(&self) -> bool {
        matches!(self.current_role.as_deref(), Some(role) if role != "None")
    }

    pub fn has_target_roles(&self) -> bool {
        self.target_roles.as_ref().is_some_and(|roles| !roles.is_empty())
    }
}

/// Career-motivation category. Closed set; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Confused,
    Interested,
    Grow,
    Switch,
}

impl Intent {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confused" => Some(Intent::Confused),
            "interested" => Some(Intent::Interested),
            "grow" => Some(Intent::Grow),
            "switch" => Some(Intent::Switch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Confused => "confused",
            Intent::Interested => "interested",
            Intent::Grow => "grow",
            Intent::Switch => "switch",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    pub intent: Intent,
    /// Always within 0.0 – 1.0.
    pub confidence: f64,
    pub reasoning: String,
    pub recommended_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_insights: Option<String>,
    pub skill_gaps: Vec<String>,
    pub suggested_learning_path: Vec<String>,
    /// True when the rule table produced this result.
    pub fallback: bool,
}
