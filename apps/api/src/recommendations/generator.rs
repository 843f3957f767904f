//! Recommendation generator. Never fails outward: any problem yields the default payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, CompletionClient, CompletionRequest, LlmError};
use crate::recommendations::prompts::{
    RECOMMENDATION_MAX_TOKENS, RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM,
    RECOMMENDATION_TEMPERATURE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub top_roles: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Recommendations {
    pub fn default_payload() -> Self {
        Self {
            top_roles: Vec::new(),
            summary: "Your personalised career summary is being prepared. \
                Explore the sections of your report in the meantime."
                .to_string(),
            recommendations: vec![
                "Review the assessment sections where you scored highest.".to_string(),
                "Shortlist two or three roles that match those strengths.".to_string(),
                "Book a counselling session to build a learning plan.".to_string(),
            ],
        }
    }
}

pub async fn generate_recommendations(
    client: Option<&dyn CompletionClient>,
    score_metadata: &Value,
) -> Recommendations {
    let Some(client) = client else {
        return Recommendations::default_payload();
    };

    match request_recommendations(client, score_metadata).await {
        Ok(recommendations) => recommendations,
        Err(e) => {
            warn!("Recommendation generation failed, using default payload: {e}");
            Recommendations::default_payload()
        }
    }
}

async fn request_recommendations(
    client: &dyn CompletionClient,
    score_metadata: &Value,
) -> Result<Recommendations, LlmError> {
    let metadata = serde_json::to_string_pretty(score_metadata)?;
    let prompt = RECOMMENDATION_PROMPT_TEMPLATE.replace("{score_metadata}", &metadata);
    let system = format!("{RECOMMENDATION_SYSTEM} {JSON_ONLY_SYSTEM}");

    let request = CompletionRequest {
        system: &system,
        prompt: &prompt,
        temperature: RECOMMENDATION_TEMPERATURE,
        max_tokens: RECOMMENDATION_MAX_TOKENS,
        json_mode: true,
    };
    complete_json(client, &request).await
}
