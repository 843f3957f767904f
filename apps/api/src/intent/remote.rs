//! Remote intent classification through the completion service.

use serde_json::Value;
use thiserror::Error;

use crate::intent::models::{Intent, IntentResult, UserProfile};
use crate::intent::prompts::{render_intent_prompt, INTENT_MAX_TOKENS, INTENT_SYSTEM};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, STRUCTURED_TEMPERATURE};
use crate::llm_client::{strip_json_fences, CompletionClient, CompletionRequest, LlmError};

const DEFAULT_CONFIDENCE: f64 = 0.8;
const DEFAULT_REASONING: &str = "Classified from your intake answers.";
const DEFAULT_RECOMMENDED_PATH: &str =
    "Take the career assessment to get a personalised roadmap.";

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("completion call failed: {0}")]
    Remote(#[from] LlmError),

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response carried an invalid intent: {0}")]
    InvalidIntent(String),
}

pub async fn classify_remote(
    client: &dyn CompletionClient,
    profile: &UserProfile,
) -> Result<IntentResult, ClassifyError> {
    let prompt = render_intent_prompt(profile);
    let system = format!("{INTENT_SYSTEM} {JSON_ONLY_SYSTEM}");
    let request = CompletionRequest {
        system: &system,
        prompt: &prompt,
        temperature: STRUCTURED_TEMPERATURE,
        max_tokens: INTENT_MAX_TOKENS,
        json_mode: true,
    };

    let text = client.complete(&request).await?;
    parse_intent_response(&text)
}

/// Validates the model output and normalises it into an `IntentResult`.
pub fn parse_intent_response(text: &str) -> Result<IntentResult, ClassifyError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))?;

    let intent = match value.get("intent") {
        Some(Value::String(s)) => {
            Intent::parse(s).ok_or_else(|| ClassifyError::InvalidIntent(s.clone()))?
        }
        Some(other) => return Err(ClassifyError::InvalidIntent(other.to_string())),
        None => return Err(ClassifyError::InvalidIntent("missing".to_string())),
    };

    let confidence = value
        .get("confidence")
        .and_then(Value::as_f64)
        .filter(|c| c.is_finite())
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    Ok(IntentResult {
        intent,
        confidence,
        reasoning: string_field(&value, "reasoning")
            .unwrap_or_else(|| DEFAULT_REASONING.to_string()),
        recommended_path: string_field(&value, "recommendedPath")
            .unwrap_or_else(|| DEFAULT_RECOMMENDED_PATH.to_string()),
        career_insights: string_field(&value, "careerInsights"),
        skill_gaps: string_list(&value, "skillGaps"),
        suggested_learning_path: string_list(&value, "suggestedLearningPath"),
        fallback: false,
    })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
