// All LLM prompt constants for the Recommendations module.

/// Combined with `JSON_ONLY_SYSTEM` at call time.
pub const RECOMMENDATION_SYSTEM: &str = "You are a career guidance expert who turns \
    career assessment scores into concrete role recommendations.";

pub const RECOMMENDATION_MAX_TOKENS: u32 = 1500;
pub const RECOMMENDATION_TEMPERATURE: f32 = 0.7;

/// Recommendation prompt template. Replace `{score_metadata}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Below are the results of a career assessment, including section scores and any metadata collected with them.

ASSESSMENT RESULTS:
{score_metadata}

Based on these results, return a JSON object with this EXACT schema:
{
  "top_roles": ["Role title best suited to the results"],
  "summary": "Two or three sentences summarising the user's strengths and fit",
  "recommendations": ["Concrete, actionable next step"]
}

Rules:
1. List at most 3 roles in `top_roles`, strongest fit first
2. Keep every recommendation to a single sentence
3. Base everything on the results above, do not invent scores"#;
