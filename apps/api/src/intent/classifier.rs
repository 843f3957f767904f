//! Intent classification: remote strategy first when configured, rule table otherwise.
//!
//! Both strategies return the same `IntentResult` shape. Failures of the remote
//! strategy are values (`ClassifyError`), logged and replaced by the rule result;
//! `classify_intent` itself never fails.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::intent::models::{IntentResult, UserProfile};
use crate::intent::remote::{classify_remote, ClassifyError};
use crate::intent::rules::classify_by_rules;
use crate::llm_client::CompletionClient;

#[async_trait]
pub trait IntentStrategy: Send + Sync {
    async fn classify(&self, profile: &UserProfile) -> Result<IntentResult, ClassifyError>;
}

/// Classification through the completion service.
pub struct RemoteStrategy(pub Arc<dyn CompletionClient>);

#[async_trait]
impl IntentStrategy for RemoteStrategy {
    async fn classify(&self, profile: &UserProfile) -> Result<IntentResult, ClassifyError> {
        classify_remote(self.0.as_ref(), profile).await
    }
}

/// Deterministic decision table. Never errors.
pub struct RuleStrategy;

impl RuleStrategy {
    pub fn resolve(&self, profile: &UserProfile) -> IntentResult {
        classify_by_rules(profile)
    }
}

#[async_trait]
impl IntentStrategy for RuleStrategy {
    async fn classify(&self, profile: &UserProfile) -> Result<IntentResult, ClassifyError> {
        Ok(self.resolve(profile))
    }
}

pub async fn classify_intent(
    remote: Option<&dyn IntentStrategy>,
    profile: &UserProfile,
) -> IntentResult {
    if let Some(strategy) = remote {
        match strategy.classify(profile).await {
            Ok(result) => {
                debug!(
                    "Remote intent classification: {} ({:.2})",
                    result.intent.as_str(),
                    result.confidence
                );
                return result;
            }
            Err(e) => warn!("Remote intent classification failed, using rules: {e}"),
        }
    } else {
        debug!("No completion client configured, using rule-based intent");
    }

    RuleStrategy.resolve(profile)
}
