use crate::config::AdviceSettings;
use crate::core::advice::ChatAdviceClient;
use crate::domain::model::{AdviceOutcome, Profile, SurveyInput, SurveyResult};
use crate::domain::ports::AdviceProvider;
use crate::utils::error::AdviceError;
use std::sync::Arc;
use std::time::Duration;

/// Classifies a submission and attaches advice, falling back to the
/// profile's local advice when the provider fails or runs out of time.
#[derive(Clone)]
pub struct SurveyService {
    advice: Arc<dyn AdviceProvider>,
    request_timeout: Duration,
}

impl SurveyService {
    pub fn new(advice: Arc<dyn AdviceProvider>, request_timeout: Duration) -> Self {
        Self {
            advice,
            request_timeout,
        }
    }

    /// Service backed by the chat-completion client described by `settings`.
    pub fn from_settings(settings: AdviceSettings) -> crate::utils::error::Result<Self> {
        let request_timeout = settings.effective_timeout();
        let client = ChatAdviceClient::new(settings)?;
        Ok(Self::new(Arc::new(client), request_timeout))
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub async fn evaluate(&self, input: SurveyInput) -> SurveyResult {
        let (profile, _) = input.classify();
        tracing::debug!(
            "Classified ({}, {}, {}) as {}",
            input.confidence,
            input.worry,
            input.human_skills,
            profile
        );

        let fetched =
            tokio::time::timeout(self.request_timeout, self.advice.fetch_advice(profile.label()))
                .await
                .unwrap_or_else(|_| Err(AdviceError::Timeout(self.request_timeout)));

        let advice = match fetched {
            Ok(text) => AdviceOutcome::Fetched(text),
            Err(e) => fallback(profile, &e),
        };

        SurveyResult {
            input,
            profile,
            advice,
        }
    }
}

fn fallback(profile: Profile, err: &AdviceError) -> AdviceOutcome {
    let kind = err.kind();
    tracing::warn!(
        kind = %kind,
        profile = %profile,
        "⚠️ Advice fetch failed: {}, showing local guidance",
        err
    );
    AdviceOutcome::fallback(profile, kind)
}
