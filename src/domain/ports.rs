use crate::utils::error::AdviceError;
use async_trait::async_trait;

/// Source of personalised advice for a profile label.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn fetch_advice(&self, profile: &str) -> Result<String, AdviceError>;
}
