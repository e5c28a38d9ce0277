use async_trait::async_trait;
use std::fmt::Debug;

use super::{Translation, TranslationRequest, TranslatorCredentials};
use crate::domain::DomainError;

/// Trait for remote translation services
///
/// One request carries exactly one chunk and yields exactly one translation.
#[async_trait]
pub trait TranslationClient: Send + Sync + Debug {
    /// Translate a single chunk
    async fn translate(
        &self,
        request: &TranslationRequest,
        credentials: &TranslatorCredentials,
    ) -> Result<Translation, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
