use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for host setting sources (environment, in-memory, ...)
#[async_trait]
pub trait SettingsProvider: Send + Sync + Debug {
    /// Look up a named setting in a section, `None` when it is not defined
    async fn get_setting(&self, section: &str, name: &str) -> Result<Option<String>, DomainError>;

    /// Look up a setting that must be present and non-blank
    async fn get_required_setting(&self, section: &str, name: &str) -> Result<String, DomainError> {
        match self.get_setting(section, name).await? {
            Some(value) if !value.trim().is_empty() => Ok(value),
            Some(_) => Err(DomainError::configuration(format!(
                "Setting {}/{} is empty",
                section, name
            ))),
            None => Err(DomainError::configuration(format!(
                "Setting {}/{} is not defined",
                section, name
            ))),
        }
    }

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
