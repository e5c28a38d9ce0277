use async_trait::async_trait;
use std::env;

use crate::domain::settings::SettingsProvider;
use crate::domain::DomainError;

/// Settings provider that reads from environment variables
///
/// `("Azure.Translator", "AzureSubscriptionKey")` is looked up as
/// `AZURE_TRANSLATOR_AZURESUBSCRIPTIONKEY`, behind an optional prefix.
#[derive(Debug, Clone, Default)]
pub struct EnvSettingsProvider {
    prefix: Option<String>,
}

impl EnvSettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Environment variable name for a setting
    pub fn variable_name(&self, section: &str, name: &str) -> String {
        let key = format!("{}_{}", normalize(section), normalize(name));

        match self.prefix {
            Some(ref prefix) => format!("{}_{}", normalize(prefix), key),
            None => key,
        }
    }
}

fn normalize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl SettingsProvider for EnvSettingsProvider {
    async fn get_setting(&self, section: &str, name: &str) -> Result<Option<String>, DomainError> {
        let variable = self.variable_name(section, name);

        match env::var(&variable) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(DomainError::configuration(format!(
                "Environment variable '{}' is not valid unicode",
                variable
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
