use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::settings::SettingsProvider;
use crate::domain::DomainError;

/// Settings provider backed by a map, keyed by `(section, name)`
#[derive(Debug, Default)]
pub struct InMemorySettingsProvider {
    settings: RwLock<HashMap<(String, String), String>>,
}

impl InMemorySettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(
        self,
        section: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set(section, name, value);
        self
    }

    pub fn set(
        &self,
        section: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Ok(mut settings) = self.settings.write() {
            settings.insert((section.into(), name.into()), value.into());
        }
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettingsProvider {
    async fn get_setting(&self, section: &str, name: &str) -> Result<Option<String>, DomainError> {
        let settings = self.settings.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(settings
            .get(&(section.to_string(), name.to_string()))
            .cloned())
    }

    fn provider_name(&self) -> &'static str {
        "in_memory"
    }
}
