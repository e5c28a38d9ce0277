//! Named host settings consumed by a translation batch

use super::SettingsProvider;
use crate::domain::document::FieldName;
use crate::domain::translation::TranslatorCredentials;
use crate::domain::DomainError;

/// Default settings section
pub const DEFAULT_SETTINGS_SECTION: &str = "Azure.Translator";

/// Target language used when `TargetLanguage` is not set
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

pub const SOURCE_FIELD: &str = "SourceField";
pub const DESTINATION_FIELD: &str = "DestinationField";
pub const SERVICE_REGION: &str = "AzureServiceRegion";
pub const SUBSCRIPTION_KEY: &str = "AzureSubscriptionKey";
pub const TRANSLATOR_ENDPOINT: &str = "AzureTranslatorEndpoint";
pub const COST_PER_MILLION_CHARACTERS: &str = "Cost1MCharacters";
pub const SOURCE_LANGUAGE: &str = "SourceLanguage";
pub const TARGET_LANGUAGE: &str = "TargetLanguage";

/// Settings required to translate a batch, read once before any document work
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    pub source_field: FieldName,
    pub destination_field: FieldName,
    pub credentials: TranslatorCredentials,
    pub source_language: Option<String>,
    pub target_language: String,
}

impl TranslatorSettings {
    /// Load and validate every required setting of `section`
    pub async fn load(provider: &dyn SettingsProvider, section: &str) -> Result<Self, DomainError> {
        let source_field = required_field(provider, section, SOURCE_FIELD).await?;
        let destination_field = required_field(provider, section, DESTINATION_FIELD).await?;
        let region = provider.get_required_setting(section, SERVICE_REGION).await?;
        let subscription_key = provider.get_required_setting(section, SUBSCRIPTION_KEY).await?;
        let endpoint = provider.get_required_setting(section, TRANSLATOR_ENDPOINT).await?;

        let source_language = optional_setting(provider, section, SOURCE_LANGUAGE).await?;
        let target_language = optional_setting(provider, section, TARGET_LANGUAGE)
            .await?
            .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

        tracing::debug!(
            section,
            source_field = %source_field,
            destination_field = %destination_field,
            region = %region,
            endpoint = %endpoint,
            target_language = %target_language,
            "Loaded translator settings from {}",
            provider.provider_name()
        );

        Ok(Self {
            source_field,
            destination_field,
            credentials: TranslatorCredentials::new(endpoint, subscription_key, region),
            source_language,
            target_language,
        })
    }
}

/// Settings required to price a batch
#[derive(Debug, Clone)]
pub struct CostSettings {
    pub source_field: FieldName,
    pub cost_per_million: f64,
}

impl CostSettings {
    pub async fn load(provider: &dyn SettingsProvider, section: &str) -> Result<Self, DomainError> {
        let source_field = required_field(provider, section, SOURCE_FIELD).await?;
        let raw_cost = provider
            .get_required_setting(section, COST_PER_MILLION_CHARACTERS)
            .await?;

        let cost_per_million = raw_cost
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|cost| cost.is_finite() && *cost >= 0.0)
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "Setting {}/{} is not a non-negative number: '{}'",
                    section, COST_PER_MILLION_CHARACTERS, raw_cost
                ))
            })?;

        Ok(Self {
            source_field,
            cost_per_million,
        })
    }
}

async fn required_field(
    provider: &dyn SettingsProvider,
    section: &str,
    name: &str,
) -> Result<FieldName, DomainError> {
    let value = provider.get_required_setting(section, name).await?;

    FieldName::new(value)
        .map_err(|e| DomainError::configuration(format!("Setting {}/{}: {}", section, name, e)))
}

async fn optional_setting(
    provider: &dyn SettingsProvider,
    section: &str,
    name: &str,
) -> Result<Option<String>, DomainError> {
    Ok(provider
        .get_setting(section, name)
        .await?
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
