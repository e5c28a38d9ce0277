use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::chunking::ChunkBoundaryConfig;
use crate::domain::settings::DEFAULT_SETTINGS_SECTION;
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Batch translation tuning
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    #[serde(flatten)]
    pub chunking: ChunkBoundaryConfig,
    /// Maximum number of documents translated at once
    #[serde(default = "default_concurrency_width")]
    pub concurrency_width: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Largest chunk, in characters, a single request may carry
    #[serde(default = "default_request_char_limit")]
    pub request_char_limit: usize,
    /// Host settings section holding fields, credentials and price
    #[serde(default = "default_settings_section")]
    pub settings_section: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the file-backed document store
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_concurrency_width() -> usize {
    4
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_request_char_limit() -> usize {
    10_000
}

fn default_settings_section() -> String {
    DEFAULT_SETTINGS_SECTION.to_string()
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("data")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkBoundaryConfig::default(),
            concurrency_width: default_concurrency_width(),
            request_timeout_secs: default_request_timeout_secs(),
            request_char_limit: default_request_char_limit(),
            settings_section: default_settings_section(),
        }
    }
}

impl TranslatorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.translator.chunking.min_chunk_threshold, 9000);
        assert_eq!(config.translator.chunking.max_chunk_threshold, 9900);
        assert_eq!(config.translator.chunking.small_chunk_threshold, 20);
        assert_eq!(
            config.translator.chunking.delimiters,
            vec!['\n', '.', '!', '?', ';', ',', ' ']
        );
        assert_eq!(config.translator.concurrency_width, 4);
        assert_eq!(config.translator.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.translator.request_char_limit, 10_000);
        assert_eq!(config.translator.settings_section, "Azure.Translator");
        assert_eq!(config.storage.root, PathBuf::from("data"));
    }

    #[test]
    fn test_empty_source_yields_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.translator.concurrency_width, 4);
        assert_eq!(config.translator.chunking.max_chunk_threshold, 9900);
    }

    #[test]
    fn test_overrides_from_source() {
        let config: AppConfig = config::Config::builder()
            .set_override("logging.format", "json")
            .unwrap()
            .set_override("translator.concurrency_width", 8)
            .unwrap()
            .set_override("translator.max_chunk_threshold", 12000)
            .unwrap()
            .set_override("storage.root", "/srv/documents")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.translator.concurrency_width, 8);
        assert_eq!(config.translator.chunking.max_chunk_threshold, 12000);
        assert_eq!(config.translator.chunking.min_chunk_threshold, 9000);
        assert_eq!(config.storage.root, PathBuf::from("/srv/documents"));
    }
}
