//! `[observability]` section: OTLP span export and the metrics textfile

use serde::Deserialize;
use std::path::{Path, PathBuf};

const LOCAL_COLLECTOR: &str = "http://localhost:4317";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

/// Span export over OTLP/gRPC, off unless `enabled` is set
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub enabled: bool,
    pub otlp_endpoint: String,
    /// Reported as the `service.name` resource attribute
    pub service_name: String,
    /// Fraction of batches whose spans are kept
    pub sampling_ratio: f64,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: LOCAL_COLLECTOR.to_string(),
            service_name: env!("CARGO_PKG_NAME").to_string(),
            sampling_ratio: 1.0,
        }
    }
}

/// A Prometheus recorder for the run, rendered once at exit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub textfile_path: Option<PathBuf>,
}

impl MetricsConfig {
    /// Where to write the rendered metrics; `None` while metrics are disabled
    pub fn textfile(&self) -> Option<&Path> {
        self.textfile_path.as_deref().filter(|_| self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_off_by_default() {
        let config = ObservabilityConfig::default();

        assert!(!config.tracing.enabled);
        assert_eq!(config.tracing.otlp_endpoint, LOCAL_COLLECTOR);
        assert_eq!(config.tracing.service_name, "azure-doc-translator");
        assert_eq!(config.tracing.sampling_ratio, 1.0);

        assert!(!config.metrics.enabled);
        assert!(config.metrics.textfile().is_none());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config: ObservabilityConfig = serde_json::from_value(serde_json::json!({
            "tracing": { "sampling_ratio": 0.1 },
            "metrics": { "enabled": true, "textfile_path": "/tmp/translator.prom" }
        }))
        .unwrap();

        assert_eq!(config.tracing.sampling_ratio, 0.1);
        assert_eq!(config.tracing.otlp_endpoint, LOCAL_COLLECTOR);
        assert_eq!(
            config.metrics.textfile(),
            Some(Path::new("/tmp/translator.prom"))
        );
    }

    #[test]
    fn test_textfile_ignored_while_disabled() {
        let config = MetricsConfig {
            enabled: false,
            textfile_path: Some(PathBuf::from("/tmp/translator.prom")),
        };

        assert!(config.textfile().is_none());
    }
}
