//! Prometheus metrics infrastructure

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;
use crate::domain::translation::{BatchResult, OutcomeKind};
use crate::domain::DomainError;

/// Prometheus metrics handle for rendering collected metrics
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Render the metrics in the Prometheus text format
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Write the rendered metrics to a textfile collector file
    pub async fn write_textfile(&self, path: &Path) -> Result<(), DomainError> {
        tokio::fs::write(path, self.render()).await.map_err(|e| {
            DomainError::internal(format!(
                "Failed to write metrics to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl From<PrometheusHandle> for PrometheusMetrics {
    fn from(handle: PrometheusHandle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::debug!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            register_default_metrics();

            tracing::info!("Prometheus metrics initialized");

            Some(PrometheusMetrics::from(handle))
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

fn register_default_metrics() {
    gauge!("translator_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record one translated chunk
pub fn record_chunk_translated(provider: &str, characters: usize) {
    let labels = [("provider", provider.to_string())];

    counter!("translator_chunks_total", &labels).increment(1);
    counter!("translator_characters_total", &labels).increment(characters as u64);
}

/// Record the terminal outcome of one document
pub fn record_document_outcome(kind: OutcomeKind, duration: Duration) {
    let labels = [("outcome", kind.as_str().to_string())];

    counter!("translator_documents_total", &labels).increment(1);
    histogram!("translator_document_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Record a finished batch
pub fn record_batch(result: &BatchResult, duration: Duration) {
    let status = if result.overall_success { "success" } else { "failure" };
    let labels = [("status", status.to_string())];

    counter!("translator_batches_total", &labels).increment(1);
    histogram!("translator_batch_duration_seconds", &labels).record(duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::DocumentId;
    use crate::domain::translation::TranslationOutcome;

    #[test]
    fn test_disabled_metrics_install_nothing() {
        assert!(init_metrics(&MetricsConfig::default()).is_none());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let result = BatchResult::from_outcomes(vec![TranslationOutcome::success(
            DocumentId::new(1),
            1,
            5,
        )]);

        record_chunk_translated("mock", 5);
        record_document_outcome(OutcomeKind::Success, Duration::from_millis(3));
        record_batch(&result, Duration::from_millis(10));
    }
}
