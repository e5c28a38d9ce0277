//! Process-wide setup shared by the subcommands

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::domain::document::DocumentStore;
use crate::domain::DomainError;
use crate::infrastructure::batch::{BatchOrchestrator, ConcurrencyScheduler, DocumentPipeline};
use crate::infrastructure::observability::{
    init_metrics, init_tracing, shutdown_tracing, PrometheusMetrics,
};
use crate::infrastructure::progress::TracingProgressSink;
use crate::infrastructure::settings::EnvSettingsProvider;
use crate::infrastructure::storage::{FileSystemDocumentStore, StoreCharacterCounter};
use crate::infrastructure::translator::{AzureTranslatorClient, HttpClient};

/// Loaded configuration plus installed observability
pub struct CommandContext {
    pub config: AppConfig,
    metrics: Option<PrometheusMetrics>,
}

impl CommandContext {
    /// Load `.env` and the application config, then initialize logging and metrics
    pub fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = AppConfig::load()?;
        init_tracing(&config.logging, &config.observability.tracing);
        let metrics = init_metrics(&config.observability.metrics);

        Ok(Self::new(config, metrics))
    }

    pub fn new(config: AppConfig, metrics: Option<PrometheusMetrics>) -> Self {
        Self { config, metrics }
    }

    /// Wire the orchestrator against the file store and environment settings
    pub fn orchestrator(&self, documents: usize) -> Result<BatchOrchestrator, DomainError> {
        let translator = &self.config.translator;

        let http = HttpClient::with_timeout(translator.request_timeout())?;
        let client = Arc::new(AzureTranslatorClient::new(http));
        let store: Arc<dyn DocumentStore> =
            Arc::new(FileSystemDocumentStore::new(self.config.storage.root.clone()));

        let pipeline = DocumentPipeline::new(client, Arc::clone(&store), translator.chunking.clone())
            .with_request_char_limit(translator.request_char_limit);
        let scheduler = ConcurrencyScheduler::new(translator.concurrency_width)?;

        Ok(BatchOrchestrator::new(
            pipeline,
            scheduler,
            Arc::new(EnvSettingsProvider::new()),
            Arc::new(StoreCharacterCounter::new(store)),
        )
        .with_progress(Arc::new(TracingProgressSink::new().with_total(documents)))
        .with_settings_section(translator.settings_section.as_str()))
    }

    /// Flush metrics and spans
    pub async fn finish(self) {
        if let (Some(metrics), Some(path)) = (
            self.metrics.as_ref(),
            self.config.observability.metrics.textfile(),
        ) {
            if let Err(e) = metrics.write_textfile(path).await {
                warn!("{}", e);
            }
        }

        if self.config.observability.tracing.enabled {
            shutdown_tracing();
        }
    }
}
