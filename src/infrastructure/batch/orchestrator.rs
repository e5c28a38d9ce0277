//! Batch translation driver

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn, Instrument};
use uuid::Uuid;

use super::pipeline::DocumentPipeline;
use super::scheduler::ConcurrencyScheduler;
use crate::domain::cost::{CharacterCounter, CostEstimate};
use crate::domain::document::{DocumentId, DocumentJob, WorkspaceId};
use crate::domain::progress::{NoopProgressSink, ProgressSink};
use crate::domain::settings::{
    CostSettings, SettingsProvider, TranslatorSettings, DEFAULT_SETTINGS_SECTION,
};
use crate::domain::translation::BatchResult;
use crate::domain::DomainError;
use crate::infrastructure::observability::record_batch;

/// Status label shown by the host while a batch runs
pub const TRANSLATING_STATUS: &str = "Translating documents";

/// Drives a batch end to end
///
/// Settings are read and validated once; a configuration error aborts the
/// batch before any document is touched. Per-document failures never do.
pub struct BatchOrchestrator {
    pipeline: Arc<DocumentPipeline>,
    scheduler: ConcurrencyScheduler,
    settings: Arc<dyn SettingsProvider>,
    counter: Arc<dyn CharacterCounter>,
    progress: Arc<dyn ProgressSink>,
    settings_section: String,
}

impl std::fmt::Debug for BatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("pipeline", &self.pipeline)
            .field("scheduler", &self.scheduler)
            .field("settings", &self.settings)
            .field("settings_section", &self.settings_section)
            .finish_non_exhaustive()
    }
}

impl BatchOrchestrator {
    pub fn new(
        pipeline: DocumentPipeline,
        scheduler: ConcurrencyScheduler,
        settings: Arc<dyn SettingsProvider>,
        counter: Arc<dyn CharacterCounter>,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            scheduler,
            settings,
            counter,
            progress: Arc::new(NoopProgressSink),
            settings_section: DEFAULT_SETTINGS_SECTION.to_string(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_settings_section(mut self, section: impl Into<String>) -> Self {
        self.settings_section = section.into();
        self
    }

    /// Translate every document and aggregate the outcomes
    #[instrument(
        skip_all,
        fields(
            batch_id = tracing::field::Empty,
            workspace_id = %workspace_id,
            documents = document_ids.len()
        )
    )]
    pub async fn run(
        &self,
        workspace_id: WorkspaceId,
        document_ids: &[DocumentId],
    ) -> Result<BatchResult, DomainError> {
        let started = Instant::now();
        let batch_id = Uuid::new_v4();
        tracing::Span::current().record("batch_id", tracing::field::display(batch_id));

        self.pipeline.chunking().validate()?;
        let settings = Arc::new(
            TranslatorSettings::load(self.settings.as_ref(), &self.settings_section).await?,
        );

        self.progress.report_status(TRANSLATING_STATUS);
        info!(width = self.scheduler.width(), "Starting translation batch");

        let jobs: Vec<DocumentJob> = document_ids
            .iter()
            .map(|&document_id| {
                DocumentJob::new(
                    workspace_id,
                    document_id,
                    settings.source_field.clone(),
                    settings.destination_field.clone(),
                )
            })
            .collect();

        let outcomes = self
            .scheduler
            .run(jobs, self.progress.as_ref(), |job| {
                let pipeline = Arc::clone(&self.pipeline);
                let settings = Arc::clone(&settings);

                async move { pipeline.process(&job, &settings).await }.in_current_span()
            })
            .await?;

        let result = BatchResult::from_outcomes(outcomes).with_batch_id(batch_id);
        record_batch(&result, started.elapsed());

        if result.overall_success {
            info!(
                documents = result.total_documents(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Batch completed"
            );
        } else {
            warn!(
                documents = result.total_documents(),
                failed = result.failing_document_ids.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "{}",
                result.message()
            );
        }

        Ok(result)
    }

    /// Price translating the source field of every document
    #[instrument(
        skip_all,
        fields(workspace_id = %workspace_id, documents = document_ids.len())
    )]
    pub async fn estimate(
        &self,
        workspace_id: WorkspaceId,
        document_ids: &[DocumentId],
    ) -> Result<CostEstimate, DomainError> {
        let settings = CostSettings::load(self.settings.as_ref(), &self.settings_section).await?;

        let characters = self
            .counter
            .count_characters(workspace_id, &settings.source_field, document_ids)
            .await?;

        let estimate = CostEstimate::new(characters, settings.cost_per_million);
        info!(characters, cost = estimate.cost, "Estimated translation cost");

        Ok(estimate)
    }
}
