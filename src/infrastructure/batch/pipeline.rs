//! Per-document translation pipeline

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::domain::chunking::{split, ChunkBoundaryConfig};
use crate::domain::document::{DocumentJob, DocumentStore};
use crate::domain::settings::TranslatorSettings;
use crate::domain::translation::{TranslationClient, TranslationOutcome, TranslationRequest};
use crate::infrastructure::observability::{record_chunk_translated, record_document_outcome};

/// Default largest chunk a single request may carry, in characters
pub const DEFAULT_REQUEST_CHAR_LIMIT: usize = 10_000;

/// Fetch, split, translate, reassemble and write back one document
///
/// Chunks are translated strictly in order. The first failure ends the run
/// and nothing is written back unless every chunk was translated.
pub struct DocumentPipeline {
    client: Arc<dyn TranslationClient>,
    store: Arc<dyn DocumentStore>,
    chunking: ChunkBoundaryConfig,
    request_char_limit: usize,
}

impl std::fmt::Debug for DocumentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPipeline")
            .field("client", &self.client)
            .field("chunking", &self.chunking)
            .field("request_char_limit", &self.request_char_limit)
            .finish_non_exhaustive()
    }
}

impl DocumentPipeline {
    pub fn new(
        client: Arc<dyn TranslationClient>,
        store: Arc<dyn DocumentStore>,
        chunking: ChunkBoundaryConfig,
    ) -> Self {
        Self {
            client,
            store,
            chunking,
            request_char_limit: DEFAULT_REQUEST_CHAR_LIMIT,
        }
    }

    pub fn with_request_char_limit(mut self, limit: usize) -> Self {
        self.request_char_limit = limit;
        self
    }

    pub fn chunking(&self) -> &ChunkBoundaryConfig {
        &self.chunking
    }

    /// Run the pipeline to its terminal outcome
    #[instrument(
        skip_all,
        fields(document_id = %job.document_id, workspace_id = %job.workspace_id)
    )]
    pub async fn process(
        &self,
        job: &DocumentJob,
        settings: &TranslatorSettings,
    ) -> TranslationOutcome {
        let started = Instant::now();
        let outcome = self.run(job, settings).await;

        match outcome {
            TranslationOutcome::Success {
                chunks, characters, ..
            } => info!(chunks, characters, "Document translated"),
            TranslationOutcome::ProtocolError {
                chunk_index,
                ref reason,
                ..
            } => warn!(
                outcome = %outcome.kind(),
                chunk_index = ?chunk_index,
                reason = %reason,
                "Document translation failed"
            ),
            TranslationOutcome::FetchFailed { ref reason, .. }
            | TranslationOutcome::UpdateFailed { ref reason, .. } => warn!(
                outcome = %outcome.kind(),
                reason = %reason,
                "Document translation failed"
            ),
        }

        record_document_outcome(outcome.kind(), started.elapsed());
        outcome
    }

    async fn run(&self, job: &DocumentJob, settings: &TranslatorSettings) -> TranslationOutcome {
        let document_id = job.document_id;

        let text = match self
            .store
            .read_text(job.workspace_id, document_id, &job.source_field)
            .await
        {
            Ok(text) => text,
            Err(e) => return TranslationOutcome::fetch_failed(document_id, e.to_string()),
        };

        let chunks = split(&text, &self.chunking);
        let characters = text.chars().count();
        debug!(chunks = chunks.len(), characters, "Split document text");

        if let Some(chunk) = chunks
            .iter()
            .find(|chunk| chunk.char_len() > self.request_char_limit)
        {
            return TranslationOutcome::protocol_error(
                document_id,
                Some(chunk.index),
                format!(
                    "Chunk of {} characters exceeds the request limit of {}",
                    chunk.char_len(),
                    self.request_char_limit
                ),
            );
        }

        let mut translated = String::with_capacity(text.len());

        for chunk in &chunks {
            let request = TranslationRequest::new(
                chunk.content.as_str(),
                settings.target_language.as_str(),
            )
            .with_source_language(settings.source_language.clone());

            match self.client.translate(&request, &settings.credentials).await {
                Ok(translation) => {
                    debug!(chunk_index = chunk.index, chars = chunk.char_len(), "Chunk translated");
                    record_chunk_translated(self.client.provider_name(), chunk.char_len());
                    translated.push_str(&translation.text);
                }
                Err(e) => {
                    return TranslationOutcome::protocol_error(
                        document_id,
                        Some(chunk.index),
                        e.to_string(),
                    );
                }
            }
        }

        if let Err(e) = self
            .store
            .write_text(
                job.workspace_id,
                document_id,
                &job.destination_field,
                &translated,
            )
            .await
        {
            return TranslationOutcome::update_failed(document_id, e.to_string());
        }

        TranslationOutcome::success(document_id, chunks.len(), characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{DocumentId, FieldName, MockDocumentStore, WorkspaceId};
    use crate::domain::translation::{MockTranslationClient, TranslatorCredentials};
    use crate::domain::DomainError;
    use crate::infrastructure::storage::InMemoryDocumentStore;
    use crate::infrastructure::translator::http_client::mock::MockHttpClient;
    use crate::infrastructure::translator::AzureTranslatorClient;

    const WS: u64 = 1017;

    fn source() -> FieldName {
        FieldName::new("Extracted Text").unwrap()
    }

    fn destination() -> FieldName {
        FieldName::new("Translated Text").unwrap()
    }

    fn job(id: u64) -> DocumentJob {
        DocumentJob::new(WorkspaceId::new(WS), DocumentId::new(id), source(), destination())
    }

    fn settings() -> TranslatorSettings {
        TranslatorSettings {
            source_field: source(),
            destination_field: destination(),
            credentials: TranslatorCredentials::new("https://translator.test/", "key", "westeurope"),
            source_language: None,
            target_language: "en".to_string(),
        }
    }

    fn small_chunks() -> ChunkBoundaryConfig {
        ChunkBoundaryConfig::new(['.', ' '], 5, 15, 2)
    }

    fn store_with(id: u64, text: &str) -> InMemoryDocumentStore {
        InMemoryDocumentStore::new().with_document(
            WorkspaceId::new(WS),
            DocumentId::new(id),
            &source(),
            text,
        )
    }

    #[tokio::test]
    async fn test_translates_chunks_in_order_and_writes_back() {
        let client = Arc::new(MockTranslationClient::new());
        let store = Arc::new(store_with(1, "Hello world. This is a test."));
        let pipeline = DocumentPipeline::new(client.clone(), store.clone(), small_chunks());

        let outcome = pipeline.process(&job(1), &settings()).await;

        assert_eq!(outcome, TranslationOutcome::success(DocumentId::new(1), 2, 28));
        assert_eq!(client.requests(), vec!["Hello world.", " This is a test."]);
        assert_eq!(
            store
                .get(WorkspaceId::new(WS), DocumentId::new(1), &destination())
                .as_deref(),
            Some("HELLO WORLD. THIS IS A TEST.")
        );
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let client = Arc::new(MockTranslationClient::new());
        let store = Arc::new(InMemoryDocumentStore::new());
        let pipeline = DocumentPipeline::new(client.clone(), store, small_chunks());

        let outcome = pipeline.process(&job(2), &settings()).await;

        assert!(matches!(outcome, TranslationOutcome::FetchFailed { .. }));
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_chunk_failure_stops_translation_and_skips_write() {
        let client = Arc::new(MockTranslationClient::new().with_failure_on("This"));
        let mut store = MockDocumentStore::new();
        store
            .expect_read_text()
            .returning(|_, _, _| Ok("Hello world. This is a test. Bye now.".to_string()));
        store.expect_write_text().never();

        let pipeline = DocumentPipeline::new(client.clone(), Arc::new(store), small_chunks());
        let outcome = pipeline.process(&job(3), &settings()).await;

        assert_eq!(
            outcome.kind(),
            crate::domain::translation::OutcomeKind::ProtocolError
        );
        assert!(matches!(
            outcome,
            TranslationOutcome::ProtocolError {
                chunk_index: Some(1),
                ..
            }
        ));
        assert_eq!(client.request_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_response_cardinality_skips_write() {
        let url = "https://translator.test/translate?api-version=3.0&to=en&includeAlignment=true";
        let http = MockHttpClient::new().with_json_response(
            url,
            serde_json::json!([{ "translations": [{ "text": "a" }, { "text": "b" }] }]),
        );
        let client = Arc::new(AzureTranslatorClient::new(http));

        let mut store = MockDocumentStore::new();
        store
            .expect_read_text()
            .returning(|_, _, _| Ok("Hallo Welt".to_string()));
        store.expect_write_text().never();

        let pipeline =
            DocumentPipeline::new(client, Arc::new(store), ChunkBoundaryConfig::default());
        let outcome = pipeline.process(&job(4), &settings()).await;

        assert!(matches!(
            outcome,
            TranslationOutcome::ProtocolError {
                chunk_index: Some(0),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_update_failure() {
        let client = Arc::new(MockTranslationClient::new());
        let mut store = MockDocumentStore::new();
        store
            .expect_read_text()
            .returning(|_, _, _| Ok("Hallo".to_string()));
        store
            .expect_write_text()
            .times(1)
            .returning(|_, _, _, _| Err(DomainError::update("field is read-only")));

        let pipeline = DocumentPipeline::new(client.clone(), Arc::new(store), small_chunks());
        let outcome = pipeline.process(&job(5), &settings()).await;

        assert!(matches!(outcome, TranslationOutcome::UpdateFailed { .. }));
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn test_oversized_chunk_fails_without_request() {
        let client = Arc::new(MockTranslationClient::new());
        let store = Arc::new(store_with(6, &"x".repeat(40)));
        let pipeline =
            DocumentPipeline::new(client.clone(), store, small_chunks()).with_request_char_limit(30);

        let outcome = pipeline.process(&job(6), &settings()).await;

        assert!(matches!(
            outcome,
            TranslationOutcome::ProtocolError {
                chunk_index: Some(0),
                ..
            }
        ));
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_writes_empty_translation() {
        let client = Arc::new(MockTranslationClient::new());
        let store = Arc::new(store_with(7, ""));
        let pipeline = DocumentPipeline::new(client.clone(), store.clone(), small_chunks());

        let outcome = pipeline.process(&job(7), &settings()).await;

        assert_eq!(outcome, TranslationOutcome::success(DocumentId::new(7), 0, 0));
        assert_eq!(client.request_count(), 0);
        assert_eq!(
            store
                .get(WorkspaceId::new(WS), DocumentId::new(7), &destination())
                .as_deref(),
            Some("")
        );
    }
}
