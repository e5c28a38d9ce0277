//! In-memory document store

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::document::{DocumentId, DocumentStore, FieldName, WorkspaceId};
use crate::domain::DomainError;

type FieldKey = (WorkspaceId, DocumentId, String);

/// Thread-safe in-memory document store
///
/// Useful for testing and embedding. Reads or writes of selected documents can
/// be made to fail.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    fields: RwLock<HashMap<FieldKey, String>>,
    failing_reads: HashSet<DocumentId>,
    failing_writes: HashSet<DocumentId>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document field
    pub fn with_document(
        self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
        text: impl Into<String>,
    ) -> Self {
        if let Ok(mut fields) = self.fields.write() {
            fields.insert(
                (workspace_id, document_id, field.as_str().to_string()),
                text.into(),
            );
        }
        self
    }

    pub fn with_read_failure(mut self, document_id: DocumentId) -> Self {
        self.failing_reads.insert(document_id);
        self
    }

    pub fn with_write_failure(mut self, document_id: DocumentId) -> Self {
        self.failing_writes.insert(document_id);
        self
    }

    /// Current text of a field, if any
    pub fn get(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
    ) -> Option<String> {
        self.fields.read().ok().and_then(|fields| {
            fields
                .get(&(workspace_id, document_id, field.as_str().to_string()))
                .cloned()
        })
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
    ) -> Result<String, DomainError> {
        if self.failing_reads.contains(&document_id) {
            return Err(DomainError::fetch(format!(
                "Read of document {} rejected",
                document_id
            )));
        }

        let fields = self
            .fields
            .read()
            .map_err(|e| DomainError::fetch(format!("Failed to acquire read lock: {}", e)))?;

        fields
            .get(&(workspace_id, document_id, field.as_str().to_string()))
            .cloned()
            .ok_or_else(|| {
                DomainError::fetch(format!(
                    "Document {} has no field '{}' in workspace {}",
                    document_id, field, workspace_id
                ))
            })
    }

    async fn write_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
        text: &str,
    ) -> Result<(), DomainError> {
        if self.failing_writes.contains(&document_id) {
            return Err(DomainError::update(format!(
                "Write of document {} rejected",
                document_id
            )));
        }

        let mut fields = self
            .fields
            .write()
            .map_err(|e| DomainError::update(format!("Failed to acquire write lock: {}", e)))?;

        fields.insert(
            (workspace_id, document_id, field.as_str().to_string()),
            text.to_string(),
        );

        Ok(())
    }
}
