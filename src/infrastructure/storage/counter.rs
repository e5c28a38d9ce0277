//! Character counting over a document store

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::cost::CharacterCounter;
use crate::domain::document::{DocumentId, DocumentStore, FieldName, WorkspaceId};
use crate::domain::DomainError;

/// Sums the character length of a field by reading every document
#[derive(Clone)]
pub struct StoreCharacterCounter {
    store: Arc<dyn DocumentStore>,
}

impl StoreCharacterCounter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for StoreCharacterCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCharacterCounter").finish_non_exhaustive()
    }
}

#[async_trait]
impl CharacterCounter for StoreCharacterCounter {
    async fn count_characters(
        &self,
        workspace_id: WorkspaceId,
        field: &FieldName,
        document_ids: &[DocumentId],
    ) -> Result<u64, DomainError> {
        let mut total = 0u64;

        for &document_id in document_ids {
            let text = self.store.read_text(workspace_id, document_id, field).await?;
            total += text.chars().count() as u64;
        }

        Ok(total)
    }
}
