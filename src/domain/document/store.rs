//! Host text storage boundary

use async_trait::async_trait;

use super::{DocumentId, FieldName, WorkspaceId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read and write access to document text fields
///
/// Both operations are opaque remote calls that may fail.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the text stored in `field` of a document
    async fn read_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
    ) -> Result<String, DomainError>;

    /// Overwrite `field` of a document with `text`
    async fn write_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
        text: &str,
    ) -> Result<(), DomainError>;
}
