//! Document store backed by plain text files

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::document::{DocumentId, DocumentStore, FieldName, WorkspaceId};
use crate::domain::DomainError;

/// Stores each field as `<root>/<workspace>/<document>/<field>.txt`
#[derive(Debug, Clone)]
pub struct FileSystemDocumentStore {
    root: PathBuf,
}

impl FileSystemDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of a document field; path separators in the field name are replaced
    pub fn field_path(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
    ) -> PathBuf {
        let file_name: String = field
            .as_str()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();

        self.root
            .join(workspace_id.to_string())
            .join(document_id.to_string())
            .join(format!("{}.txt", file_name))
    }
}

#[async_trait]
impl DocumentStore for FileSystemDocumentStore {
    async fn read_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
    ) -> Result<String, DomainError> {
        let path = self.field_path(workspace_id, document_id, field);
        debug!(path = %path.display(), "Reading document field");

        tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::fetch(format!(
                "Document {} has no field '{}' in workspace {}",
                document_id, field, workspace_id
            )),
            _ => DomainError::fetch(format!("Failed to read {}: {}", path.display(), e)),
        })
    }

    async fn write_text(
        &self,
        workspace_id: WorkspaceId,
        document_id: DocumentId,
        field: &FieldName,
        text: &str,
    ) -> Result<(), DomainError> {
        let path = self.field_path(workspace_id, document_id, field);
        debug!(path = %path.display(), chars = text.chars().count(), "Writing document field");

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::update(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        tokio::fs::write(&path, text)
            .await
            .map_err(|e| DomainError::update(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldName {
        FieldName::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemDocumentStore::new(dir.path());
        let (ws, doc) = (WorkspaceId::new(1017), DocumentId::new(42));

        store
            .write_text(ws, doc, &field("Translated Text"), "Grüezi")
            .await
            .unwrap();

        let text = store
            .read_text(ws, doc, &field("Translated Text"))
            .await
            .unwrap();
        assert_eq!(text, "Grüezi");
        assert!(dir.path().join("1017/42/Translated Text.txt").exists());
    }

    #[tokio::test]
    async fn test_missing_field_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemDocumentStore::new(dir.path());

        let err = store
            .read_text(WorkspaceId::new(1), DocumentId::new(2), &field("Extracted Text"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_unwritable_location_is_update_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("7");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = FileSystemDocumentStore::new(dir.path());
        let err = store
            .write_text(WorkspaceId::new(7), DocumentId::new(1), &field("Out"), "x")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Update { .. }));
    }

    #[test]
    fn test_field_path_replaces_separators() {
        let store = FileSystemDocumentStore::new("/data");
        let path = store.field_path(WorkspaceId::new(1), DocumentId::new(2), &field("a/b"));

        assert_eq!(path, PathBuf::from("/data/1/2/a_b.txt"));
    }
}
