//! Document selection arguments shared by the subcommands

use clap::Args;
use std::path::PathBuf;

use crate::domain::document::{parse_document_ids, DocumentId, WorkspaceId};
use crate::domain::DomainError;

#[derive(Args, Debug, Clone)]
pub struct DocumentSelection {
    /// Workspace the documents belong to
    #[arg(long)]
    pub workspace: u64,

    /// Comma separated document IDs
    #[arg(long)]
    pub documents: Option<String>,

    /// File with document IDs, separated by commas or whitespace
    #[arg(long)]
    pub documents_file: Option<PathBuf>,
}

impl DocumentSelection {
    pub fn workspace_id(&self) -> WorkspaceId {
        WorkspaceId::new(self.workspace)
    }

    /// Collect the selected IDs, inline ones first, duplicates removed
    pub async fn resolve(&self) -> Result<Vec<DocumentId>, DomainError> {
        let mut ids = match self.documents {
            Some(ref list) => parse_document_ids(list)?,
            None => Vec::new(),
        };

        if let Some(ref path) = self.documents_file {
            let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
                DomainError::validation(format!("Failed to read {}: {}", path.display(), e))
            })?;
            ids.extend(parse_document_ids(&contents)?);
        }

        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));

        if ids.is_empty() {
            return Err(DomainError::validation(
                "no documents selected, use --documents or --documents-file",
            ));
        }

        Ok(ids)
    }
}
