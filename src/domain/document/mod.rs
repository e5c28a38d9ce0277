//! Documents and the host storage they live in

mod entity;
mod store;

pub use entity::{parse_document_ids, DocumentId, DocumentJob, FieldName, WorkspaceId};
pub use store::DocumentStore;

#[cfg(test)]
pub use store::MockDocumentStore;
