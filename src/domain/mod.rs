//! Domain layer - Core business logic and entities

pub mod chunking;
pub mod cost;
pub mod document;
pub mod error;
pub mod progress;
pub mod settings;
pub mod translation;

pub use chunking::{split, split_text, ChunkBoundaryConfig, TextChunk, DEFAULT_DELIMITERS};
pub use cost::{CharacterCounter, CostEstimate};
pub use document::{DocumentId, DocumentJob, DocumentStore, FieldName, WorkspaceId};
pub use error::DomainError;
pub use progress::{NoopProgressSink, ProgressSink};
pub use settings::{CostSettings, SettingsProvider, TranslatorSettings};
pub use translation::{
    BatchResult, OutcomeKind, Translation, TranslationClient, TranslationOutcome,
    TranslationRequest, TranslatorCredentials,
};
