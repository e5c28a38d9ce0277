//! Per-document outcomes and the aggregated batch result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::document::DocumentId;

/// Kind of terminal state reached by a document pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    FetchFailed,
    ProtocolError,
    UpdateFailed,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::FetchFailed => "fetch_failed",
            Self::ProtocolError => "protocol_error",
            Self::UpdateFailed => "update_failed",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal classification of one document's pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TranslationOutcome {
    Success {
        document_id: DocumentId,
        chunks: usize,
        characters: usize,
    },
    FetchFailed {
        document_id: DocumentId,
        reason: String,
    },
    ProtocolError {
        document_id: DocumentId,
        #[serde(skip_serializing_if = "Option::is_none")]
        chunk_index: Option<usize>,
        reason: String,
    },
    UpdateFailed {
        document_id: DocumentId,
        reason: String,
    },
}

impl TranslationOutcome {
    pub fn success(document_id: DocumentId, chunks: usize, characters: usize) -> Self {
        Self::Success {
            document_id,
            chunks,
            characters,
        }
    }

    pub fn fetch_failed(document_id: DocumentId, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            document_id,
            reason: reason.into(),
        }
    }

    pub fn protocol_error(
        document_id: DocumentId,
        chunk_index: Option<usize>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ProtocolError {
            document_id,
            chunk_index,
            reason: reason.into(),
        }
    }

    pub fn update_failed(document_id: DocumentId, reason: impl Into<String>) -> Self {
        Self::UpdateFailed {
            document_id,
            reason: reason.into(),
        }
    }

    pub fn document_id(&self) -> DocumentId {
        match self {
            Self::Success { document_id, .. }
            | Self::FetchFailed { document_id, .. }
            | Self::ProtocolError { document_id, .. }
            | Self::UpdateFailed { document_id, .. } => *document_id,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success { .. } => OutcomeKind::Success,
            Self::FetchFailed { .. } => OutcomeKind::FetchFailed,
            Self::ProtocolError { .. } => OutcomeKind::ProtocolError,
            Self::UpdateFailed { .. } => OutcomeKind::UpdateFailed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure detail, `None` for a successful run
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::FetchFailed { reason, .. }
            | Self::ProtocolError { reason, .. }
            | Self::UpdateFailed { reason, .. } => Some(reason),
        }
    }
}

/// Aggregate result of one batch invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub batch_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub overall_success: bool,
    /// Documents whose outcome was not a success, in completion order
    pub failing_document_ids: Vec<DocumentId>,
    /// Every outcome, in completion order
    pub outcomes: Vec<TranslationOutcome>,
}

impl BatchResult {
    /// Aggregate outcomes collected in completion order
    pub fn from_outcomes(outcomes: Vec<TranslationOutcome>) -> Self {
        let failing_document_ids: Vec<DocumentId> = outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(TranslationOutcome::document_id)
            .collect();

        Self {
            batch_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            overall_success: failing_document_ids.is_empty(),
            failing_document_ids,
            outcomes,
        }
    }

    pub fn with_batch_id(mut self, batch_id: Uuid) -> Self {
        self.batch_id = batch_id;
        self
    }

    pub fn total_documents(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of outcomes of the given kind
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.outcomes.iter().filter(|o| o.kind() == kind).count()
    }

    /// Single line message for the host
    pub fn message(&self) -> String {
        if self.overall_success {
            return format!("Translated {} documents", self.total_documents());
        }

        let ids: Vec<String> = self
            .failing_document_ids
            .iter()
            .map(ToString::to_string)
            .collect();

        format!("Translation failed for documents: {}", ids.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u64) -> DocumentId {
        DocumentId::new(value)
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = TranslationOutcome::protocol_error(id(3), Some(2), "2 translations");

        assert_eq!(outcome.document_id(), id(3));
        assert_eq!(outcome.kind(), OutcomeKind::ProtocolError);
        assert_eq!(outcome.reason(), Some("2 translations"));
        assert!(!outcome.is_success());

        let outcome = TranslationOutcome::success(id(4), 2, 120);
        assert!(outcome.is_success());
        assert_eq!(outcome.reason(), None);
    }

    #[test]
    fn test_all_success() {
        let result = BatchResult::from_outcomes(vec![
            TranslationOutcome::success(id(1), 1, 10),
            TranslationOutcome::success(id(2), 3, 30),
        ]);

        assert!(result.overall_success);
        assert!(result.failing_document_ids.is_empty());
        assert_eq!(result.successful(), 2);
        assert_eq!(result.message(), "Translated 2 documents");
    }

    #[test]
    fn test_failures_keep_completion_order() {
        let result = BatchResult::from_outcomes(vec![
            TranslationOutcome::update_failed(id(9), "locked"),
            TranslationOutcome::success(id(1), 1, 10),
            TranslationOutcome::fetch_failed(id(5), "missing"),
            TranslationOutcome::protocol_error(id(2), None, "HTTP 500"),
        ]);

        assert!(!result.overall_success);
        assert_eq!(result.failing_document_ids, vec![id(9), id(5), id(2)]);
        assert_eq!(result.count(OutcomeKind::FetchFailed), 1);
        assert_eq!(result.count(OutcomeKind::ProtocolError), 1);
        assert_eq!(result.count(OutcomeKind::UpdateFailed), 1);
        assert_eq!(result.message(), "Translation failed for documents: 9, 5, 2");
    }

    #[test]
    fn test_empty_batch_is_success() {
        let result = BatchResult::from_outcomes(Vec::new());
        assert!(result.overall_success);
        assert_eq!(result.total_documents(), 0);
    }

    #[test]
    fn test_batch_id_override() {
        let batch_id = Uuid::new_v4();
        let result = BatchResult::from_outcomes(Vec::new()).with_batch_id(batch_id);

        assert_eq!(result.batch_id, batch_id);
    }

    #[test]
    fn test_outcome_serialization() {
        let json =
            serde_json::to_value(TranslationOutcome::fetch_failed(id(8), "not found")).unwrap();

        assert_eq!(json["outcome"], "fetch_failed");
        assert_eq!(json["document_id"], 8);
        assert_eq!(json["reason"], "not found");
    }
}
