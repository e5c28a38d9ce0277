//! Translation cost estimation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::document::{DocumentId, FieldName, WorkspaceId};
use super::DomainError;

/// Default currency of the configured price
pub const DEFAULT_CURRENCY: &str = "CHF";

/// Counts the characters a batch would send to the translation service
#[async_trait]
pub trait CharacterCounter: Send + Sync {
    /// Total character count of `field` across `document_ids`
    async fn count_characters(
        &self,
        workspace_id: WorkspaceId,
        field: &FieldName,
        document_ids: &[DocumentId],
    ) -> Result<u64, DomainError>;
}

/// Price of translating a number of characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub characters: u64,
    pub cost_per_million: f64,
    pub cost: f64,
    pub currency: String,
}

impl CostEstimate {
    pub fn new(characters: u64, cost_per_million: f64) -> Self {
        Self {
            characters,
            cost_per_million,
            cost: characters as f64 / 1_000_000.0 * cost_per_million,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn message(&self) -> String {
        format!("Translation cost is {:.2}{}", self.cost, self.currency)
    }
}
