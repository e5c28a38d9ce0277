//! Chunk boundary configuration

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Delimiters tried by default, coarsest first
pub const DEFAULT_DELIMITERS: [char; 7] = ['\n', '.', '!', '?', ';', ',', ' '];

/// Size thresholds and delimiter priority used to split document text
///
/// All thresholds are character counts. One configuration is shared by every
/// chunk of every document in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkBoundaryConfig {
    /// Split characters in priority order, coarse to fine
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,
    /// Fragments are merged while the running chunk stays below this size
    #[serde(default = "default_min_chunk_threshold")]
    pub min_chunk_threshold: usize,
    /// Chunks longer than this are split on the next delimiter
    #[serde(default = "default_max_chunk_threshold")]
    pub max_chunk_threshold: usize,
    /// Fragments shorter than this are always merged into their neighbour
    #[serde(default = "default_small_chunk_threshold")]
    pub small_chunk_threshold: usize,
}

fn default_delimiters() -> Vec<char> {
    DEFAULT_DELIMITERS.to_vec()
}

fn default_min_chunk_threshold() -> usize {
    9000
}

fn default_max_chunk_threshold() -> usize {
    9900
}

fn default_small_chunk_threshold() -> usize {
    20
}

impl ChunkBoundaryConfig {
    /// Create a configuration from explicit delimiters and thresholds
    pub fn new(delimiters: impl Into<Vec<char>>, min: usize, max: usize, small: usize) -> Self {
        Self {
            delimiters: delimiters.into(),
            min_chunk_threshold: min,
            max_chunk_threshold: max,
            small_chunk_threshold: small,
        }
    }

    /// Replace the delimiter priority list
    pub fn with_delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.delimiters.is_empty() {
            return Err(DomainError::validation(
                "at least one chunk delimiter is required",
            ));
        }

        if self.min_chunk_threshold >= self.max_chunk_threshold {
            return Err(DomainError::validation(format!(
                "min_chunk_threshold ({}) must be less than max_chunk_threshold ({})",
                self.min_chunk_threshold, self.max_chunk_threshold
            )));
        }

        Ok(())
    }

    /// Whether `c` is one of the configured delimiters
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Character length of `text`, not counting one trailing delimiter
    ///
    /// A chunk carries the delimiter that followed it in the source so that
    /// concatenation is exact; that character does not count toward the size
    /// ceiling.
    pub fn measured_len(&self, text: &str) -> usize {
        let len = text.chars().count();

        match text.chars().next_back() {
            Some(last) if self.is_delimiter(last) => len - 1,
            _ => len,
        }
    }
}

impl Default for ChunkBoundaryConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            min_chunk_threshold: default_min_chunk_threshold(),
            max_chunk_threshold: default_max_chunk_threshold(),
            small_chunk_threshold: default_small_chunk_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkBoundaryConfig::default();
        assert_eq!(config.min_chunk_threshold, 9000);
        assert_eq!(config.max_chunk_threshold, 9900);
        assert_eq!(config.small_chunk_threshold, 20);
        assert_eq!(config.delimiters.first(), Some(&'\n'));
        assert_eq!(config.delimiters.last(), Some(&' '));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let invalid = ChunkBoundaryConfig::new(vec!['.'], 100, 100, 2);
        assert!(invalid.validate().is_err());

        let invalid = ChunkBoundaryConfig::new(vec!['.'], 200, 100, 2);
        assert!(invalid.validate().is_err());

        let invalid = ChunkBoundaryConfig::new(Vec::new(), 5, 15, 2);
        assert!(invalid.validate().is_err());

        let valid = ChunkBoundaryConfig::new(vec!['.', ' '], 5, 15, 2);
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_measured_len_ignores_trailing_delimiter() {
        let config = ChunkBoundaryConfig::new(vec!['.', ' '], 5, 15, 2);

        assert_eq!(config.measured_len(" This is a test."), 15);
        assert_eq!(config.measured_len("Hello world"), 11);
        assert_eq!(config.measured_len(""), 0);
        assert_eq!(config.measured_len("."), 0);
    }

    #[test]
    fn test_measured_len_counts_chars() {
        let config = ChunkBoundaryConfig::new(vec!['.'], 5, 15, 2);
        assert_eq!(config.measured_len("Grüße."), 5);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ChunkBoundaryConfig =
            serde_json::from_str(r#"{"max_chunk_threshold": 5000, "min_chunk_threshold": 4000}"#)
                .unwrap();

        assert_eq!(config.max_chunk_threshold, 5000);
        assert_eq!(config.small_chunk_threshold, 20);
        assert_eq!(config.delimiters, DEFAULT_DELIMITERS.to_vec());
    }
}
