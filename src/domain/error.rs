use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Fetch error: {message}")]
    Fetch { message: String },

    #[error("Protocol error: {provider} - {message}")]
    Protocol { provider: String, message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Update error: {message}")]
    Update { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn protocol(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn update(message: impl Into<String>) -> Self {
        Self::Update {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Azure.Translator/SourceField is missing");
        assert_eq!(
            error.to_string(),
            "Configuration error: Azure.Translator/SourceField is missing"
        );
    }

    #[test]
    fn test_protocol_error() {
        let error = DomainError::protocol("azure_translator", "expected 1 result, got 2");
        assert_eq!(
            error.to_string(),
            "Protocol error: azure_translator - expected 1 result, got 2"
        );
    }

    #[test]
    fn test_per_document_errors() {
        assert_eq!(DomainError::fetch("gone").to_string(), "Fetch error: gone");
        assert!(matches!(DomainError::update("locked"), DomainError::Update { .. }));
        assert!(matches!(DomainError::transport("timed out"), DomainError::Transport { .. }));
    }
}
