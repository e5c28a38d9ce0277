use serde::{Deserialize, Serialize};

/// Connection details for the remote translation service
#[derive(Clone, PartialEq, Eq)]
pub struct TranslatorCredentials {
    pub endpoint: String,
    pub subscription_key: String,
    pub region: String,
}

impl TranslatorCredentials {
    pub fn new(
        endpoint: impl Into<String>,
        subscription_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Debug for TranslatorCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorCredentials")
            .field("endpoint", &self.endpoint)
            .field("subscription_key", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

/// One chunk of text to translate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Source language, auto-detected by the service when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: None,
            target_language: target_language.into(),
        }
    }

    pub fn with_source_language(mut self, language: Option<String>) -> Self {
        self.source_language = language;
        self
    }
}

/// Language detected by the service for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f64,
}

/// The single translation returned for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<DetectedLanguage>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_language: None,
        }
    }

    pub fn with_detected_language(mut self, language: impl Into<String>, score: f64) -> Self {
        self.detected_language = Some(DetectedLanguage {
            language: language.into(),
            score,
        });
        self
    }
}
