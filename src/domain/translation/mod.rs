//! Translation domain models and traits

mod client;
mod outcome;
mod request;

pub use client::TranslationClient;
pub use outcome::{BatchResult, OutcomeKind, TranslationOutcome};
pub use request::{DetectedLanguage, Translation, TranslationRequest, TranslatorCredentials};

#[cfg(test)]
pub use client::mock::MockTranslationClient;
