use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::http_client::HttpClientTrait;
use crate::domain::translation::{
    Translation, TranslationClient, TranslationRequest, TranslatorCredentials,
};
use crate::domain::DomainError;

const PROVIDER: &str = "azure_translator";
const API_VERSION: &str = "3.0";

/// Azure Translator (Text API v3) client
#[derive(Debug)]
pub struct AzureTranslatorClient<C: HttpClientTrait> {
    client: C,
}

impl<C: HttpClientTrait> AzureTranslatorClient<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    fn build_url(&self, endpoint: &str, request: &TranslationRequest) -> Result<String, DomainError> {
        let mut params = vec![
            ("api-version", API_VERSION),
            ("to", request.target_language.as_str()),
            ("includeAlignment", "true"),
        ];

        if let Some(ref source) = request.source_language {
            params.push(("from", source.as_str()));
        }

        let base = format!("{}/translate", endpoint.trim_end_matches('/'));
        let url = Url::parse_with_params(&base, &params).map_err(|e| {
            DomainError::configuration(format!("Invalid translator endpoint '{}': {}", endpoint, e))
        })?;

        Ok(url.into())
    }

    fn build_body(&self, request: &TranslationRequest) -> serde_json::Value {
        serde_json::json!([{ "Text": request.text }])
    }

    fn headers<'a>(&self, credentials: &'a TranslatorCredentials) -> Vec<(&'a str, &'a str)> {
        vec![
            ("Ocp-Apim-Subscription-Key", credentials.subscription_key.as_str()),
            ("Ocp-Apim-Subscription-Region", credentials.region.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, body: &str) -> Result<Translation, DomainError> {
        let results: Vec<AzureTranslateResult> = serde_json::from_str(body).map_err(|e| {
            DomainError::protocol(PROVIDER, format!("Failed to parse response: {}", e))
        })?;

        let result = exactly_one(results, "results")?;

        if let Some(ref detected) = result.detected_language {
            debug!(
                language = %detected.language,
                score = detected.score,
                "Service detected source language"
            );
        }

        let translation = exactly_one(result.translations, "translations")?;
        let mut parsed = Translation::new(translation.text);

        if let Some(detected) = result.detected_language {
            parsed = parsed.with_detected_language(detected.language, detected.score);
        }

        Ok(parsed)
    }
}

#[async_trait]
impl<C: HttpClientTrait> TranslationClient for AzureTranslatorClient<C> {
    #[instrument(skip_all, fields(chars = request.text.chars().count(), to = %request.target_language))]
    async fn translate(
        &self,
        request: &TranslationRequest,
        credentials: &TranslatorCredentials,
    ) -> Result<Translation, DomainError> {
        let url = self.build_url(&credentials.endpoint, request)?;
        let body = self.build_body(request);

        let response = self
            .client
            .post_json(&url, self.headers(credentials), &body)
            .await?;

        if !response.is_success() {
            return Err(DomainError::protocol(
                PROVIDER,
                format!("HTTP {}: {}", response.status, response.body),
            ));
        }

        self.parse_response(&response.body)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

fn exactly_one<T>(items: Vec<T>, what: &str) -> Result<T, DomainError> {
    let count = items.len();
    let mut items = items.into_iter();

    match (items.next(), count) {
        (Some(item), 1) => Ok(item),
        _ => Err(DomainError::protocol(
            PROVIDER,
            format!("Expected exactly 1 entry in {}, got {}", what, count),
        )),
    }
}

// Azure Translator API types. The service answers in camelCase, PascalCase is
// accepted as well.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AzureTranslateResult {
    #[serde(default, alias = "DetectedLanguage")]
    detected_language: Option<AzureDetectedLanguage>,
    #[serde(alias = "Translations")]
    translations: Vec<AzureTranslation>,
}

#[derive(Debug, Deserialize)]
struct AzureDetectedLanguage {
    #[serde(alias = "Language")]
    language: String,
    #[serde(alias = "Score")]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct AzureTranslation {
    #[serde(alias = "Text")]
    text: String,
}
