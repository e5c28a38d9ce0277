//! Remote translation service clients

pub mod azure;
pub mod http_client;

pub use azure::AzureTranslatorClient;
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
