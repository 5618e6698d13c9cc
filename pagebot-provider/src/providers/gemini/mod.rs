//! Gemini text-generation adapter.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{
    GenerateContentRequest, GenerateContentResponse, GeminiErrorEnvelope,
};

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub(crate) const GEMINI_API_VERSION: &str = "v1beta";
/// Transport-level retries for transient failures.
pub(crate) const MAX_RETRIES: u32 = 2;

/// Gemini text-generation adapter.
pub struct GeminiTextGenerator {
    pub(crate) client: Client,
    pub(crate) api_key: String,
}

impl GeminiTextGenerator {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: create_http_client(),
            api_key,
        }
    }
}
