//! Graph API HTTP request methods.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{FacebookIdentityProvider, GraphErrorEnvelope, GRAPH_API_BASE, GRAPH_API_VERSION, MAX_RETRIES};

impl FacebookIdentityProvider {
    /// Perform a versioned GET against the Graph API.
    ///
    /// `path_and_query` starts with `/` and may carry its own query string;
    /// the access token is appended here so call sites never format it into
    /// loggable URLs.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let token = self.require_token().await?;
        let separator = if path_and_query.contains('?') { '&' } else { '?' };
        let url = format!(
            "{GRAPH_API_BASE}/{GRAPH_API_VERSION}{path_and_query}{separator}access_token={token}"
        );

        let request = self.client.get(&url);
        let (status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            path_and_query,
            MAX_RETRIES,
        )
        .await?;

        self.parse_graph_response(status, &body)
    }

    /// Follow an absolute paging URL returned by the Graph API.
    ///
    /// Paging URLs already embed the access token; nothing is appended.
    pub(crate) async fn get_absolute<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = self.client.get(url);
        let (status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            "<paging>",
            MAX_RETRIES,
        )
        .await?;

        self.parse_graph_response(status, &body)
    }

    /// Decode a Graph API response body, mapping the error envelope when the
    /// call failed.
    fn parse_graph_response<T: DeserializeOwned>(&self, status: u16, body: &str) -> Result<T> {
        if status >= 400 {
            let raw = match serde_json::from_str::<GraphErrorEnvelope>(body) {
                Ok(envelope) => {
                    let code = envelope.error.code.map(|c| c.to_string());
                    let subcode = envelope.error.subcode;
                    log::warn!(
                        "[facebook] API error (code={code:?}, subcode={subcode:?}): {}",
                        envelope.error.message
                    );
                    match code {
                        Some(code) => RawApiError::with_code(code, envelope.error.message),
                        None => RawApiError::new(envelope.error.message),
                    }
                }
                Err(_) => RawApiError::new(format!("HTTP {status}: {body}")),
            };
            return Err(self.map_error(raw));
        }

        HttpUtils::parse_json(body, self.provider_name())
    }
}
