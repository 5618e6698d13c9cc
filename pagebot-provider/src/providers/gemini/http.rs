//! Gemini REST request methods.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{GeminiErrorEnvelope, GeminiTextGenerator, GEMINI_API_BASE, GEMINI_API_VERSION, MAX_RETRIES};

impl GeminiTextGenerator {
    /// POST a model action (e.g. `models/{model}:generateContent`).
    ///
    /// The API key travels as a query parameter and is never formatted into a
    /// loggable string.
    pub(crate) async fn post_model_action<B, T>(&self, action: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!(
            "{GEMINI_API_BASE}/{GEMINI_API_VERSION}/{action}?key={}",
            self.api_key
        );

        let request = self.client.post(&url).json(body);
        let (status, response_body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            action,
            MAX_RETRIES,
        )
        .await?;

        self.parse_gemini_response(status, &response_body)
    }

    fn parse_gemini_response<T: DeserializeOwned>(&self, status: u16, body: &str) -> Result<T> {
        if status >= 400 {
            let raw = match serde_json::from_str::<GeminiErrorEnvelope>(body) {
                Ok(envelope) => {
                    log::warn!(
                        "[gemini] API error (status={:?}): {}",
                        envelope.error.status,
                        envelope.error.message
                    );
                    match envelope.error.status {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::providers::gemini::GenerateContentResponse;

    fn generator() -> GeminiTextGenerator {
        GeminiTextGenerator::new("test-key".to_string())
    }

    #[test]
    fn error_body_mapped_via_status_string() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let result: Result<GenerateContentResponse> =
            generator().parse_gemini_response(429, body);
        assert!(matches!(result, Err(ProviderError::RateLimited { .. })));
    }

    #[test]
    fn unparseable_error_body_becomes_unknown() {
        let result: Result<GenerateContentResponse> =
            generator().parse_gemini_response(500, "oops");
        assert!(matches!(result, Err(ProviderError::Unknown { .. })));
    }

    #[test]
    fn success_body_parsed() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#;
        let resp: GenerateContentResponse =
            generator().parse_gemini_response(200, body).unwrap();
        assert_eq!(resp.first_text().unwrap(), "hi");
    }
}
