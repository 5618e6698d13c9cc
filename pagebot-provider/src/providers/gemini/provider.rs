//! `TextGenerator` implementation for Gemini.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ProviderErrorMapper, TextGenerator};

use super::{GenerateContentRequest, GenerateContentResponse, GeminiTextGenerator};

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    fn id(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::InvalidCredentials {
                provider: "gemini".to_string(),
                raw_message: Some("API key must not be empty".to_string()),
            });
        }

        let action = format!("models/{model}:generateContent");
        let request = GenerateContentRequest::from_prompt(prompt);
        let response: GenerateContentResponse =
            self.post_model_action(&action, &request).await?;

        // A blocked prompt returns 200 with no candidates and a block reason.
        if let Some(feedback) = &response.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                log::warn!("[gemini] Prompt blocked: {reason}");
                return Err(ProviderError::ContentBlocked {
                    provider: "gemini".to_string(),
                    reason: Some(reason.clone()),
                });
            }
        }

        if let Some(candidate) = response.candidates.first() {
            if candidate.content.is_none() {
                let reason = candidate.finish_reason.clone();
                log::warn!("[gemini] Candidate suppressed: {reason:?}");
                return Err(ProviderError::ContentBlocked {
                    provider: "gemini".to_string(),
                    reason,
                });
            }
        }

        response
            .first_text()
            .ok_or_else(|| self.parse_error("Response contained no generated text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_api_key_rejected_before_network() {
        let g = GeminiTextGenerator::new(String::new());
        let err = g.generate("gemini-2.5-flash", "hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn id_is_gemini() {
        assert_eq!(
            TextGenerator::id(&GeminiTextGenerator::new("k".to_string())),
            "gemini"
        );
    }
}
