//! Gemini API error mapping.
//!
//! The REST surface reports gRPC-style status strings alongside HTTP codes;
//! the status string is the more stable signal, so it is preferred here.

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::GeminiTextGenerator;

impl ProviderErrorMapper for GeminiTextGenerator {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            Some("RESOURCE_EXHAUSTED") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // An invalid or revoked API key surfaces as UNAUTHENTICATED;
            // a key without access to the model surfaces as PERMISSION_DENIED.
            Some("UNAUTHENTICATED") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("PERMISSION_DENIED") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Bad model name or malformed request body.
            Some("INVALID_ARGUMENT") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "request".to_string(),
                detail: raw.message,
            },
            Some("NOT_FOUND") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "model".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> GeminiTextGenerator {
        GeminiTextGenerator::new("test-key".to_string())
    }

    #[test]
    fn resource_exhausted_is_rate_limited() {
        let err = generator().map_error(RawApiError::with_code(
            "RESOURCE_EXHAUSTED",
            "Quota exceeded",
        ));
        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[test]
    fn unauthenticated_is_invalid_credentials() {
        let err = generator().map_error(RawApiError::with_code(
            "UNAUTHENTICATED",
            "API key not valid",
        ));
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn permission_denied_maps() {
        let err = generator().map_error(RawApiError::with_code(
            "PERMISSION_DENIED",
            "Caller does not have permission",
        ));
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn invalid_argument_maps_to_request_param() {
        let err = generator().map_error(RawApiError::with_code(
            "INVALID_ARGUMENT",
            "Invalid JSON payload",
        ));
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { param, .. } if param == "request"
        ));
    }

    #[test]
    fn not_found_maps_to_model_param() {
        let err = generator().map_error(RawApiError::with_code(
            "NOT_FOUND",
            "models/gemini-nope is not found",
        ));
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { param, .. } if param == "model"
        ));
    }

    #[test]
    fn unknown_status_falls_back() {
        let err = generator().map_error(RawApiError::with_code("INTERNAL", "server error"));
        assert!(matches!(err, ProviderError::Unknown { .. }));
    }
}
