//! Graph API error mapping.

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::FacebookIdentityProvider;

/// Graph API error code mapping
/// Reference: <https://developers.facebook.com/docs/graph-api/guides/error-handling/>
impl ProviderErrorMapper for FacebookIdentityProvider {
    fn provider_name(&self) -> &'static str {
        "facebook"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            // Session / token errors
            // 102: API Session expired
            // 190: Access token has expired or is otherwise invalid
            // 463 (subcode surfaced as code by some endpoints): token expired
            Some("102" | "190" | "463") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Permission errors
            // 10: Application does not have permission for this action
            // 200-299: various granular permission errors
            Some(code)
                if code == "10"
                    || code
                        .parse::<i64>()
                        .is_ok_and(|n| (200..300).contains(&n)) =>
            {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Throttling
            // 4: Application request limit reached
            // 17: User request limit reached
            // 613: Calls to this API have exceeded the rate limit
            Some("4" | "17" | "613") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // 100: Invalid parameter
            Some("100") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "general".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
