//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use pagebot_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Page not found in the store
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// No operator session; login is required first
    #[error("Login required")]
    LoginRequired,

    /// The identity adapter has not finished initializing
    #[error("Identity SDK not ready")]
    SdkNotReady,

    /// Capability intentionally not implemented
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Collaborator error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when
    /// returning `false`. Update this method when new variants are added.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::PageNotFound(_)
            | Self::ValidationError(_)
            | Self::LoginRequired
            | Self::SdkNotReady
            | Self::Unsupported(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_errors() {
        assert!(CoreError::PageNotFound("1".into()).is_expected());
        assert!(CoreError::LoginRequired.is_expected());
        assert!(CoreError::SdkNotReady.is_expected());
        assert!(CoreError::Unsupported("token refresh".into()).is_expected());
    }

    #[test]
    fn unexpected_errors() {
        assert!(!CoreError::SerializationError("bad json".into()).is_expected());
    }

    #[test]
    fn provider_classification_delegates() {
        let expected = CoreError::Provider(ProviderError::LoginRequired {
            provider: "facebook".into(),
        });
        assert!(expected.is_expected());

        let unexpected = CoreError::Provider(ProviderError::NetworkError {
            provider: "facebook".into(),
            detail: "connection reset".into(),
        });
        assert!(!unexpected.is_expected());
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_string(&CoreError::PageNotFound("1001".into())).unwrap();
        assert_eq!(json, r#"{"code":"PageNotFound","details":"1001"}"#);
    }
}
