use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{LoginStatus, PageAccount, UserProfile};

/// Raw API error (internal use).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (format differs per collaborator).
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Error mapping trait (internal use).
/// Each collaborator adapter implements this to map raw API errors onto the
/// unified error type.
pub(crate) trait ProviderErrorMapper {
    /// Collaborator identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto the unified error type.
    fn map_error(&self, raw: RawApiError) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Identity/session collaborator.
///
/// Abstracts the Facebook Login SDK plus the Graph API calls the console needs.
/// The interactive OAuth popup itself belongs to the embedding frontend; an
/// adapter that has not been seeded with a user token reports
/// [`ProviderError::LoginRequired`] from [`login`](Self::login).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Collaborator identifier.
    fn id(&self) -> &'static str;

    /// Initialize the underlying SDK/client. Must be called before any other
    /// operation; callers gate interactive actions on its success.
    async fn init(&self) -> Result<()>;

    /// Probe the current login status without user interaction.
    async fn login_status(&self) -> Result<LoginStatus>;

    /// Establish a user session requesting the given permission scope.
    async fn login(&self, scope: &str) -> Result<LoginStatus>;

    /// Tear down the current user session.
    async fn logout(&self) -> Result<()>;

    /// Fetch the authenticated user's profile (id, name, picture URL).
    async fn fetch_profile(&self) -> Result<UserProfile>;

    /// Fetch the pages the authenticated user can manage, with their
    /// page-scoped access tokens.
    async fn fetch_accounts(&self) -> Result<Vec<PageAccount>>;
}

/// Text-generation collaborator.
///
/// Accepts one composed prompt and a model identifier, returns generated text.
/// Everything about the model is opaque to callers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Collaborator identifier.
    fn id(&self) -> &'static str;

    /// Generate a reply for the given prompt with the given model.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
