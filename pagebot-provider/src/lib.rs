//! # pagebot-provider
//!
//! External collaborator adapters for the page-bot console: identity/session
//! management through Facebook Login and the Graph API, and text generation
//! through the Gemini REST API.
//!
//! ## Collaborators
//!
//! | Collaborator | Trait | Auth Method |
//! |--------------|-------|-------------|
//! | Facebook Graph API | [`IdentityProvider`] | User access token (OAuth popup owned by the frontend) |
//! | Gemini | [`TextGenerator`] | API key |
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagebot_provider::{
//!     create_identity_provider, create_text_generator, IdentityProvider, TextGenerator,
//! };
//!
//! # async fn example() -> pagebot_provider::Result<()> {
//! let identity = create_identity_provider("your-app-id".to_string());
//! identity.init().await?;
//!
//! let generator = create_text_generator("your-api-key".to_string());
//! let reply = generator
//!     .generate("gemini-2.5-flash", "Say hello to a new customer")
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). The
//! error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::LoginRequired`] — no user session; run the OAuth flow
//! - [`ProviderError::InvalidCredentials`] — token or API key rejected
//! - [`ProviderError::ContentBlocked`] — the generation request was refused
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are
//! automatically retried with exponential backoff.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_identity_provider, create_text_generator};

// Re-export collaborator traits (internal traits are not exported)
pub use traits::{IdentityProvider, TextGenerator};

// Re-export types
pub use types::{LoginStatus, PageAccount, UserProfile, PAGES_PERMISSION_SCOPE};

// Re-export concrete adapters
pub use providers::{FacebookIdentityProvider, GeminiTextGenerator};
