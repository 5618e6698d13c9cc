//! Collaborator factory functions.

use std::sync::Arc;

use crate::providers::{FacebookIdentityProvider, GeminiTextGenerator};
use crate::traits::{IdentityProvider, TextGenerator};

/// Creates the Facebook-backed [`IdentityProvider`].
///
/// The returned adapter is wrapped in `Arc<dyn IdentityProvider>` for easy
/// sharing across async tasks. A user access token can be seeded later via
/// [`FacebookIdentityProvider::set_user_token`] once the frontend completes
/// its OAuth flow.
pub fn create_identity_provider(app_id: String) -> Arc<dyn IdentityProvider> {
    Arc::new(FacebookIdentityProvider::new(app_id))
}

/// Creates the Gemini-backed [`TextGenerator`].
pub fn create_text_generator(api_key: String) -> Arc<dyn TextGenerator> {
    Arc::new(GeminiTextGenerator::new(api_key))
}
