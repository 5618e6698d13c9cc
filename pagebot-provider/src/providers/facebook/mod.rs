//! Facebook Login / Graph API identity adapter.
//!
//! The interactive OAuth popup is owned by the embedding frontend; this
//! adapter works with the user access token that popup produces. Without a
//! seeded token every session-requiring call reports `LoginRequired`.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_token;

pub(crate) use types::{GraphAccountsPage, GraphErrorEnvelope, GraphUser};

pub(crate) const GRAPH_API_BASE: &str = "https://graph.facebook.com";
/// Graph API version the console is reviewed against.
pub(crate) const GRAPH_API_VERSION: &str = "v19.0";
/// Transport-level retries for transient failures.
pub(crate) const MAX_RETRIES: u32 = 2;

/// Facebook identity adapter.
pub struct FacebookIdentityProvider {
    pub(crate) client: Client,
    pub(crate) app_id: String,
    pub(crate) user_token: RwLock<Option<String>>,
}

impl FacebookIdentityProvider {
    #[must_use]
    pub fn new(app_id: String) -> Self {
        Self {
            client: create_http_client(),
            app_id,
            user_token: RwLock::new(None),
        }
    }

    /// Construct with a user access token already obtained by the frontend.
    #[must_use]
    pub fn with_user_token(app_id: String, user_token: String) -> Self {
        Self {
            client: create_http_client(),
            app_id,
            user_token: RwLock::new(Some(user_token)),
        }
    }

    /// Seed or replace the user access token after the frontend completes
    /// the OAuth flow. `None` drops the session.
    pub async fn set_user_token(&self, token: Option<String>) {
        if let Some(ref t) = token {
            log::debug!("[facebook] User token set: {}", mask_token(t));
        } else {
            log::debug!("[facebook] User token cleared");
        }
        *self.user_token.write().await = token;
    }

    /// Current token or `LoginRequired`.
    pub(crate) async fn require_token(&self) -> Result<String> {
        self.user_token
            .read()
            .await
            .clone()
            .ok_or(ProviderError::LoginRequired {
                provider: "facebook".to_string(),
            })
    }
}
