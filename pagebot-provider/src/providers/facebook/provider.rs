//! `IdentityProvider` implementation for Facebook.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::IdentityProvider;
use crate::types::{LoginStatus, PageAccount, UserProfile};

use super::{FacebookIdentityProvider, GraphAccountsPage, GraphUser};

/// Page size for `/me/accounts`; the Graph API paginates beyond this.
const ACCOUNTS_PAGE_LIMIT: u32 = 100;

#[async_trait]
impl IdentityProvider for FacebookIdentityProvider {
    fn id(&self) -> &'static str {
        "facebook"
    }

    async fn init(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: "facebook".to_string(),
                param: "app_id".to_string(),
                detail: "Facebook app id must not be empty".to_string(),
            });
        }
        log::info!("[facebook] SDK initialized (app_id={})", self.app_id);
        Ok(())
    }

    async fn login_status(&self) -> Result<LoginStatus> {
        if self.user_token.read().await.is_none() {
            return Ok(LoginStatus::Unknown);
        }

        // Probe the token with a minimal /me call.
        match self.get::<GraphUser>("/me?fields=id,name").await {
            Ok(_) => Ok(LoginStatus::Connected),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(LoginStatus::NotAuthorized),
            Err(e) => Err(e),
        }
    }

    async fn login(&self, scope: &str) -> Result<LoginStatus> {
        log::info!("[facebook] Login requested with scope: {scope}");

        // The OAuth popup belongs to the frontend; without a seeded token
        // there is nothing this adapter can do.
        if self.user_token.read().await.is_none() {
            return Err(ProviderError::LoginRequired {
                provider: "facebook".to_string(),
            });
        }

        self.get::<GraphUser>("/me?fields=id,name").await?;
        Ok(LoginStatus::Connected)
    }

    async fn logout(&self) -> Result<()> {
        self.set_user_token(None).await;
        log::info!("[facebook] Logged out");
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<UserProfile> {
        let user: GraphUser = self.get("/me?fields=id,name,picture").await?;
        Ok(UserProfile {
            id: user.id,
            name: user.name,
            picture_url: user.picture.map(|p| p.data.url).unwrap_or_default(),
        })
    }

    async fn fetch_accounts(&self) -> Result<Vec<PageAccount>> {
        let mut accounts = Vec::new();
        let mut page: GraphAccountsPage = self
            .get(&format!(
                "/me/accounts?fields=id,name,access_token&limit={ACCOUNTS_PAGE_LIMIT}"
            ))
            .await?;

        loop {
            accounts.extend(page.data.into_iter().map(|a| PageAccount {
                id: a.id,
                name: a.name,
                access_token: a.access_token,
            }));

            match page.paging.and_then(|p| p.next) {
                Some(next) => page = self.get_absolute(&next).await?,
                None => break,
            }
        }

        log::info!("[facebook] Fetched {} manageable page(s)", accounts.len());
        Ok(accounts)
    }
}
