//! Shared mock collaborators for service tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pagebot_provider::{
    IdentityProvider, LoginStatus, PageAccount, ProviderError, TextGenerator, UserProfile,
};

use crate::services::ServiceContext;
use crate::types::{Page, PageStub};

/// Scriptable in-memory identity collaborator.
pub(crate) struct MockIdentityProvider {
    profile: UserProfile,
    accounts: RwLock<Vec<PageAccount>>,
    status: RwLock<LoginStatus>,
    fail_login: RwLock<bool>,
    fail_accounts: RwLock<bool>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            profile: UserProfile {
                id: "42".to_string(),
                name: "Maria Cruz".to_string(),
                picture_url: "https://example.com/p.jpg".to_string(),
            },
            accounts: RwLock::new(vec![
                PageAccount {
                    id: "1001".to_string(),
                    name: "Starlight Gadgets".to_string(),
                    access_token: "EA-page-1001".to_string(),
                },
                PageAccount {
                    id: "1002".to_string(),
                    name: "Wanderlust Travels".to_string(),
                    access_token: "EA-page-1002".to_string(),
                },
            ]),
            status: RwLock::new(LoginStatus::Unknown),
            fail_login: RwLock::new(false),
            fail_accounts: RwLock::new(false),
        }
    }

    pub async fn set_status(&self, status: LoginStatus) {
        *self.status.write().await = status;
    }

    pub async fn set_fail_login(&self, fail: bool) {
        *self.fail_login.write().await = fail;
    }

    pub async fn set_fail_accounts(&self, fail: bool) {
        *self.fail_accounts.write().await = fail;
    }

    pub async fn set_accounts(&self, accounts: Vec<PageAccount>) {
        *self.accounts.write().await = accounts;
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn id(&self) -> &'static str {
        "mock-identity"
    }

    async fn init(&self) -> pagebot_provider::Result<()> {
        Ok(())
    }

    async fn login_status(&self) -> pagebot_provider::Result<LoginStatus> {
        Ok(self.status.read().await.clone())
    }

    async fn login(&self, _scope: &str) -> pagebot_provider::Result<LoginStatus> {
        if *self.fail_login.read().await {
            return Err(ProviderError::LoginRequired {
                provider: "mock-identity".to_string(),
            });
        }
        *self.status.write().await = LoginStatus::Connected;
        Ok(LoginStatus::Connected)
    }

    async fn logout(&self) -> pagebot_provider::Result<()> {
        *self.status.write().await = LoginStatus::Unknown;
        Ok(())
    }

    async fn fetch_profile(&self) -> pagebot_provider::Result<UserProfile> {
        Ok(self.profile.clone())
    }

    async fn fetch_accounts(&self) -> pagebot_provider::Result<Vec<PageAccount>> {
        if *self.fail_accounts.read().await {
            return Err(ProviderError::NetworkError {
                provider: "mock-identity".to_string(),
                detail: "connection reset".to_string(),
            });
        }
        Ok(self.accounts.read().await.clone())
    }
}

/// Scriptable text-generation collaborator. `reply = None` means every call
/// fails; `delay` simulates a slow round trip.
pub(crate) struct MockTextGenerator {
    reply: Option<String>,
    delay: Option<Duration>,
    last_prompt: RwLock<Option<String>>,
}

impl MockTextGenerator {
    pub fn ok(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: None,
            last_prompt: RwLock::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            delay: None,
            last_prompt: RwLock::new(None),
        }
    }

    pub fn slow(reply: &str, delay: Duration) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: Some(delay),
            last_prompt: RwLock::new(None),
        }
    }

    /// The prompt of the most recent `generate` call.
    pub async fn last_prompt(&self) -> Option<String> {
        self.last_prompt.read().await.clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    fn id(&self) -> &'static str {
        "mock-generator"
    }

    async fn generate(&self, _model: &str, prompt: &str) -> pagebot_provider::Result<String> {
        *self.last_prompt.write().await = Some(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply
            .clone()
            .ok_or_else(|| ProviderError::NetworkError {
                provider: "mock-generator".to_string(),
                detail: "connection reset".to_string(),
            })
    }
}

pub(crate) fn test_identity() -> Arc<MockIdentityProvider> {
    Arc::new(MockIdentityProvider::new())
}

pub(crate) fn test_generator(reply: &str) -> Arc<MockTextGenerator> {
    Arc::new(MockTextGenerator::ok(reply))
}

pub(crate) fn context_with(
    identity: Arc<MockIdentityProvider>,
    generator: Arc<MockTextGenerator>,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        identity,
        generator,
        "test-model".to_string(),
    ))
}

pub(crate) fn sample_page(id: &str) -> Page {
    Page::from_stub(PageStub {
        id: id.to_string(),
        name: format!("Page {id}"),
        access_token: format!("token-{id}"),
    })
}
