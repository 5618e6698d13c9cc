//! Operator identity workflow
//!
//! Wraps the injected identity collaborator: SDK readiness gating,
//! login/logout with the fixed permission scope, and fetching the pages the
//! operator can still connect.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use pagebot_provider::{LoginStatus, PAGES_PERMISSION_SCOPE};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{PageStub, User};

/// Singleton operator session over the identity collaborator.
#[derive(Debug)]
pub struct OperatorSession {
    ctx: Arc<ServiceContext>,
    ready: AtomicBool,
    user: RwLock<Option<User>>,
}

impl OperatorSession {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            ready: AtomicBool::new(false),
            user: RwLock::new(None),
        }
    }

    /// Initializes the identity adapter and marks the session ready.
    /// Interactive actions stay disabled until this succeeds.
    pub async fn init(&self) -> CoreResult<()> {
        self.ctx.identity.init().await?;
        self.ready.store(true, Ordering::Release);
        log::info!("Identity adapter ready");
        Ok(())
    }

    /// Whether the identity adapter has initialized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Currently logged-in operator, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Probes the current login status; on an existing session, loads the
    /// profile so the operator is recognized without re-login.
    pub async fn resolve_status(&self) -> CoreResult<LoginStatus> {
        if !self.is_ready() {
            return Err(CoreError::SdkNotReady);
        }
        let status = self.ctx.identity.login_status().await?;
        if status.is_connected() {
            let profile = self.ctx.identity.fetch_profile().await?;
            *self.user.write().await = Some(User::from(profile));
        }
        Ok(status)
    }

    /// Interactive login with the fixed pages permission scope. On success
    /// the current user is replaced wholesale with the fetched profile.
    pub async fn login(&self) -> CoreResult<User> {
        if !self.is_ready() {
            return Err(CoreError::SdkNotReady);
        }

        let status = self.ctx.identity.login(PAGES_PERMISSION_SCOPE).await?;
        if !status.is_connected() {
            return Err(CoreError::LoginRequired);
        }

        let user = User::from(self.ctx.identity.fetch_profile().await?);
        log::info!("Operator logged in: {}", user.name);
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    /// Tears down the session and clears the current user.
    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.identity.logout().await?;
        *self.user.write().await = None;
        log::info!("Operator logged out");
        Ok(())
    }

    /// Fetches the operator's manageable pages, dropping those already
    /// connected. Collaborator failure degrades to an empty list; the raw
    /// error only reaches the log.
    pub async fn fetch_connectable_pages(&self, connected_ids: &[String]) -> Vec<PageStub> {
        let accounts = match self.ctx.identity.fetch_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to fetch manageable pages: {e}");
                } else {
                    log::error!("Failed to fetch manageable pages: {e}");
                }
                return Vec::new();
            }
        };

        accounts
            .into_iter()
            .filter(|a| !connected_ids.contains(&a.id))
            .map(PageStub::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{context_with, test_identity, test_generator};

    fn session() -> (OperatorSession, Arc<crate::test_utils::MockIdentityProvider>) {
        let identity = test_identity();
        let ctx = context_with(identity.clone(), test_generator("ok"));
        (OperatorSession::new(ctx), identity)
    }

    #[tokio::test]
    async fn actions_gated_on_ready() {
        let (session, _) = session();
        assert!(!session.is_ready());
        assert!(matches!(session.login().await, Err(CoreError::SdkNotReady)));
        assert!(matches!(
            session.resolve_status().await,
            Err(CoreError::SdkNotReady)
        ));
    }

    #[tokio::test]
    async fn init_marks_ready() {
        let (session, _) = session();
        session.init().await.unwrap();
        assert!(session.is_ready());
    }

    #[tokio::test]
    async fn login_replaces_user_wholesale() {
        let (session, _) = session();
        session.init().await.unwrap();

        let user = session.login().await.unwrap();
        assert_eq!(user.name, "Maria Cruz");
        assert_eq!(session.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn failed_login_leaves_no_user() {
        let (session, identity) = session();
        session.init().await.unwrap();
        identity.set_fail_login(true).await;

        assert!(session.login().await.is_err());
        assert!(session.current_user().await.is_none());
    }

    #[tokio::test]
    async fn logout_clears_user() {
        let (session, _) = session();
        session.init().await.unwrap();
        session.login().await.unwrap();

        session.logout().await.unwrap();
        assert!(session.current_user().await.is_none());
    }

    #[tokio::test]
    async fn resolve_status_loads_profile_for_existing_session() {
        let (session, identity) = session();
        session.init().await.unwrap();
        identity.set_status(LoginStatus::Connected).await;

        let status = session.resolve_status().await.unwrap();
        assert!(status.is_connected());
        assert!(session.current_user().await.is_some());
    }

    #[tokio::test]
    async fn resolve_status_without_session_loads_nothing() {
        let (session, _) = session();
        session.init().await.unwrap();

        let status = session.resolve_status().await.unwrap();
        assert_eq!(status, LoginStatus::Unknown);
        assert!(session.current_user().await.is_none());
    }

    #[tokio::test]
    async fn connectable_pages_filter_connected_ids() {
        let (session, _) = session();
        session.init().await.unwrap();

        let stubs = session
            .fetch_connectable_pages(&["1001".to_string()])
            .await;
        let ids: Vec<String> = stubs.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1002"]);
    }

    #[tokio::test]
    async fn connectable_pages_empty_when_none_manageable() {
        let (session, identity) = session();
        session.init().await.unwrap();
        identity.set_accounts(Vec::new()).await;

        let stubs = session.fetch_connectable_pages(&[]).await;
        assert!(stubs.is_empty());
    }

    #[tokio::test]
    async fn connectable_pages_failure_degrades_to_empty() {
        let (session, identity) = session();
        session.init().await.unwrap();
        identity.set_fail_accounts(true).await;

        let stubs = session.fetch_connectable_pages(&[]).await;
        assert!(stubs.is_empty());
    }
}
