//! Platform-agnostic application bootstrap for PageBot Console.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (collaborator
//! injection). A frontend constructs one `AppState` at startup and drives the
//! connect / configure / preview workflow through it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use pagebot_core::error::{CoreError, CoreResult};
use pagebot_core::services::{
    OperatorSession, PageEditor, PageStore, PreviewSession, ServiceContext,
};
use pagebot_core::types::{DashboardStats, Page, PageStub, User, WebhookConfig};
use pagebot_provider::{IdentityProvider, TextGenerator};

/// Model handed to the text-generation collaborator unless overridden.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Platform-agnostic application state.
///
/// Holds the collaborator context and every service. Frontends construct this
/// once at startup via [`AppStateBuilder`].
#[derive(Debug)]
pub struct AppState {
    /// Collaborator context.
    pub ctx: Arc<ServiceContext>,
    /// Connected-page store.
    pub page_store: PageStore,
    /// Operator identity workflow.
    pub operator: OperatorSession,
    /// Single-draft configuration editor.
    pub editor: RwLock<PageEditor>,
    /// Preview session of the currently open editor, if any.
    pub preview: RwLock<Option<PreviewSession>>,
    /// Whether the startup sequence has completed.
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Runs the startup sequence: initialize the identity adapter, then
    /// resolve any existing session so a returning operator is recognized.
    ///
    /// A status-probe failure is not fatal; the operator can still log in
    /// interactively. Adapter initialization failure is surfaced.
    pub async fn run_startup(&self) -> CoreResult<()> {
        self.operator.init().await?;

        if let Err(e) = self.operator.resolve_status().await {
            if e.is_expected() {
                log::warn!("Login status probe failed: {e}");
            } else {
                log::error!("Login status probe failed: {e}");
            }
        }

        self.startup_completed.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Interactive operator login.
    pub async fn login(&self) -> CoreResult<User> {
        self.operator.login().await
    }

    /// Logout; the page store is left untouched so reconnecting is cheap.
    pub async fn logout(&self) -> CoreResult<()> {
        self.operator.logout().await
    }

    /// Pages the operator manages that are not yet connected.
    pub async fn connectable_pages(&self) -> Vec<PageStub> {
        let connected_ids: Vec<String> = self
            .page_store
            .list()
            .await
            .into_iter()
            .map(|p| p.page_id)
            .collect();
        self.operator.fetch_connectable_pages(&connected_ids).await
    }

    /// Connects the selected pages with the default configuration.
    /// Returns the number actually added.
    pub async fn connect_pages(&self, stubs: Vec<PageStub>) -> usize {
        self.page_store.add_pages(stubs).await
    }

    /// Flips the chatbot on or off for one page.
    pub async fn toggle_page_active(&self, page_id: &str) {
        self.page_store.toggle_active(page_id).await;
    }

    /// Derived dashboard counts.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.page_store.stats().await
    }

    /// Static webhook setup information.
    #[must_use]
    pub fn webhook_config(&self) -> WebhookConfig {
        WebhookConfig::default()
    }

    /// Opens an edit session on the given page and starts a fresh preview
    /// transcript for it. Any unsaved draft is discarded.
    pub async fn open_editor(&self, page_id: &str) -> CoreResult<()> {
        let page = self
            .page_store
            .get(page_id)
            .await
            .ok_or_else(|| CoreError::PageNotFound(page_id.to_string()))?;

        *self.preview.write().await = Some(PreviewSession::new(Arc::clone(&self.ctx), &page));
        self.editor.write().await.open(page);
        Ok(())
    }

    /// Commits the open draft to the store and closes the session, discarding
    /// its preview transcript. Returns the saved page; `None` when no session
    /// is open.
    pub async fn save_editor(&self) -> Option<Page> {
        let draft = self.editor.write().await.save()?;
        self.page_store.save(draft.clone()).await;
        *self.preview.write().await = None;
        self.page_store.get(&draft.page_id).await
    }

    /// Discards the open draft and its preview transcript without touching
    /// the store.
    pub async fn cancel_editor(&self) {
        self.editor.write().await.cancel();
        *self.preview.write().await = None;
    }

    /// Submits one operator test message against the current draft
    /// configuration. A no-op when no editor session is open.
    pub async fn send_preview_message(&self, input: &str) {
        let Some(draft) = self.editor.read().await.draft().cloned() else {
            return;
        };
        if let Some(preview) = self.preview.read().await.as_ref() {
            preview.submit(&draft, input).await;
        }
    }

    /// Refreshing a page access token is not implemented: the long-lived
    /// token exchange endpoint requires the app secret, which never reaches
    /// this console.
    ///
    /// TODO: implement once the backend exposes a server-side exchange.
    pub async fn refresh_page_token(&self, page_id: &str) -> CoreResult<()> {
        if self.page_store.get(page_id).await.is_none() {
            return Err(CoreError::PageNotFound(page_id.to_string()));
        }
        Err(CoreError::Unsupported("page token refresh".to_string()))
    }
}

/// Builder for constructing `AppState` with injected collaborators.
///
/// # Required collaborators
/// - `identity` — identity/session adapter
/// - `generator` — text-generation adapter
///
/// # Optional
/// - `model` — defaults to [`DEFAULT_GENERATION_MODEL`]
pub struct AppStateBuilder {
    identity: Option<Arc<dyn IdentityProvider>>,
    generator: Option<Arc<dyn TextGenerator>>,
    model: Option<String>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            identity: None,
            generator: None,
            model: None,
        }
    }

    #[must_use]
    pub fn identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    #[must_use]
    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required collaborators are
    /// missing.
    pub fn build(self) -> CoreResult<AppState> {
        let identity = self
            .identity
            .ok_or_else(|| CoreError::ValidationError("identity is required".to_string()))?;
        let generator = self
            .generator
            .ok_or_else(|| CoreError::ValidationError("generator is required".to_string()))?;
        let model = self
            .model
            .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string());

        let ctx = Arc::new(ServiceContext::new(identity, generator, model));

        Ok(AppState {
            operator: OperatorSession::new(Arc::clone(&ctx)),
            ctx,
            page_store: PageStore::new(),
            editor: RwLock::new(PageEditor::new()),
            preview: RwLock::new(None),
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
