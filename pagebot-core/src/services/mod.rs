//! Business logic service layer

mod editor;
mod operator_session;
mod page_store;
pub mod prompt;
mod preview;

pub use editor::{EditorState, PageEditor};
pub use operator_session::OperatorSession;
pub use page_store::PageStore;
pub use preview::{PreviewSession, GENERATION_FAILURE_NOTICE};

use std::sync::Arc;

use pagebot_provider::{IdentityProvider, TextGenerator};

/// Service context - holds the injected collaborators.
///
/// The platform layer creates this context with its concrete adapters (or
/// fakes under test).
pub struct ServiceContext {
    /// Identity/session collaborator.
    pub identity: Arc<dyn IdentityProvider>,
    /// Text-generation collaborator.
    pub generator: Arc<dyn TextGenerator>,
    /// Model identifier handed to the generator.
    pub model: String,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("identity", &"dyn IdentityProvider")
            .field("generator", &"dyn TextGenerator")
            .field("model", &self.model)
            .finish()
    }
}

impl ServiceContext {
    /// Creates the service context.
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        generator: Arc<dyn TextGenerator>,
        model: String,
    ) -> Self {
        Self {
            identity,
            generator,
            model,
        }
    }
}
