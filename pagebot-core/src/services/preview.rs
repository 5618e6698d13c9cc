//! Preview chat session
//!
//! Ephemeral transcript demonstrating what the text-generation collaborator
//! would answer given the in-progress draft configuration. Discarded when the
//! owning editor session closes; nothing here touches the store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::services::prompt::compose_prompt;
use crate::services::ServiceContext;
use crate::types::{ChatMessage, Page};

/// User-safe inline notice appended when generation fails for any reason.
pub const GENERATION_FAILURE_NOTICE: &str =
    "Sorry, I couldn't generate a reply right now. Please try again.";

/// Hard deadline on one generation round trip.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Append-only preview transcript with a single in-flight request guard.
#[derive(Debug)]
pub struct PreviewSession {
    ctx: Arc<ServiceContext>,
    messages: RwLock<Vec<ChatMessage>>,
    pending: AtomicBool,
}

impl PreviewSession {
    /// Creates a session seeded with one greeting naming the page.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, page: &Page) -> Self {
        let greeting = ChatMessage::model(format!(
            "Hi! I'm the AI assistant for {}. Send a message to preview how I'd reply.",
            page.page_name
        ));
        Self {
            ctx,
            messages: RwLock::new(vec![greeting]),
            pending: AtomicBool::new(false),
        }
    }

    /// Snapshot of the transcript in append order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    /// Whether a generation request is currently in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Submits one operator test message against the given draft.
    ///
    /// Empty or whitespace-only input is a no-op. A submission while another
    /// request is in flight is rejected, not queued. Failures become an inline
    /// error message; the underlying error only reaches the log.
    pub async fn submit(&self, draft: &Page, input: &str) {
        if input.trim().is_empty() {
            return;
        }

        // Single in-flight request; a concurrent submit loses the exchange.
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("Preview submit rejected: request already pending");
            return;
        }

        self.messages.write().await.push(ChatMessage::user(input));

        let prompt = compose_prompt(draft, input);
        let reply = match tokio::time::timeout(
            GENERATION_TIMEOUT,
            self.ctx.generator.generate(&self.ctx.model, &prompt),
        )
        .await
        {
            Ok(Ok(text)) => ChatMessage::model(text),
            Ok(Err(e)) => {
                if e.is_expected() {
                    log::warn!("Preview generation failed: {e}");
                } else {
                    log::error!("Preview generation failed: {e}");
                }
                ChatMessage::error(GENERATION_FAILURE_NOTICE)
            }
            Err(_) => {
                log::warn!(
                    "Preview generation timed out after {}s",
                    GENERATION_TIMEOUT.as_secs()
                );
                ChatMessage::error(GENERATION_FAILURE_NOTICE)
            }
        };

        self.messages.write().await.push(reply);
        self.pending.store(false, Ordering::Release);
    }
}
