//! In-memory store of connected pages
//!
//! Authoritative, insertion-ordered sequence of connected pages for the
//! session. No persistence across restarts and no delete operation.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::types::{DashboardStats, Page, PageStub};

/// Session-scoped page collection.
#[derive(Debug, Default)]
pub struct PageStore {
    pages: RwLock<Vec<Page>>,
}

impl PageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all pages in insertion order.
    pub async fn list(&self) -> Vec<Page> {
        self.pages.read().await.clone()
    }

    /// Snapshot of one page.
    pub async fn get(&self, page_id: &str) -> Option<Page> {
        self.pages
            .read()
            .await
            .iter()
            .find(|p| p.page_id == page_id)
            .cloned()
    }

    /// Connects new pages, applying the default configuration.
    ///
    /// Stubs whose id already exists in the store are silently dropped
    /// (re-adding a known page never duplicates or overwrites it). Relative
    /// order of the remaining stubs is preserved. Returns the number of pages
    /// actually added.
    pub async fn add_pages(&self, stubs: Vec<PageStub>) -> usize {
        let mut pages = self.pages.write().await;
        let mut added = 0;
        for stub in stubs {
            if pages.iter().any(|p| p.page_id == stub.id) {
                log::debug!("Page {} already connected, skipping", stub.id);
                continue;
            }
            pages.push(Page::from_stub(stub));
            added += 1;
        }
        if added > 0 {
            log::info!("Connected {added} new page(s)");
        }
        added
    }

    /// Flips `active` on the matching page and refreshes its timestamp.
    /// Silent no-op when the id is absent.
    pub async fn toggle_active(&self, page_id: &str) {
        let mut pages = self.pages.write().await;
        if let Some(page) = pages.iter_mut().find(|p| p.page_id == page_id) {
            page.active = !page.active;
            page.updated_at = Utc::now();
            log::info!("Page {page_id} active -> {}", page.active);
        }
    }

    /// Replaces the stored page sharing `page_id` with `updated_page`,
    /// overwriting its timestamp with now. Silent no-op when unmatched;
    /// never creates a new entry.
    pub async fn save(&self, mut updated_page: Page) {
        let mut pages = self.pages.write().await;
        if let Some(slot) = pages
            .iter_mut()
            .find(|p| p.page_id == updated_page.page_id)
        {
            updated_page.updated_at = Utc::now();
            log::info!("Saved configuration for page {}", updated_page.page_id);
            *slot = updated_page;
        }
    }

    /// Derived dashboard counts, recomputed on every call.
    pub async fn stats(&self) -> DashboardStats {
        let pages = self.pages.read().await;
        DashboardStats {
            total_pages: pages.len(),
            active_pages: pages.iter().filter(|p| p.active).count(),
        }
    }
}
