//! Page configuration editor
//!
//! Stages edits to exactly one page without mutating the store until the
//! draft is explicitly committed.

use crate::types::{BrandVoice, BusinessType, Language, Page};

/// Editor state machine. A draft can only exist while the editor is open,
/// which rules out impossible flag combinations by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open {
        draft: Page,
    },
}

/// Single-draft configuration editor.
///
/// Opening while a draft is already open discards the previous draft
/// (last-write-intent, matching modal UI semantics). Field setters and the
/// services sub-editing operations are silent no-ops while closed.
#[derive(Debug, Default)]
pub struct PageEditor {
    state: EditorState,
}

impl PageEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from the given stored page.
    pub fn open(&mut self, page: Page) {
        if let EditorState::Open { draft } = &self.state {
            log::debug!("Discarding unsaved draft for page {}", draft.page_id);
        }
        self.state = EditorState::Open { draft: page };
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    /// Current draft, if a session is open.
    #[must_use]
    pub fn draft(&self) -> Option<&Page> {
        match &self.state {
            EditorState::Open { draft } => Some(draft),
            EditorState::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Page> {
        match &mut self.state {
            EditorState::Open { draft } => Some(draft),
            EditorState::Closed => None,
        }
    }

    pub fn set_business_type(&mut self, business_type: BusinessType) {
        if let Some(draft) = self.draft_mut() {
            draft.business_type = business_type;
        }
    }

    pub fn set_brand_voice(&mut self, brand_voice: BrandVoice) {
        if let Some(draft) = self.draft_mut() {
            draft.brand_voice = brand_voice;
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if let Some(draft) = self.draft_mut() {
            draft.language = language;
        }
    }

    pub fn set_custom_instructions(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.custom_instructions = text.into();
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if let Some(draft) = self.draft_mut() {
            draft.active = active;
        }
    }

    /// Appends an empty service entry for in-place editing.
    pub fn add_service(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.services.push(String::new());
        }
    }

    /// Replaces the service text at `index`. Out-of-range is a silent no-op.
    pub fn set_service(&mut self, index: usize, text: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            if let Some(slot) = draft.services.get_mut(index) {
                *slot = text.into();
            }
        }
    }

    /// Removes the service at `index`, shifting later entries left.
    /// Out-of-range is a silent no-op.
    pub fn remove_service(&mut self, index: usize) {
        if let Some(draft) = self.draft_mut() {
            if index < draft.services.len() {
                draft.services.remove(index);
            }
        }
    }

    /// Commits the session: returns the complete draft for the caller to hand
    /// to the store, transitioning to closed. `None` if no session is open.
    pub fn save(&mut self) -> Option<Page> {
        match std::mem::take(&mut self.state) {
            EditorState::Open { draft } => Some(draft),
            EditorState::Closed => None,
        }
    }

    /// Discards the draft without store interaction.
    pub fn cancel(&mut self) {
        if let EditorState::Open { draft } = &self.state {
            log::debug!("Cancelled edit session for page {}", draft.page_id);
        }
        self.state = EditorState::Closed;
    }
}
