//! PageBot Console Core Library
//!
//! Provides the state model and business logic for the page-bot admin
//! console, including:
//! - Connected-page store (PageStore)
//! - Draft-based configuration editing (PageEditor)
//! - Preview chat sessions against the text-generation collaborator
//! - Operator identity workflow (OperatorSession)
//!
//! The library is platform-independent: collaborators are injected through
//! the traits of `pagebot-provider`, so any frontend (web, TUI, desktop) can
//! embed it and tests can run against fakes.

pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
