//! Concrete collaborator adapters.

pub(crate) mod common;

mod facebook;
mod gemini;

pub use facebook::FacebookIdentityProvider;
pub use gemini::GeminiTextGenerator;
