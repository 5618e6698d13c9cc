//! Domain type definitions

mod chat;
mod page;
mod user;
mod webhook;

pub use chat::{ChatMessage, ChatRole};
pub use page::{BrandVoice, BusinessType, DashboardStats, Language, Page, PageStub};
pub use user::User;
pub use webhook::{WebhookConfig, WEBHOOK_SUBSCRIPTION_TOPICS};
