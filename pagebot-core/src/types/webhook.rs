//! Static webhook configuration display values

use serde::{Deserialize, Serialize};

/// Subscription topics the backend webhook must be registered for.
pub const WEBHOOK_SUBSCRIPTION_TOPICS: [&str; 2] = ["messages", "messaging_postbacks"];

/// Fixed webhook setup information shown to the operator. Informational only;
/// no live verification is performed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookConfig {
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
    #[serde(rename = "verifyToken")]
    pub verify_token: String,
    #[serde(rename = "subscribedTopics")]
    pub subscribed_topics: Vec<String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            callback_url: "https://your-backend-url.com/webhook".to_string(),
            verify_token: "YOUR_SECRET_VERIFY_TOKEN".to_string(),
            subscribed_topics: WEBHOOK_SUBSCRIPTION_TOPICS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
