//! Operator identity type

use serde::{Deserialize, Serialize};

use pagebot_provider::UserProfile;

/// The authenticated operator. At most one exists at a time; replaced
/// wholesale on login, cleared on logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            picture_url: profile.picture_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let user = User {
            id: "42".to_string(),
            name: "Maria Cruz".to_string(),
            picture_url: "https://example.com/p.jpg".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"pictureUrl\":\"https://example.com/p.jpg\""));
    }
}
