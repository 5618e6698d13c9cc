//! Shared collaborator-facing types.

use serde::{Deserialize, Serialize};

/// Permission scope requested on interactive login.
///
/// This exact string is part of the Facebook app review contract and must not
/// be reordered or extended without re-review.
pub const PAGES_PERMISSION_SCOPE: &str =
    "pages_show_list,pages_manage_metadata,pages_messaging";

/// Result of a login-status probe or an interactive login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginStatus {
    /// A valid user session exists.
    Connected,
    /// The user is logged in to the platform but has not authorized this app.
    NotAuthorized,
    /// No session information is available.
    Unknown,
}

impl LoginStatus {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Profile of the authenticated operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Opaque user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Profile picture URL.
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
}

/// One page the authenticated user can manage, as returned by the identity
/// collaborator. Carries the page-scoped access token used for all later
/// messaging calls; the token is opaque and must never be logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageAccount {
    /// Opaque page id.
    pub id: String,
    /// Page display name.
    pub name: String,
    /// Page-scoped access token.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
