//! Graph API wire types.

use serde::Deserialize;

/// Error envelope returned by the Graph API on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorEnvelope {
    pub error: GraphErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "error_subcode", default)]
    pub subcode: Option<i64>,
}

/// `/me?fields=id,name,picture` response.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<GraphPicture>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphPicture {
    pub data: GraphPictureData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphPictureData {
    pub url: String,
}

/// One entry of `/me/accounts`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphAccount {
    pub id: String,
    pub name: String,
    pub access_token: String,
}

/// A page of `/me/accounts` results with its paging cursor.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphAccountsPage {
    #[serde(default)]
    pub data: Vec<GraphAccount>,
    #[serde(default)]
    pub paging: Option<GraphPaging>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphPaging {
    #[serde(default)]
    pub next: Option<String>,
}
