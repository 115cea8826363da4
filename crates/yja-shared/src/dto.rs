//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Admin form submission. Every field may be missing; validation happens server side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image as a data URL, stored verbatim.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A post as shown on the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    /// Link as entered.
    pub link: String,
    /// Sanitized link, safe to use as a hyperlink target (`#` if not).
    pub href: String,
    pub description: String,
    pub image: String,
    pub source: String,
    pub created_at: i64,
}

/// Feed query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Feed listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub query: String,
}

/// Delete query string; `confirm=true` is required to apply the deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostQuery {
    #[serde(default)]
    pub confirm: bool,
}
