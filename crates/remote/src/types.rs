//! Wire types for the placeholder posts API.

use serde::{Deserialize, Serialize};

/// One generic item returned by `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub user_id: i64,
}

/// Payload accepted by `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// Response to an accepted push: the created item with its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub id: i64,
}
