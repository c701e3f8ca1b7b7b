//! Domain entities mirrored from persistent storage.

use serde::Serialize;

/// A stored post. `id` is assigned by the store and grows with insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}
