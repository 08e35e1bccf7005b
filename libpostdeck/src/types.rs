//! Core types for Postdeck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post record as managed by the remote API.
///
/// `id` is assigned by the server; client-created posts carry `None` until
/// the create call resolves. Timestamps are likewise server-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a client-side post that has not been persisted yet
    pub fn new(title: String, body: String) -> Self {
        Self {
            id: None,
            title,
            body,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Title/body pair as entered in a form, before the server assigns identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Payload for the create operation, shaped `{"post":{"title","body"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostPayload {
    pub post: NewPost,
}

impl CreatePostPayload {
    pub fn new(title: String, body: String) -> Self {
        Self {
            post: NewPost { title, body },
        }
    }
}

/// Payload for the update operation, shaped `{"post":{"post_id","post"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostPayload {
    pub post: UpdatePostBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostBody {
    pub post_id: i64,
    pub post: NewPost,
}

impl UpdatePostPayload {
    pub fn new(post_id: i64, title: String, body: String) -> Self {
        Self {
            post: UpdatePostBody {
                post_id,
                post: NewPost { title, body },
            },
        }
    }
}

/// Payload for the destroy operation, shaped `{"post":{"post_id"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestroyPostPayload {
    pub post: DestroyPostBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestroyPostBody {
    pub post_id: i64,
}

impl DestroyPostPayload {
    pub fn new(post_id: i64) -> Self {
        Self {
            post: DestroyPostBody { post_id },
        }
    }
}
