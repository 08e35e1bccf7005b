//! Remote posts API abstraction and implementations
//!
//! The store consumes the posts API through the [`PostsApi`] trait and treats
//! every resolved value as already-shaped data: no transformation happens on
//! the client side beyond JSON decoding.
//!
//! # Examples
//!
//! ```no_run
//! use libpostdeck::api::{PostsApi, http::HttpPostsApi};
//! use libpostdeck::types::CreatePostPayload;
//!
//! # async fn example() -> libpostdeck::Result<()> {
//! let api = HttpPostsApi::new("http://localhost:3000".to_string(), 30)?;
//!
//! let posts = api.fetch_posts().await?;
//! println!("{} posts on the server", posts.len());
//!
//! let payload = CreatePostPayload::new("Hello".to_string(), "World".to_string());
//! let created = api.create_post(payload).await?;
//! println!("Created post {:?}", created.id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreatePostPayload, DestroyPostPayload, Post, UpdatePostPayload};

pub mod http;

// Mock API is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Client interface to the remote posts resource
///
/// Exactly the four collaborator functions the store dispatches against.
/// Fetch and destroy resolve to the full server-side list; create and update
/// resolve to the single affected record.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Retrieve all posts, in server order
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Create a new post and return the persisted record (with id and timestamps)
    async fn create_post(&self, payload: CreatePostPayload) -> Result<Post>;

    /// Update an existing post and return the updated record
    async fn update_post(&self, payload: UpdatePostPayload) -> Result<Post>;

    /// Delete a post and return the server-confirmed remaining list
    async fn destroy_post(&self, payload: DestroyPostPayload) -> Result<Vec<Post>>;
}
