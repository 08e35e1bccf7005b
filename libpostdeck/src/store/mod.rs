//! Post store — the client-side state container
//!
//! `PostStore` owns the single [`PostsState`] for the process and an
//! [`PostsApi`] client, and drives every state change through the pure
//! reducer. Each of the four operations transitions the shared status
//! through pending → (fulfilled | rejected) and applies its mutation on the
//! posts collection.
//!
//! Failures never surface to the dispatcher: they are logged, emitted on
//! the event bus, and collapse into `Status::Error` in state. Readers get
//! immutable snapshots; transitions are atomic with respect to reads.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libpostdeck::api::http::HttpPostsApi;
//! use libpostdeck::store::PostStore;
//!
//! # async fn example() -> libpostdeck::Result<()> {
//! let api = HttpPostsApi::new("http://localhost:3000".to_string(), 30)?;
//! let store = PostStore::new(Arc::new(api));
//!
//! store.fetch_all().await;
//! println!("{} posts, status {}", store.posts().len(), store.status());
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod reducer;
pub mod state;

pub use events::{EventBus, EventReceiver, Operation, StoreEvent};
pub use reducer::{reduce, Transition};
pub use state::{PostsState, Status};

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::api::PostsApi;
use crate::types::{CreatePostPayload, DestroyPostPayload, Post, UpdatePostPayload};

const EVENT_CAPACITY: usize = 100;

/// State container for the posts resource
pub struct PostStore {
    api: Arc<dyn PostsApi>,
    state: RwLock<PostsState>,
    event_bus: EventBus,
}

impl PostStore {
    /// Create a store over the given API client, starting empty
    pub fn new(api: Arc<dyn PostsApi>) -> Self {
        Self {
            api,
            state: RwLock::new(PostsState::new()),
            event_bus: EventBus::new(EVENT_CAPACITY),
        }
    }

    // === Read surface ===

    /// Snapshot of the posts collection, in insertion order
    pub fn posts(&self) -> Vec<Post> {
        self.snapshot().posts
    }

    /// Current operation status
    pub fn status(&self) -> Status {
        self.snapshot().status
    }

    /// Full state snapshot
    pub fn snapshot(&self) -> PostsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribe to operation lifecycle events
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    // === Operations ===

    /// Fetch all posts; on fulfillment the collection is fully replaced
    pub async fn fetch_all(&self) {
        let op_id = self.begin(Operation::Fetch, Transition::FetchStarted);

        match self.api.fetch_posts().await {
            Ok(posts) => {
                debug!(%op_id, count = posts.len(), "fetch resolved");
                self.fulfill(Operation::Fetch, op_id, Transition::FetchCompleted(posts));
            }
            Err(e) => self.reject(Operation::Fetch, op_id, Transition::FetchFailed, e),
        }
    }

    /// Create a post; on fulfillment the server record is appended at the tail
    pub async fn create(&self, payload: CreatePostPayload) {
        let op_id = self.begin(Operation::Create, Transition::CreateStarted);

        match self.api.create_post(payload).await {
            Ok(post) => {
                debug!(%op_id, id = ?post.id, "create resolved");
                self.fulfill(Operation::Create, op_id, Transition::CreateCompleted(post));
            }
            Err(e) => self.reject(Operation::Create, op_id, Transition::CreateFailed, e),
        }
    }

    /// Update a post; on fulfillment the entry with the response id is
    /// replaced in place. An id the store does not hold leaves the
    /// collection untouched.
    pub async fn update(&self, payload: UpdatePostPayload) {
        let op_id = self.begin(Operation::Update, Transition::UpdateStarted);

        match self.api.update_post(payload).await {
            Ok(post) => {
                let known = self
                    .state
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .posts
                    .iter()
                    .any(|p| p.id == post.id);
                if !known {
                    warn!(%op_id, id = ?post.id, "update response for a post the store does not hold");
                }
                self.fulfill(Operation::Update, op_id, Transition::UpdateCompleted(post));
            }
            Err(e) => self.reject(Operation::Update, op_id, Transition::UpdateFailed, e),
        }
    }

    /// Destroy a post; on fulfillment the server-confirmed remaining list
    /// replaces the collection
    pub async fn destroy(&self, payload: DestroyPostPayload) {
        let op_id = self.begin(Operation::Destroy, Transition::DestroyStarted);

        match self.api.destroy_post(payload).await {
            Ok(remaining) => {
                debug!(%op_id, count = remaining.len(), "destroy resolved");
                self.fulfill(
                    Operation::Destroy,
                    op_id,
                    Transition::DestroyCompleted(remaining),
                );
            }
            Err(e) => self.reject(Operation::Destroy, op_id, Transition::DestroyFailed, e),
        }
    }

    // === Transition plumbing ===

    /// Apply one transition atomically
    fn apply(&self, transition: Transition) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::take(&mut *guard);
        *guard = reduce(previous, transition);
    }

    fn begin(&self, operation: Operation, transition: Transition) -> String {
        let op_id = uuid::Uuid::new_v4().to_string();
        self.apply(transition);
        self.event_bus.emit(StoreEvent::OperationStarted {
            op_id: op_id.clone(),
            operation,
        });
        op_id
    }

    fn fulfill(&self, operation: Operation, op_id: String, transition: Transition) {
        self.apply(transition);
        info!(%op_id, %operation, "operation completed");
        self.event_bus
            .emit(StoreEvent::OperationCompleted { op_id, operation });
    }

    fn reject(
        &self,
        operation: Operation,
        op_id: String,
        transition: Transition,
        error: crate::PostdeckError,
    ) {
        self.apply(transition);
        warn!(%op_id, %operation, %error, "operation failed");
        self.event_bus.emit(StoreEvent::OperationFailed {
            op_id,
            operation,
            error: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockPostsApi;

    #[tokio::test]
    async fn test_store_starts_empty_and_initial() {
        let store = PostStore::new(Arc::new(MockPostsApi::with_posts(Vec::new())));

        assert!(store.posts().is_empty());
        assert_eq!(store.status(), Status::Initial);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_store() {
        let store = PostStore::new(Arc::new(MockPostsApi::with_posts(Vec::new())));

        let before = store.snapshot();
        store.fetch_all().await;

        assert_eq!(before.status, Status::Initial);
        assert_eq!(store.status(), Status::UpToDate);
    }
}
