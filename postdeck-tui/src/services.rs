//! Store adapter for the TUI
//!
//! Bridges the async [`PostStore`] and the synchronous event loop:
//!
//! - `StoreHandle` owns a tokio runtime and the shared store
//! - Operations are fire-and-forget: the store absorbs failures into its
//!   status, so dispatch returns immediately
//! - Store events are forwarded from the tokio broadcast channel onto a
//!   crossbeam channel the sync loop can `try_recv` from

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};
use libpostdeck::api::http::HttpPostsApi;
use libpostdeck::api::PostsApi;
use libpostdeck::store::{PostStore, StoreEvent};
use libpostdeck::types::{CreatePostPayload, DestroyPostPayload, UpdatePostPayload};
use libpostdeck::{Config, PostsState};

use crate::error::Result;

/// Handle to the post store for the synchronous event loop
pub struct StoreHandle {
    store: Arc<PostStore>,
    runtime: tokio::runtime::Runtime,
}

impl StoreHandle {
    /// Create a handle over an arbitrary API client
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(api: Arc<dyn PostsApi>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            store: Arc::new(PostStore::new(api)),
            runtime,
        })
    }

    /// Create a handle with an HTTP client built from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = HttpPostsApi::from_config(config)?;
        Self::new(Arc::new(api))
    }

    /// Subscribe to store events
    ///
    /// Returns a receiver the sync event loop can poll without blocking.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();

        let mut event_rx = self.store.subscribe();
        self.runtime.spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            // Receiver dropped, stop forwarding
                            break;
                        }
                    }
                    Err(e) => match e {
                        tokio::sync::broadcast::error::RecvError::Lagged(skipped) => {
                            tracing::warn!("Event receiver lagged, skipped {} events", skipped);
                        }
                        tokio::sync::broadcast::error::RecvError::Closed => {
                            break;
                        }
                    },
                }
            }
        });

        rx
    }

    // === Read surface ===

    /// Current state snapshot (posts + status)
    pub fn snapshot(&self) -> PostsState {
        self.store.snapshot()
    }

    // === Dispatch ===

    /// Dispatch fetch-all
    pub fn fetch_all(&self) {
        let store = Arc::clone(&self.store);
        self.runtime.spawn(async move { store.fetch_all().await });
    }

    /// Dispatch create for the given form fields
    pub fn create(&self, title: String, body: String) {
        let store = Arc::clone(&self.store);
        let payload = CreatePostPayload::new(title, body);
        self.runtime.spawn(async move { store.create(payload).await });
    }

    /// Dispatch update for an existing post
    pub fn update(&self, post_id: i64, title: String, body: String) {
        let store = Arc::clone(&self.store);
        let payload = UpdatePostPayload::new(post_id, title, body);
        self.runtime.spawn(async move { store.update(payload).await });
    }

    /// Dispatch destroy for the given post id
    pub fn destroy(&self, post_id: i64) {
        let store = Arc::clone(&self.store);
        let payload = DestroyPostPayload::new(post_id);
        self.runtime
            .spawn(async move { store.destroy(payload).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libpostdeck::api::mock::MockPostsApi;
    use libpostdeck::Status;
    use std::time::Duration;

    #[test]
    fn test_dispatch_and_snapshot_through_handle() {
        let api = MockPostsApi::with_posts(Vec::new());
        let calls = api.calls();
        let handle = StoreHandle::new(Arc::new(api)).unwrap();

        handle.create("T".to_string(), "B".to_string());

        // Fire-and-forget: wait for the spawned operation to land
        for _ in 0..50 {
            if handle.snapshot().status == Status::UpToDate {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(calls.lock().unwrap().create_count, 1);
        assert_eq!(handle.snapshot().posts.len(), 1);
    }

    #[test]
    fn test_update_and_destroy_reach_the_api() {
        let api = MockPostsApi::with_posts(Vec::new());
        let calls = api.calls();
        let handle = StoreHandle::new(Arc::new(api)).unwrap();

        handle.update(3, "T".to_string(), "B".to_string());
        handle.destroy(7);

        for _ in 0..50 {
            let calls = calls.lock().unwrap();
            if calls.update_count == 1 && calls.destroy_count == 1 {
                break;
            }
            drop(calls);
            std::thread::sleep(Duration::from_millis(10));
        }

        let calls = calls.lock().unwrap();
        assert_eq!(calls.updated_payloads[0].post.post_id, 3);
        assert_eq!(calls.destroyed_ids, vec![7]);
    }

    #[test]
    fn test_subscribe_bridges_events_to_crossbeam() {
        let handle = StoreHandle::new(Arc::new(MockPostsApi::with_posts(Vec::new()))).unwrap();
        let rx = handle.subscribe();

        handle.fetch_all();

        let event = rx
            .recv_timeout(Duration::from_secs(1))
            .expect("expected a store event");
        assert!(matches!(event, StoreEvent::OperationStarted { .. }));
    }
}
