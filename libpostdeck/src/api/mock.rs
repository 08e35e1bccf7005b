//! Mock posts API for testing
//!
//! A configurable test double that can simulate successes, failures, and
//! network latency per operation, without requiring a running server. Call
//! counters and captured payloads allow tests to verify what the store
//! actually dispatched.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{ApiError, Result};
use crate::types::{CreatePostPayload, DestroyPostPayload, Post, UpdatePostPayload};

use super::PostsApi;

/// Configuration for mock API behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Posts returned by fetch_posts
    pub posts: Vec<Post>,

    /// Posts returned by destroy_post (the server-confirmed remaining set)
    pub remaining_posts: Vec<Post>,

    /// Id assigned to created posts
    pub next_id: i64,

    /// Operations that should fail ("fetch", "create", "update", "destroy")
    pub failing_ops: Vec<&'static str>,

    /// Error returned by failing operations
    pub error: ApiError,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            remaining_posts: Vec::new(),
            next_id: 1,
            failing_ops: Vec::new(),
            error: ApiError::Network("mock failure".to_string()),
            delay: Duration::from_millis(0),
        }
    }
}

/// Call counters and captured payloads, shared with the test
#[derive(Debug, Default)]
pub struct MockCalls {
    pub fetch_count: usize,
    pub create_count: usize,
    pub update_count: usize,
    pub destroy_count: usize,
    pub created_payloads: Vec<CreatePostPayload>,
    pub updated_payloads: Vec<UpdatePostPayload>,
    pub destroyed_ids: Vec<i64>,
}

/// Mock posts API for testing
pub struct MockPostsApi {
    config: MockConfig,
    calls: Arc<Mutex<MockCalls>>,
}

impl MockPostsApi {
    /// Create a new mock with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            calls: Arc::new(Mutex::new(MockCalls::default())),
        }
    }

    /// Mock whose fetch resolves to the given posts
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self::new(MockConfig {
            posts,
            ..Default::default()
        })
    }

    /// Mock where the named operations fail with a network error
    pub fn failing(ops: Vec<&'static str>) -> Self {
        Self::new(MockConfig {
            failing_ops: ops,
            ..Default::default()
        })
    }

    /// Mock that completes every operation after `delay`
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockConfig {
            delay,
            ..Default::default()
        })
    }

    /// Shared handle to the call counters and captured payloads
    pub fn calls(&self) -> Arc<Mutex<MockCalls>> {
        Arc::clone(&self.calls)
    }

    async fn simulate(&self, op: &'static str) -> Result<()> {
        if self.config.delay > Duration::from_millis(0) {
            sleep(self.config.delay).await;
        }
        if self.config.failing_ops.contains(&op) {
            return Err(self.config.error.clone().into());
        }
        Ok(())
    }
}

#[async_trait]
impl PostsApi for MockPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.lock().unwrap().fetch_count += 1;
        self.simulate("fetch").await?;
        Ok(self.config.posts.clone())
    }

    async fn create_post(&self, payload: CreatePostPayload) -> Result<Post> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.create_count += 1;
            calls.created_payloads.push(payload.clone());
        }
        self.simulate("create").await?;

        Ok(Post {
            id: Some(self.config.next_id),
            title: payload.post.title,
            body: payload.post.body,
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        })
    }

    async fn update_post(&self, payload: UpdatePostPayload) -> Result<Post> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.update_count += 1;
            calls.updated_payloads.push(payload.clone());
        }
        self.simulate("update").await?;

        Ok(Post {
            id: Some(payload.post.post_id),
            title: payload.post.post.title,
            body: payload.post.post.body,
            created_at: None,
            updated_at: Some(chrono::Utc::now()),
        })
    }

    async fn destroy_post(&self, payload: DestroyPostPayload) -> Result<Vec<Post>> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.destroy_count += 1;
            calls.destroyed_ids.push(payload.post.post_id);
        }
        self.simulate("destroy").await?;

        Ok(self.config.remaining_posts.clone())
    }
}
