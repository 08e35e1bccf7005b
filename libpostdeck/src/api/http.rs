//! HTTP implementation of the posts API
//!
//! Conventional REST/JSON routes under a configured base URL:
//!
//! - `GET /posts` — list all posts
//! - `POST /posts` — create, body `{"post":{"title","body"}}`
//! - `PATCH /posts/:id` — update, body `{"post":{"title","body"}}`
//! - `DELETE /posts/:id` — destroy, responds with the remaining list

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::types::{CreatePostPayload, DestroyPostPayload, Post, UpdatePostPayload};

use super::PostsApi;

/// reqwest-backed posts API client
pub struct HttpPostsApi {
    client: Client,
    base_url: String,
}

impl HttpPostsApi {
    /// Create a client for the API at `base_url` with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &crate::Config) -> Result<Self> {
        Self::new(config.api.base_url.clone(), config.api.timeout_secs)
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: i64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Check the response status and decode the JSON body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status_message(status));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(value)
    }
}

fn status_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        debug!("GET {}", self.posts_url());
        let response = self
            .client
            .get(self.posts_url())
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }

    async fn create_post(&self, payload: CreatePostPayload) -> Result<Post> {
        debug!("POST {}", self.posts_url());
        let response = self
            .client
            .post(self.posts_url())
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }

    async fn update_post(&self, payload: UpdatePostPayload) -> Result<Post> {
        let url = self.post_url(payload.post.post_id);
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .json(&CreatePostPayload {
                post: payload.post.post.clone(),
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }

    async fn destroy_post(&self, payload: DestroyPostPayload) -> Result<Vec<Post>> {
        let url = self.post_url(payload.post.post_id);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = HttpPostsApi::new("http://localhost:3000/".to_string(), 5).unwrap();
        assert_eq!(api.posts_url(), "http://localhost:3000/posts");
        assert_eq!(api.post_url(3), "http://localhost:3000/posts/3");
    }

    #[test]
    fn test_from_config() {
        let config = crate::Config::default_config();
        let api = HttpPostsApi::from_config(&config).unwrap();
        assert_eq!(api.posts_url(), "http://localhost:3000/posts");
    }

    #[test]
    fn test_status_message_known_code() {
        assert_eq!(status_message(StatusCode::NOT_FOUND), "Not Found");
    }
}
