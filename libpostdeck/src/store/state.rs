//! Post store state
//!
//! The single source of truth for the posts collection. All transitions
//! happen through the reducer (see `reducer.rs`); readers receive clones.

use serde::{Deserialize, Serialize};

use crate::types::Post;

/// Lifecycle phase of the most recently initiated store operation
///
/// Exactly one value holds at a time. The status summarizes the operation
/// lifecycle, never any per-post state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No operation has been dispatched yet
    Initial,
    /// An operation is in flight
    Loading,
    /// The last operation resolved successfully
    UpToDate,
    /// The last operation failed
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Initial => write!(f, "Not fetched"),
            Status::Loading => write!(f, "Loading..."),
            Status::UpToDate => write!(f, "Up to date"),
            Status::Error => write!(f, "Error"),
        }
    }
}

/// The posts collection plus the shared operation status
///
/// `posts` keeps insertion order: arrival order from fetch, append order
/// from create. The collection is only ever fully replaced (fetch/destroy
/// fulfillment) or locally appended/updated (create/update fulfillment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub status: Status,
}

impl PostsState {
    /// Empty collection, nothing fetched yet
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            status: Status::Initial,
        }
    }
}

impl Default for PostsState {
    fn default() -> Self {
        Self::new()
    }
}
