//! Pure reducer for posts state transitions
//!
//! `(PostsState, Transition) -> PostsState` with no side effects: no I/O,
//! no logging, no mutation of the input. The store (see `mod.rs`) is the
//! only caller and is where logging and event emission happen.

use crate::types::Post;

use super::state::{PostsState, Status};

/// A lifecycle phase of one of the four store operations
///
/// Each operation contributes a pending transition, a fulfilled transition
/// carrying the resolved response, and a rejected transition. Rejected
/// transitions carry nothing: the error payload is dropped from state.
#[derive(Debug, Clone)]
pub enum Transition {
    FetchStarted,
    FetchCompleted(Vec<Post>),
    FetchFailed,

    CreateStarted,
    CreateCompleted(Post),
    CreateFailed,

    UpdateStarted,
    UpdateCompleted(Post),
    UpdateFailed,

    DestroyStarted,
    DestroyCompleted(Vec<Post>),
    DestroyFailed,
}

/// Apply one transition, returning the new state
///
/// Every pending transition sets `Loading`; every rejected transition sets
/// `Error` and leaves `posts` untouched. Fulfilled transitions install the
/// operation-specific mutation and set `UpToDate`.
pub fn reduce(state: PostsState, transition: Transition) -> PostsState {
    match transition {
        Transition::FetchStarted
        | Transition::CreateStarted
        | Transition::UpdateStarted
        | Transition::DestroyStarted => PostsState {
            status: Status::Loading,
            ..state
        },

        Transition::FetchFailed
        | Transition::CreateFailed
        | Transition::UpdateFailed
        | Transition::DestroyFailed => PostsState {
            status: Status::Error,
            ..state
        },

        Transition::FetchCompleted(posts) | Transition::DestroyCompleted(posts) => PostsState {
            posts,
            status: Status::UpToDate,
        },

        Transition::CreateCompleted(post) => {
            let mut posts = state.posts;
            posts.push(post);
            PostsState {
                posts,
                status: Status::UpToDate,
            }
        }

        Transition::UpdateCompleted(post) => {
            let mut posts = state.posts;
            // Linear scan on id; an unknown id leaves the list untouched
            if let Some(idx) = posts.iter().position(|p| p.id == post.id) {
                posts[idx] = post;
            }
            PostsState {
                posts,
                status: Status::UpToDate,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id: Some(id),
            title: title.to_string(),
            body: format!("body {}", id),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = PostsState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Transition::FetchStarted);

        assert_eq!(state_clone.status, Status::Initial);
        assert_eq!(new_state.status, Status::Loading);
    }

    #[test]
    fn test_every_started_transition_sets_loading() {
        for transition in [
            Transition::FetchStarted,
            Transition::CreateStarted,
            Transition::UpdateStarted,
            Transition::DestroyStarted,
        ] {
            let state = reduce(PostsState::new(), transition);
            assert_eq!(state.status, Status::Loading);
        }
    }

    #[test]
    fn test_every_failed_transition_preserves_posts() {
        let base = PostsState {
            posts: vec![post(1, "one"), post(2, "two")],
            status: Status::Loading,
        };

        for transition in [
            Transition::FetchFailed,
            Transition::CreateFailed,
            Transition::UpdateFailed,
            Transition::DestroyFailed,
        ] {
            let state = reduce(base.clone(), transition);
            assert_eq!(state.status, Status::Error);
            assert_eq!(state.posts, base.posts);
        }
    }

    #[test]
    fn test_fetch_completed_replaces_collection() {
        let base = PostsState {
            posts: vec![post(9, "stale")],
            status: Status::Loading,
        };

        let fetched = vec![post(1, "one"), post(2, "two")];
        let state = reduce(base, Transition::FetchCompleted(fetched.clone()));

        assert_eq!(state.posts, fetched);
        assert_eq!(state.status, Status::UpToDate);
    }

    #[test]
    fn test_create_completed_appends_at_tail() {
        let base = PostsState {
            posts: vec![post(1, "one")],
            status: Status::Loading,
        };

        let state = reduce(base, Transition::CreateCompleted(post(2, "two")));

        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[1].id, Some(2));
        assert_eq!(state.status, Status::UpToDate);
    }

    #[test]
    fn test_update_completed_replaces_matching_entry_in_place() {
        let base = PostsState {
            posts: vec![post(1, "one"), post(3, "three"), post(5, "five")],
            status: Status::Loading,
        };

        let updated = Post {
            title: "three, revised".to_string(),
            ..post(3, "three")
        };
        let state = reduce(base, Transition::UpdateCompleted(updated));

        assert_eq!(state.posts.len(), 3);
        assert_eq!(state.posts[0].title, "one");
        assert_eq!(state.posts[1].title, "three, revised");
        assert_eq!(state.posts[2].title, "five");
    }

    #[test]
    fn test_update_completed_unknown_id_is_a_noop() {
        let base = PostsState {
            posts: vec![post(1, "one"), post(2, "two")],
            status: Status::Loading,
        };

        let state = reduce(base.clone(), Transition::UpdateCompleted(post(99, "ghost")));

        assert_eq!(state.posts, base.posts);
        assert_eq!(state.status, Status::UpToDate);
    }

    #[test]
    fn test_destroy_completed_installs_remaining_set() {
        let base = PostsState {
            posts: vec![post(1, "one"), post(2, "two")],
            status: Status::Loading,
        };

        let state = reduce(base, Transition::DestroyCompleted(vec![post(2, "two")]));

        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, Some(2));
        assert_eq!(state.status, Status::UpToDate);
    }
}
