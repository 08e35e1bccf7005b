//! Store lifecycle integration tests
//!
//! Drives the four operations against the mock API and verifies the
//! status transitions and collection mutations end to end.

use std::sync::Arc;
use std::time::Duration;

use libpostdeck::api::mock::{MockConfig, MockPostsApi};
use libpostdeck::store::{Operation, PostStore, Status, StoreEvent};
use libpostdeck::types::{CreatePostPayload, DestroyPostPayload, Post, UpdatePostPayload};

fn post(id: i64, title: &str) -> Post {
    Post {
        id: Some(id),
        title: title.to_string(),
        body: format!("body of {}", title),
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn fetch_fulfillment_installs_server_list() {
    let server_posts = vec![post(1, "first"), post(2, "second")];
    let store = PostStore::new(Arc::new(MockPostsApi::with_posts(server_posts.clone())));

    store.fetch_all().await;

    assert_eq!(store.posts(), server_posts);
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test]
async fn refetch_replaces_rather_than_appends() {
    let store = PostStore::new(Arc::new(MockPostsApi::with_posts(vec![post(1, "only")])));

    store.fetch_all().await;
    store.fetch_all().await;

    assert_eq!(store.posts().len(), 1);
}

#[tokio::test]
async fn rejected_create_sets_error_and_keeps_posts() {
    let api = MockPostsApi::new(MockConfig {
        posts: vec![post(1, "first")],
        failing_ops: vec!["create"],
        ..Default::default()
    });
    let store = PostStore::new(Arc::new(api));

    store.fetch_all().await;
    let before = store.posts();

    store
        .create(CreatePostPayload::new("T".to_string(), "B".to_string()))
        .await;

    assert_eq!(store.status(), Status::Error);
    assert_eq!(store.posts(), before);
}

#[tokio::test]
async fn rejected_fetch_from_initial_state_keeps_empty_collection() {
    let store = PostStore::new(Arc::new(MockPostsApi::failing(vec!["fetch"])));

    store.fetch_all().await;

    assert_eq!(store.status(), Status::Error);
    assert!(store.posts().is_empty());
}

#[tokio::test]
async fn create_dispatches_envelope_and_appends_server_record() {
    let api = MockPostsApi::new(MockConfig {
        next_id: 5,
        ..Default::default()
    });
    let calls = api.calls();
    let store = PostStore::new(Arc::new(api));

    store
        .create(CreatePostPayload::new("T".to_string(), "B".to_string()))
        .await;

    // The wire payload is exactly {"post":{"title":"T","body":"B"}}
    let payload = calls.lock().unwrap().created_payloads[0].clone();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"post": {"title": "T", "body": "B"}})
    );

    // One new trailing entry equal to the server response
    let posts = store.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, Some(5));
    assert_eq!(posts[0].title, "T");
    assert_eq!(posts[0].body, "B");
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test]
async fn update_replaces_matching_entry_preserving_order() {
    let api = MockPostsApi::new(MockConfig {
        posts: vec![post(1, "one"), post(3, "three"), post(5, "five")],
        ..Default::default()
    });
    let store = PostStore::new(Arc::new(api));
    store.fetch_all().await;

    store
        .update(UpdatePostPayload::new(
            3,
            "three, revised".to_string(),
            "new body".to_string(),
        ))
        .await;

    let posts = store.posts();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, Some(1));
    assert_eq!(posts[1].id, Some(3));
    assert_eq!(posts[1].title, "three, revised");
    assert_eq!(posts[2].id, Some(5));
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test]
async fn update_with_unknown_id_leaves_collection_untouched() {
    let api = MockPostsApi::new(MockConfig {
        posts: vec![post(1, "one"), post(2, "two")],
        ..Default::default()
    });
    let store = PostStore::new(Arc::new(api));
    store.fetch_all().await;
    let before = store.posts();

    store
        .update(UpdatePostPayload::new(
            99,
            "ghost".to_string(),
            "ghost".to_string(),
        ))
        .await;

    assert_eq!(store.posts(), before);
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test]
async fn destroy_installs_server_confirmed_remaining_set() {
    let api = MockPostsApi::new(MockConfig {
        posts: vec![post(1, "one"), post(2, "two")],
        remaining_posts: vec![post(2, "two")],
        ..Default::default()
    });
    let calls = api.calls();
    let store = PostStore::new(Arc::new(api));
    store.fetch_all().await;

    store.destroy(DestroyPostPayload::new(1)).await;

    assert_eq!(calls.lock().unwrap().destroyed_ids, vec![1]);
    assert_eq!(store.posts(), vec![post(2, "two")]);
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test(flavor = "multi_thread")]
async fn loading_is_observable_while_an_operation_is_in_flight() {
    let api = MockPostsApi::with_delay(Duration::from_millis(100));
    let store = Arc::new(PostStore::new(Arc::new(api)));

    let task = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.fetch_all().await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.status(), Status::Loading);

    task.await.unwrap();
    assert_eq!(store.status(), Status::UpToDate);
}

#[tokio::test]
async fn every_operation_emits_started_then_terminal_event() {
    let store = PostStore::new(Arc::new(MockPostsApi::with_posts(Vec::new())));
    let mut events = store.subscribe();

    store
        .create(CreatePostPayload::new("T".to_string(), "B".to_string()))
        .await;

    let started = events.recv().await.unwrap();
    let completed = events.recv().await.unwrap();

    let started_id = match started {
        StoreEvent::OperationStarted { op_id, operation } => {
            assert_eq!(operation, Operation::Create);
            op_id
        }
        other => panic!("expected started event, got {:?}", other),
    };

    match completed {
        StoreEvent::OperationCompleted { op_id, operation } => {
            assert_eq!(operation, Operation::Create);
            assert_eq!(op_id, started_id);
        }
        other => panic!("expected completed event, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_operation_carries_error_on_the_event_not_in_state() {
    let store = PostStore::new(Arc::new(MockPostsApi::failing(vec!["fetch"])));
    let mut events = store.subscribe();

    store.fetch_all().await;

    let _started = events.recv().await.unwrap();
    match events.recv().await.unwrap() {
        StoreEvent::OperationFailed {
            operation, error, ..
        } => {
            assert_eq!(operation, Operation::Fetch);
            assert!(error.contains("mock failure"));
        }
        other => panic!("expected failed event, got {:?}", other),
    }

    // State keeps only the status flag
    assert_eq!(store.status(), Status::Error);
}

#[tokio::test]
async fn status_path_never_skips_loading() {
    // Observed through the event stream: a started event precedes every
    // terminal event, and started corresponds to the Loading transition.
    let store = PostStore::new(Arc::new(MockPostsApi::with_posts(Vec::new())));
    let mut events = store.subscribe();

    store.fetch_all().await;
    store
        .create(CreatePostPayload::new("a".to_string(), "b".to_string()))
        .await;

    for _ in 0..2 {
        assert!(matches!(
            events.recv().await.unwrap(),
            StoreEvent::OperationStarted { .. }
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            StoreEvent::OperationCompleted { .. }
        ));
    }
}
