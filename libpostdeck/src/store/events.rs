//! Store event bus
//!
//! In-process distribution of operation lifecycle events over
//! `tokio::sync::broadcast`. Emitting never blocks: with no subscribers the
//! event is dropped, and a lagging subscriber loses oldest events first
//! without slowing the store down.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<StoreEvent>;

/// The four asynchronous store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Destroy,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Fetch => write!(f, "fetch"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Destroy => write!(f, "destroy"),
        }
    }
}

/// Lifecycle events emitted by the store
///
/// `op_id` correlates the started event with its terminal event; state
/// itself retains no error payload, so `OperationFailed` is where the error
/// text travels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    OperationStarted {
        op_id: String,
        operation: Operation,
    },

    OperationCompleted {
        op_id: String,
        operation: Operation,
    },

    OperationFailed {
        op_id: String,
        operation: Operation,
        error: String,
    },
}

/// Event bus for store lifecycle events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a new event bus with the specified per-subscriber capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    pub fn emit(&self, event: StoreEvent) {
        // send() errors when no receivers exist; nobody listening is fine
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
