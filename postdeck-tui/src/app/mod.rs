//! Application core: state, actions, reducer, events
//!
//! The UI follows the reducer pattern: state transitions are pure
//! functions, and everything that touches the network lives in the main
//! loop behind the store handle.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::{Action, FormField, Screen};
pub use reducer::reduce;
pub use state::AppState;
