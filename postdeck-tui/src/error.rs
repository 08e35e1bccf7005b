//! Error types for postdeck-tui
//!
//! Wraps state-layer errors and terminal/IO errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// State layer error
    #[error("Store error: {0}")]
    Store(#[from] libpostdeck::PostdeckError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),

    /// Event handling error
    #[error("Event error: {0}")]
    Event(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
