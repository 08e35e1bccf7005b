//! Actions for the reducer pattern
//!
//! All UI state transitions are triggered by actions. Store I/O never
//! happens here: actions that need the network (`SubmitRequested`,
//! `RefreshRequested`, `DeleteRequested`) are no-ops in the reducer and are
//! picked up by the main loop, which dispatches through the store handle.

use crossterm::event::KeyEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Form Actions ===
    /// Title input changed
    TitleChanged(String),

    /// Body input changed
    BodyChanged(String),

    /// Move focus to the other form field
    FocusNext,

    /// User requested to submit the form
    SubmitRequested,

    /// Reset both form fields to empty
    FormCleared,

    // === Browser Actions ===
    /// Move selection down
    SelectNext,

    /// Move selection up
    SelectPrevious,

    /// The rendered posts count changed; selection may need clamping
    PostsCountChanged(usize),

    /// User requested a re-fetch of the posts list
    RefreshRequested,

    /// User requested deletion of the selected post
    DeleteRequested,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Compose a new post
    Form,

    /// Browse the fetched posts
    Browser,
}

/// Form field focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Body,
}
