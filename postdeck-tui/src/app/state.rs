//! Application state
//!
//! UI-local state only: form inputs, navigation, overlays. The posts
//! collection and the operation status live in the store; the render path
//! reads them as snapshots each frame.

use super::actions::{FormField, Screen};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Form state
    pub form: FormState,

    /// Browser state
    pub browser: BrowserState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Compose form state
///
/// Two controlled inputs. Submission packages them into a creation payload
/// and both fields are reset immediately, whatever the request later does.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Title input content
    pub title: String,

    /// Body input content
    pub body: String,

    /// Which field has focus
    pub focus: FormField,
}

/// Posts browser state
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Selected row
    pub selected: usize,

    /// Posts count as of the last render, for selection clamping
    pub posts_len: usize,
}

/// Status bar state
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Form,
            help_visible: false,
            form: FormState::default(),
            browser: BrowserState::default(),
            status: StatusBarState::default(),
            config: UiConfig::from_env(100),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            focus: FormField::Title,
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            selected: 0,
            posts_len: 0,
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self { message: None }
    }
}

impl UiConfig {
    /// Build UI configuration from the environment, with `base_tick_ms`
    /// as the fallback tick rate
    pub fn from_env(base_tick_ms: u64) -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("POSTDECK_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("POSTDECK_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(base_tick_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }
}
