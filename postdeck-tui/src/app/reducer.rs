//! Pure reducer function for UI state transitions
//!
//! `(AppState, Action) -> AppState` with no side effects. Submitting,
//! refreshing, and deleting need the store and happen in the main loop;
//! their actions pass through here unchanged.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, FormField, Screen};
use super::state::{AppState, FormState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic,
/// no I/O.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => AppState {
            current_screen: screen,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Form Actions ===
        Action::TitleChanged(title) => AppState {
            form: FormState {
                title,
                ..state.form
            },
            ..state
        },

        Action::BodyChanged(body) => AppState {
            form: FormState { body, ..state.form },
            ..state
        },

        Action::FocusNext => {
            let focus = match state.form.focus {
                FormField::Title => FormField::Body,
                FormField::Body => FormField::Title,
            };
            AppState {
                form: FormState { focus, ..state.form },
                ..state
            }
        }

        Action::SubmitRequested => {
            // Dispatch happens outside the reducer; the form is cleared by
            // the FormCleared action that follows
            state
        }

        Action::FormCleared => AppState {
            form: FormState::default(),
            ..state
        },

        // === Browser Actions ===
        Action::SelectNext => {
            let selected = if state.browser.posts_len == 0 {
                0
            } else {
                (state.browser.selected + 1).min(state.browser.posts_len - 1)
            };
            AppState {
                browser: super::state::BrowserState {
                    selected,
                    ..state.browser
                },
                ..state
            }
        }

        Action::SelectPrevious => AppState {
            browser: super::state::BrowserState {
                selected: state.browser.selected.saturating_sub(1),
                ..state.browser
            },
            ..state
        },

        Action::PostsCountChanged(posts_len) => {
            let selected = if posts_len == 0 {
                0
            } else {
                state.browser.selected.min(posts_len - 1)
            };
            AppState {
                browser: super::state::BrowserState {
                    selected,
                    posts_len,
                },
                ..state
            }
        }

        Action::RefreshRequested | Action::DeleteRequested => {
            // Store dispatch happens outside the reducer
            state
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// Form text input does not pass through here: the focused text area
/// consumes those keys in the event loop.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        KeyCode::F(1) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        KeyCode::F(2) => {
            return reduce(state, Action::NavigateTo(Screen::Browser));
        }
        KeyCode::F(3) => {
            return reduce(state, Action::NavigateTo(Screen::Form));
        }

        KeyCode::Esc if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Screen-specific keybindings
    match state.current_screen {
        Screen::Form => handle_form_key(state, key),
        Screen::Browser => handle_browser_key(state, key),
    }
}

/// Handle form-specific keys
fn handle_form_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Tab => reduce(state, Action::FocusNext),
        _ => state,
    }
}

/// Handle browser-specific keys
fn handle_browser_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => reduce(state, Action::Quit),
        KeyCode::Up => reduce(state, Action::SelectPrevious),
        KeyCode::Char('k') if key.modifiers.is_empty() => reduce(state, Action::SelectPrevious),
        KeyCode::Down => reduce(state, Action::SelectNext),
        KeyCode::Char('j') if key.modifiers.is_empty() => reduce(state, Action::SelectNext),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        // Original state unchanged
        assert!(state_clone.status.message.is_none());

        // New state has the change
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_title_and_body_changes() {
        let state = AppState::new();

        let state = reduce(state, Action::TitleChanged("A title".to_string()));
        let state = reduce(state, Action::BodyChanged("A body".to_string()));

        assert_eq!(state.form.title, "A title");
        assert_eq!(state.form.body, "A body");
    }

    #[test]
    fn test_focus_cycles_between_fields() {
        let state = AppState::new();
        assert_eq!(state.form.focus, FormField::Title);

        let state = reduce(state, Action::FocusNext);
        assert_eq!(state.form.focus, FormField::Body);

        let state = reduce(state, Action::FocusNext);
        assert_eq!(state.form.focus, FormField::Title);
    }

    #[test]
    fn test_form_cleared_resets_both_fields() {
        let state = AppState::new();
        let state = reduce(state, Action::TitleChanged("A title".to_string()));
        let state = reduce(state, Action::BodyChanged("A body".to_string()));

        let state = reduce(state, Action::FormCleared);

        assert_eq!(state.form.title, "");
        assert_eq!(state.form.body, "");
        assert_eq!(state.form.focus, FormField::Title);
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let state = AppState::new();
        let state = reduce(state, Action::PostsCountChanged(3));

        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.browser.selected, 2);

        // Clamped at the end of the list
        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.browser.selected, 2);

        let state = reduce(state, Action::SelectPrevious);
        assert_eq!(state.browser.selected, 1);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let state = AppState::new();
        let state = reduce(state, Action::PostsCountChanged(5));
        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.browser.selected, 2);

        let state = reduce(state, Action::PostsCountChanged(1));
        assert_eq!(state.browser.selected, 0);
    }
}
