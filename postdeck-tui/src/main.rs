//! postdeck-tui - Terminal UI for Postdeck
//!
//! Compose new posts and browse the fetched collection against a remote
//! posts API. All state changes flow through the pure reducers; network
//! dispatch happens here, behind the store handle.

use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use libpostdeck::logging::{LogFormat, LoggingConfig};
use libpostdeck::store::StoreEvent;
use libpostdeck::Config;

use postdeck_tui::{
    app::{event::EventHandler, event::TuiEvent, reduce, state::UiConfig, Action, AppState,
        FormField, Screen},
    error::Result,
    services::StoreHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "postdeck-tui")]
#[command(about = "Compose and browse posts against a remote API", long_about = None)]
struct Cli {
    /// Base URL of the posts API (overrides configuration)
    #[arg(short, long)]
    server: Option<String>,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log output format (text, json, or pretty)
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let format = cli.log_format.parse().unwrap_or(LogFormat::Text);
    LoggingConfig::new(format, "info".to_string(), cli.verbose).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration; a missing default config file falls back to defaults
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load().unwrap_or_else(|_| Config::default_config()),
    };
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }

    let services = StoreHandle::from_config(&config)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &config, &services);
    restore_terminal(terminal)?;

    result
}

fn new_title_area() -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text("Post title");
    area
}

fn new_body_area() -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text("Post body (Ctrl+S to submit, Tab to switch field)");
    area
}

fn run_app(terminal: &mut Tui, config: &Config, services: &StoreHandle) -> Result<()> {
    // Initialize application state
    let mut state = AppState::new();
    state.config = UiConfig::from_env(config.ui.tick_rate_ms);

    // Subscribe to store events, then load the collection
    let store_rx = services.subscribe();
    services.fetch_all();

    // Stateful input widgets for the two form fields
    let mut title_area = new_title_area();
    let mut body_area = new_body_area();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop
    loop {
        // Snapshot the store once per frame
        let posts_state = services.snapshot();
        if posts_state.posts.len() != state.browser.posts_len {
            state = reduce(state, Action::PostsCountChanged(posts_state.posts.len()));
        }

        // Focus-dependent styling for the form fields
        let (title_color, body_color) = match state.form.focus {
            FormField::Title => (Color::Cyan, Color::DarkGray),
            FormField::Body => (Color::DarkGray, Color::Cyan),
        };
        title_area.set_block(
            Block::default()
                .title(" Title ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(title_color)),
        );
        body_area.set_block(
            Block::default()
                .title(" Body ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(body_color)),
        );

        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, &state, &posts_state, &title_area, &body_area);
        })?;

        // Handle events
        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => {
                let no_overlay = !state.help_visible;

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

                match state.current_screen {
                    Screen::Form if no_overlay => match key.code {
                        KeyCode::Char('s') if ctrl => Action::SubmitRequested,
                        KeyCode::Tab => Action::FocusNext,
                        KeyCode::Enter if state.form.focus == FormField::Title => {
                            Action::FocusNext
                        }
                        KeyCode::F(_) | KeyCode::Esc => Action::Key(key),
                        KeyCode::Char('c') if ctrl => Action::Key(key),
                        _ => {
                            // The focused field consumes the key; sync its
                            // content back into state
                            match state.form.focus {
                                FormField::Title => {
                                    title_area.input(key);
                                    Action::TitleChanged(title_area.lines().join("\n"))
                                }
                                FormField::Body => {
                                    body_area.input(key);
                                    Action::BodyChanged(body_area.lines().join("\n"))
                                }
                            }
                        }
                    },
                    Screen::Browser if no_overlay => match key.code {
                        KeyCode::Char('r') if key.modifiers.is_empty() => Action::RefreshRequested,
                        KeyCode::Char('d') if key.modifiers.is_empty() => Action::DeleteRequested,
                        _ => Action::Key(key),
                    },
                    _ => Action::Key(key),
                }
            }
            other => other.into(),
        };

        // Update state through the reducer
        state = reduce(state, action.clone());

        // Drain store events; failures land in the status bar
        while let Ok(event) = store_rx.try_recv() {
            let event_action = match event {
                StoreEvent::OperationStarted { .. } => continue,
                StoreEvent::OperationCompleted { .. } => Action::ClearStatus,
                StoreEvent::OperationFailed {
                    operation, error, ..
                } => Action::SetStatus(format!("{} failed: {}", operation, error)),
            };
            state = reduce(state, event_action);
        }

        // Perform side effects based on the action
        match action {
            Action::SubmitRequested => {
                // Exactly one create dispatch per submit; the form resets
                // immediately, whatever the request later resolves to
                services.create(state.form.title.clone(), state.form.body.clone());
                state = reduce(state, Action::FormCleared);
            }
            Action::RefreshRequested => {
                services.fetch_all();
            }
            Action::DeleteRequested => {
                if let Some(id) = services
                    .snapshot()
                    .posts
                    .get(state.browser.selected)
                    .and_then(|post| post.id)
                {
                    services.destroy(id);
                }
            }
            _ => {}
        }

        // Sync the input widgets with state if the form was cleared
        if state.form.title.is_empty() && !title_area.is_empty() {
            title_area = new_title_area();
        }
        if state.form.body.is_empty() && !body_area.is_empty() {
            body_area = new_body_area();
        }

        // Check if we should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}
