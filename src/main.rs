//! PeakSquare Estates - browse property listings and market insights
//!
//! A terminal UI application over the PeakSquare listings feed: property
//! cards, market-insight articles, search, and detail views, with a local
//! dataset cache so repeat launches skip the network.

mod app;
mod cache;
mod cli;
mod config;
mod data;
mod render;
mod search;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState};
use cli::{Cli, StartupConfig};

/// Sets up a panic hook that restores the terminal before printing the panic
/// message, so the terminal stays usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Initializes tracing output when RUST_LOG is set
///
/// The terminal belongs to the TUI, so diagnostics go to a log file in the
/// cache directory instead of stderr. With RUST_LOG unset, logging stays off.
fn setup_logging() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }

    let Some(project_dirs) = directories::ProjectDirs::from("", "", "peaksquare") else {
        return;
    };
    let log_dir = project_dirs.cache_dir().to_path_buf();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("peaksquare.log"))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::PropertyList => {
            ui::render_property_list(frame, app);
        }
        AppState::PropertyDetail(listing_ref) => {
            ui::render_property_detail(frame, app, listing_ref);
        }
        AppState::BlogList => {
            ui::render_blog_list(frame, app);
        }
        AppState::BlogDetail(listing_ref) => {
            ui::render_blog_detail(frame, app, listing_ref);
        }
    }

    if app.search_active {
        ui::render_search_overlay(frame, app);
    }
    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a skeleton placeholder while the initial load is outstanding
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the skeleton vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(40),
        ])
        .split(area);

    let skeleton = Paragraph::new(vec![
        ratatui::text::Line::from("Loading listings..."),
        ratatui::text::Line::from(""),
        ratatui::text::Line::from("▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒"),
        ratatui::text::Line::from("▒▒▒▒▒▒▒▒▒▒▒▒"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);

    frame.render_widget(skeleton, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    setup_logging();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::with_startup_config(startup);

    // Initial render to show the loading skeleton
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger initial data load
    app.load_all_data().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Execute navigation recorded by the key handler
        if let Some(target) = app.take_pending_nav() {
            app.open_detail(target).await;
        }

        // Forced refresh: clear caches and reload both datasets
        if app.refresh_requested {
            app.reload().await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
