// ABOUTME: Main entry point for bookstand with TUI and CLI support
//
// Binary: bookstand
// Usage: bookstand [COMMAND]
// - No command: launches the booking TUI
// - catalog: print the built-in shop/service/slot catalogs
// - config-path: print the configuration file path

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use bookstand::app::{AppState, EventHandler};
use bookstand::cli;
use bookstand::components::LayoutComponent;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Catalog { which }) => {
            cli::print_catalog(&which);
            Ok(())
        }
        Some(cli::Commands::ConfigPath) => cli::print_config_path(),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => {
            let mut state = AppState::new();
            let layout = LayoutComponent::new();

            // Flush any pending terminal events to prevent stray keypresses
            // from landing in the credential form
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            run_tui(&mut state, &layout)
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(state: &mut AppState, layout: &LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(state, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    state: &mut AppState,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, state) {
                        EventHandler::process_event(app_event, state);
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            // Advances the simulated payment timer
            state.tick(Instant::now());
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".bookstand").join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".bookstand/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // JSONL log file per run, timestamped
    let log_file = log_dir.join(format!(
        "bookstand-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        // No log sink is not fatal; the TUI still runs.
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstand=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
