//! compliance-tui - A terminal dashboard for e-commerce compliance violations
//!
//! This is the main entry point for the application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::{App, AppOptions};
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "compliance-tui")]
#[command(version, about = "Terminal dashboard for e-commerce product-compliance violations")]
struct Cli {
    /// Config file (default: ~/.compliance-tui/config.json)
    #[arg(long, env = "COMPLIANCE_TUI_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for generated reports and exports
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log file (default: ~/.compliance-tui/compliance-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Start at the login screen
    #[arg(long)]
    skip_splash: bool,

    /// Sign in as the configured profile
    #[arg(long)]
    skip_login: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    tracing::info!("Starting compliance-tui v{}", env!("CARGO_PKG_VERSION"));

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    // App state is built before entering raw mode
    let mut app = App::new(AppOptions {
        config_path,
        export_dir: cli.export_dir,
        skip_splash: cli.skip_splash,
        skip_login: cli.skip_login,
    });
    app.init()?;

    // Setup terminal
    tui::install_panic_hook();
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!("Exiting after error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Exited normally");
    Ok(())
}

/// Route tracing output to a file; stdout belongs to the terminal UI
fn init_logging(cli: &Cli) -> Result<()> {
    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => Config::config_dir()?.join("compliance-tui.log"),
    };
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {}", e);
            }
        })?;

        // Poll for events; a timeout becomes a tick
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
