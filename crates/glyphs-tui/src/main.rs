//! Glyphs - accented letters, symbols and punctuation at a glance
//!
//! Arrow keys (or h/l) switch between tabs, q or Ctrl+C quits.

use anyhow::{bail, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use glyphs_core::{settings::project_dirs, Settings};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::{
    env,
    ffi::OsStr,
    fs::{self, OpenOptions},
    io::{stdout, IsTerminal, Stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod events;
mod ui;

use events::CrosstermEvents;
use ui::app::App;

const LOG_FILE: &str = "glyphs.log";
const FAILURE_EXIT_CODE: i32 = 1;

fn main() {
    init_logging(env::var_os("RUST_LOG").as_deref());

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            warn!(error = %e, "falling back to default settings");
            Settings::default()
        }
    };

    if let Err(err) = run(settings) {
        eprintln!("{}", failure_message(&err));
        std::process::exit(FAILURE_EXIT_CODE);
    }
}

fn run(settings: Settings) -> Result<()> {
    let mut terminal = init_terminal().context("could not start the terminal UI")?;
    info!(theme = ?settings.theme, "glyphs started");
    let mut app = App::new(settings);

    let result = app.run(&mut terminal, &mut CrosstermEvents);

    restore_terminal(&mut terminal)?;

    result?;
    info!(last_section = %app.selector().active(), "glyphs exited");
    Ok(())
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("glyphs: {err:#}")
}

// Logging is opt-in through RUST_LOG. Stdout belongs to the TUI, so logs go
// to a file in the platform data directory.
fn init_logging(rust_log: Option<&OsStr>) {
    let Some(path) = log_path(rust_log) else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Where logs go, or `None` when logging is off
fn log_path(rust_log: Option<&OsStr>) -> Option<PathBuf> {
    rust_log.filter(|value| !value.is_empty())?;
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE))
}

fn ensure_terminal(stdout_is_terminal: bool) -> Result<()> {
    if !stdout_is_terminal {
        bail!("stdout is not a terminal");
    }
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    ensure_terminal(stdout.is_terminal())?;
    enable_raw_mode()?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
