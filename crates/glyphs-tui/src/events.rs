//! Key input for Glyphs
//!
//! Turns terminal events into [`Command`]s. The event loop only sees the
//! [`EventSource`] trait, so it can be driven without a real terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphs_core::Command;
use std::io;

/// Anything that can block until the next command is available
pub trait EventSource {
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Blocking reader over crossterm's event queue
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_command(&mut self) -> io::Result<Command> {
        Ok(match event::read()? {
            Event::Key(key) => command_for_key(key),
            // Resizes fall through to a plain redraw.
            _ => Command::Ignore,
        })
    }
}

/// Map a key press to the command it is bound to
pub fn command_for_key(key: KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Right | KeyCode::Char('l') => Command::NextTab,
        KeyCode::Left | KeyCode::Char('h') => Command::PreviousTab,
        _ => Command::Ignore,
    }
}
