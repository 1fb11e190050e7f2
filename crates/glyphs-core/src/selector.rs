//! Tab selection state
//!
//! The only mutable state in the viewer: which section is showing.

use crate::catalog::Section;
use std::ops::ControlFlow;
use strum::EnumCount;
use tracing::debug;

/// Logical commands the viewer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextTab,
    PreviousTab,
    Quit,
    /// Any other key; still triggers a redraw
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    active: Section,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    /// Move to the next tab, wrapping from the last back to the first
    pub fn next(&mut self) {
        self.step((self.active_index() + 1) % Section::COUNT);
    }

    /// Move to the previous tab, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.step((self.active_index() + Section::COUNT - 1) % Section::COUNT);
    }

    fn step(&mut self, index: usize) {
        // Modular arithmetic keeps the index in range.
        if let Some(section) = Section::from_index(index) {
            debug!(from = %self.active, to = %section, "tab changed");
            self.active = section;
        }
    }

    /// Apply a command; `Break` means the viewer should stop.
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::NextTab => self.next(),
            Command::PreviousTab => self.previous(),
            Command::Quit => return ControlFlow::Break(()),
            Command::Ignore => {}
        }
        ControlFlow::Continue(())
    }
}
