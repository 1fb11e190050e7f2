use super::render_screen;
use crate::events::EventSource;
use glyphs_core::{theme::Element, Canvas, Result, Settings, TabSelector, Theme};
use ratatui::{
    backend::Backend,
    layout::Rect,
    widgets::{Block, Paragraph},
    Terminal,
};
use std::io;
use tracing::{debug, info};

pub struct App {
    selector: TabSelector,
    theme: Theme,
    canvas: Canvas,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            selector: TabSelector::new(),
            theme: Theme::new(settings.theme),
            canvas: settings.canvas,
        }
    }

    pub fn selector(&self) -> &TabSelector {
        &self.selector
    }

    /// Draw, block for the next command, apply it, repeat. Returns as soon as
    /// a quit command arrives, without drawing again.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut impl EventSource,
    ) -> Result<()> {
        loop {
            self.draw(terminal)?;
            let command = events.next_command()?;
            debug!(?command, "command received");
            if self.selector.apply(command).is_break() {
                info!(section = %self.selector.active(), "quit requested");
                return Ok(());
            }
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let screen = render_screen(
            &self.selector,
            &self.theme,
            &self.canvas,
            width_or_zero(terminal.size()),
        );
        let background = Block::new().style(self.theme.style(Element::Text));
        terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(screen).block(background), frame.size());
        })?;
        Ok(())
    }
}

/// Width of the output device, or zero when it cannot be determined
fn width_or_zero(size: io::Result<Rect>) -> u16 {
    match size {
        Ok(area) => area.width,
        Err(err) => {
            debug!(%err, "terminal width unavailable");
            0
        }
    }
}
