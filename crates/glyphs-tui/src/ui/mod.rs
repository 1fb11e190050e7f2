//! UI module for the Glyphs viewer
//!
//! The screen is a pure function of the tab state, the theme, the canvas
//! settings and the terminal width. `App` owns the loop that redraws it.

pub mod app;
pub mod dialog;
pub mod tab_bar;

use dialog::render_dialog;
use glyphs_core::{layout::Tile, theme::Element, Canvas, TabSelector, Theme};
use ratatui::{layout::Alignment, text::Text};
use tab_bar::render_tab_bar;

/// Compose the full screen. A `physical_width` of zero means the terminal
/// width is unknown and the output is left unclipped.
pub fn render_screen(
    selector: &TabSelector,
    theme: &Theme,
    canvas: &Canvas,
    physical_width: u16,
) -> Text<'static> {
    let document = Tile::join_vertical(
        Alignment::Left,
        [
            render_tab_bar(selector, theme, usize::from(canvas.width)),
            Tile::blank(0, 1),
            render_dialog(selector.active(), theme, canvas, physical_width),
            Tile::blank(0, 2),
        ],
    )
    .pad(1, 2, 1, 2, theme.style(Element::Text));

    let document = if physical_width > 0 {
        document.max_width(usize::from(physical_width))
    } else {
        document
    };
    document.into_text()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glyphs_core::Section;
    use unicode_width::UnicodeWidthStr;

    pub(crate) fn plain_lines(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_unknown_width_renders_unclipped() {
        let canvas = Canvas::default();
        let text = render_screen(&TabSelector::new(), &Theme::default(), &canvas, 0);
        let lines = plain_lines(&text);
        assert!(!lines.is_empty());
        for line in &lines {
            assert_eq!(line.width(), usize::from(canvas.width) + 4);
        }
    }

    #[test]
    fn test_narrow_terminal_clips_every_line() {
        let text = render_screen(&TabSelector::new(), &Theme::default(), &Canvas::default(), 40);
        for line in plain_lines(&text) {
            assert_eq!(line.width(), 40, "{line}");
        }
    }

    #[test]
    fn test_screen_layout_order() {
        let text = render_screen(&TabSelector::new(), &Theme::default(), &Canvas::default(), 0);
        let lines = plain_lines(&text);
        // Padding row, then the three tab bar rows.
        assert!(lines[0].trim().is_empty());
        assert!(lines[1].trim_start().starts_with('╭'));
        assert!(lines[2].contains("Basic Accented"));
        assert!(lines[4].trim().is_empty());
        assert!(lines.iter().any(|line| line.contains("GLYPHS")));
        assert!(lines.last().is_some_and(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_screen_highlights_active_section_only() {
        let theme = Theme::default();
        let active_style = theme.style(Element::ActiveTabLabel);
        let mut selector = TabSelector::new();
        selector.select(Section::Latin1Supplement);

        let text = render_screen(&selector, &theme, &Canvas::default(), 0);
        let highlighted: Vec<_> = text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter(|span| span.style == active_style)
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(highlighted, ["Latin-1 Supplement"]);

        let joined = plain_lines(&text).join("\n");
        assert!(joined.contains("À,Á,Â,Ã,Ä,Å"));
        assert!(!joined.contains("Ç,Č,Ć"));
    }

    #[test]
    fn test_document_padding_uses_text_style() {
        let theme = Theme::default();
        let text = render_screen(&TabSelector::new(), &theme, &Canvas::default(), 0);
        let text_style = theme.style(Element::Text);

        let top = &text.lines[0];
        assert!(!top.spans.is_empty());
        assert!(top.spans.iter().all(|span| span.style == text_style));
        // Left margin of the tab bar row.
        assert_eq!(text.lines[1].spans[0].content, "  ");
        assert_eq!(text.lines[1].spans[0].style, text_style);
    }
}
