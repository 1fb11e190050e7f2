//! Theme System for Glyphs
//!
//! One immutable value built at startup holding every color and border glyph
//! the renderer uses. Nothing here changes once the viewer is running.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

/// Theme variants supported by Glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// For dark terminal backgrounds (default)
    #[default]
    Dark,
    /// For light terminal backgrounds
    Light,
}

/// Color palette for a theme variant
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    pub highlight: Color,
    pub subtle: Color,
    pub title_fg: Color,
    pub title_bg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub dialog_border: Color,
    pub text: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Borders of every tab, and the gap after them
    TabBorder,
    /// Label of an inactive tab
    TabLabel,
    /// Label of the active tab
    ActiveTabLabel,
    /// The dialog title bar
    Title,
    /// The "Ok" button
    Button,
    /// Borders around glyph cells
    CellBorder,
    /// Glyph text inside a cell
    Cell,
    /// Rounded border around the dialog
    DialogBorder,
    /// Decorative pattern filling unused canvas space
    Filler,
    /// Plain text
    Text,
}

// Open at the bottom so the active tab flows into the content below it.
const ACTIVE_TAB_BORDER: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "┘",
    bottom_right: "└",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: " ",
};

const TAB_BORDER: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "┴",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Main theme structure managing all UI styling
#[derive(Debug, Clone)]
pub struct Theme {
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Create a new theme with the specified variant
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Dark => ColorPalette {
                highlight: Color::Rgb(125, 86, 244), // #7D56F4
                subtle: Color::Rgb(56, 56, 56),      // #383838
                title_fg: Color::Rgb(255, 253, 245), // #FFFDF5
                title_bg: Color::Rgb(255, 95, 135),  // #FF5F87
                button_fg: Color::Rgb(255, 247, 219), // #FFF7DB
                button_bg: Color::Rgb(136, 139, 126), // #888B7E
                dialog_border: Color::Rgb(135, 75, 253), // #874BFD
                text: Color::Reset,
            },
            ThemeVariant::Light => ColorPalette {
                highlight: Color::Rgb(135, 75, 253), // #874BFD
                subtle: Color::Rgb(217, 220, 207),   // #D9DCCF
                title_fg: Color::Rgb(255, 253, 245),
                title_bg: Color::Rgb(255, 95, 135),
                button_fg: Color::Rgb(255, 247, 219),
                button_bg: Color::Rgb(136, 139, 126),
                dialog_border: Color::Rgb(135, 75, 253),
                text: Color::Reset,
            },
        };

        Self { colors }
    }

    /// Get a ratatui Style for the specified UI element
    pub fn style(&self, element: Element) -> Style {
        match element {
            Element::TabBorder => Style::default().fg(self.colors.highlight),
            Element::TabLabel | Element::Cell | Element::Text => {
                Style::default().fg(self.colors.text)
            }
            Element::ActiveTabLabel => Style::default()
                .fg(self.colors.highlight)
                .add_modifier(Modifier::BOLD),
            Element::Title => Style::default()
                .fg(self.colors.title_fg)
                .bg(self.colors.title_bg),
            Element::Button => Style::default()
                .fg(self.colors.button_fg)
                .bg(self.colors.button_bg),
            Element::CellBorder => Style::default(),
            Element::DialogBorder => Style::default().fg(self.colors.dialog_border),
            Element::Filler => Style::default().fg(self.colors.subtle),
        }
    }

    pub fn tab_border(&self) -> &'static border::Set {
        &TAB_BORDER
    }

    pub fn active_tab_border(&self) -> &'static border::Set {
        &ACTIVE_TAB_BORDER
    }

    pub fn cell_border(&self) -> &'static border::Set {
        &border::PLAIN
    }

    pub fn dialog_border(&self) -> &'static border::Set {
        &border::ROUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let theme = Theme::default();
        assert_eq!(
            theme.style(Element::TabBorder).fg,
            Some(Color::Rgb(125, 86, 244))
        );
        assert_eq!(theme.style(Element::Filler).fg, Some(Color::Rgb(56, 56, 56)));
    }

    #[test]
    fn test_light_variant_uses_light_palette() {
        let theme = Theme::new(ThemeVariant::Light);
        assert_eq!(
            theme.style(Element::TabBorder).fg,
            Some(Color::Rgb(135, 75, 253))
        );
        assert_eq!(
            theme.style(Element::Filler).fg,
            Some(Color::Rgb(217, 220, 207))
        );
    }

    #[test]
    fn test_text_style_resets_foreground() {
        let style = Theme::default().style(Element::Text);
        assert_eq!(style.fg, Some(Color::Reset));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_active_label_differs_from_inactive() {
        let theme = Theme::default();
        assert_ne!(
            theme.style(Element::ActiveTabLabel),
            theme.style(Element::TabLabel)
        );
        assert!(theme
            .style(Element::ActiveTabLabel)
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_active_tab_border_is_open_at_bottom() {
        let theme = Theme::default();
        assert_eq!(theme.active_tab_border().horizontal_bottom, " ");
        assert_eq!(theme.tab_border().horizontal_bottom, "─");
        assert_eq!(theme.dialog_border().top_left, "╭");
        assert_eq!(theme.cell_border().top_left, "┌");
    }
}
