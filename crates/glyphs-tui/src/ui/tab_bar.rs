use glyphs_core::{
    layout::{Tile, VerticalAlign},
    theme::{Element, Theme},
    Section, TabSelector,
};
use ratatui::{style::Style, widgets::Borders};

/// One tab per section, followed by a gap segment whose bottom border runs
/// out to `target_width` columns.
pub fn render_tab_bar(selector: &TabSelector, theme: &Theme, target_width: usize) -> Tile {
    let tabs = Section::ALL
        .iter()
        .map(|&section| render_tab(section, section == selector.active(), theme));
    let row = Tile::join_horizontal(VerticalAlign::Top, tabs);

    let gap_width = target_width.saturating_sub(row.width() + 2);
    let gap = Tile::text(&" ".repeat(gap_width), Style::default())
        .pad(0, 1, 0, 1, Style::default())
        .border(
            theme.tab_border(),
            Borders::BOTTOM,
            theme.style(Element::TabBorder),
        );

    Tile::join_horizontal(VerticalAlign::Bottom, [row, gap])
}

fn render_tab(section: Section, active: bool, theme: &Theme) -> Tile {
    let (label, border) = if active {
        (
            theme.style(Element::ActiveTabLabel),
            theme.active_tab_border(),
        )
    } else {
        (theme.style(Element::TabLabel), theme.tab_border())
    };
    Tile::text(section.name(), label)
        .pad(0, 1, 0, 1, Style::default())
        .border(border, Borders::ALL, theme.style(Element::TabBorder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::plain_lines;

    #[test]
    fn test_tab_bar_fills_target_width() {
        let bar = render_tab_bar(&TabSelector::new(), &Theme::default(), 96);
        assert_eq!(bar.width(), 96);
        assert_eq!(bar.height(), 3);
    }

    #[test]
    fn test_gap_is_floored_at_zero() {
        let bar = render_tab_bar(&TabSelector::new(), &Theme::default(), 10);
        let tabs_only = Tile::join_horizontal(
            VerticalAlign::Top,
            Section::ALL
                .iter()
                .map(|&s| render_tab(s, false, &Theme::default())),
        );
        // The gap keeps only its padding.
        assert_eq!(bar.width(), tabs_only.width() + 2);
    }

    #[test]
    fn test_only_active_tab_is_open() {
        let theme = Theme::default();
        for section in Section::ALL {
            let mut selector = TabSelector::new();
            selector.select(section);
            let bar = render_tab_bar(&selector, &theme, 96);
            let lines = plain_lines(&bar.into_text());

            let open = format!("┘{}└", " ".repeat(section.name().len() + 2));
            assert!(lines[2].contains(&open), "{section}: {}", lines[2]);
            assert_eq!(lines[2].matches('┘').count(), 1);
            assert_eq!(lines[2].matches('┴').count(), 2 * (Section::ALL.len() - 1));
        }
    }

    #[test]
    fn test_only_active_label_is_highlighted() {
        let theme = Theme::default();
        let active_style = theme.style(Element::ActiveTabLabel);
        for section in Section::ALL {
            let mut selector = TabSelector::new();
            selector.select(section);
            let text = render_tab_bar(&selector, &theme, 96).into_text();

            let highlighted: Vec<_> = text
                .lines
                .iter()
                .flat_map(|line| line.spans.iter())
                .filter(|span| span.style == active_style)
                .map(|span| span.content.to_string())
                .collect();
            assert_eq!(highlighted, [section.name()]);
        }
    }
}
