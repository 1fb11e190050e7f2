use glyphs_core::{
    catalog::Row,
    layout::{Filler, Tile, VerticalAlign},
    theme::{Element, Theme},
    Canvas, Section,
};
use ratatui::{layout::Alignment, widgets::Borders};

const TITLE: &str = "GLYPHS";
const BUTTON: &str = "Ok";

/// Title bar sized to a third of the terminal width, never narrower than
/// its own text.
pub fn render_title(theme: &Theme, physical_width: u16) -> Tile {
    let style = theme.style(Element::Title);
    Tile::text(TITLE, style)
        .pad(0, 1, 0, 1, style)
        .align_to_width(usize::from(physical_width / 3), Alignment::Center, style)
}

fn render_row(row: Row, theme: &Theme) -> Tile {
    Tile::join_horizontal(
        VerticalAlign::Center,
        row.iter().map(|group| {
            Tile::text(group.as_str(), theme.style(Element::Cell)).border(
                theme.cell_border(),
                Borders::ALL,
                theme.style(Element::CellBorder),
            )
        }),
    )
}

/// The bordered dialog with the section's glyph grid, centered in the canvas
pub fn render_dialog(section: Section, theme: &Theme, canvas: &Canvas, physical_width: u16) -> Tile {
    let title = render_title(theme, physical_width);
    let body = Tile::join_vertical(
        Alignment::Center,
        section.rows().iter().map(|&row| render_row(row, theme)),
    );

    let button_style = theme.style(Element::Button);
    let button = Tile::text(BUTTON, button_style)
        .pad(0, 3, 0, 3, button_style)
        .margin_top(1);

    let content = Tile::join_vertical(Alignment::Center, [body, button]);
    let view = Tile::join_vertical(Alignment::Center, [title, content]);

    let filler = Filler::new(canvas.filler.clone(), theme.style(Element::Filler));
    view.border(
        theme.dialog_border(),
        Borders::ALL,
        theme.style(Element::DialogBorder),
    )
    .place(
        usize::from(canvas.width),
        usize::from(canvas.height),
        Alignment::Center,
        VerticalAlign::Center,
        &filler,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::plain_lines;

    #[test]
    fn test_title_is_a_third_of_terminal_width() {
        let theme = Theme::default();
        assert_eq!(render_title(&theme, 90).width(), 30);
        assert_eq!(render_title(&theme, 0).width(), " GLYPHS ".len());
        // Narrow terminals keep the title readable.
        assert_eq!(render_title(&theme, 12).width(), 8);
    }

    #[test]
    fn test_dialog_shows_every_group_of_the_section() {
        let theme = Theme::default();
        for section in Section::ALL {
            let lines = plain_lines(
                &render_dialog(section, &theme, &Canvas::default(), 120).into_text(),
            );
            let joined = lines.join("\n");
            assert!(joined.contains(TITLE));
            assert!(joined.contains(BUTTON));
            for row in section.rows() {
                for group in row.iter() {
                    assert!(
                        joined.contains(&format!("│{}│", group.as_str())),
                        "{section} is missing {}",
                        group.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn test_dialog_fills_canvas_width_with_pattern() {
        let theme = Theme::default();
        let canvas = Canvas::default();
        let dialog = render_dialog(Section::BasicAccented, &theme, &canvas, 0);
        assert_eq!(dialog.width(), usize::from(canvas.width));
        assert!(dialog.height() >= usize::from(canvas.height));

        let lines = plain_lines(&dialog.into_text());
        assert!(lines.iter().all(|line| line.starts_with('猫')));
        assert!(lines.iter().any(|line| line.contains('╭')));
        assert!(lines.iter().any(|line| line.contains('╯')));
    }

    #[test]
    fn test_short_dialog_is_filled_vertically() {
        let canvas = Canvas {
            height: 40,
            ..Canvas::default()
        };
        let dialog = render_dialog(Section::BasicLatin, &Theme::default(), &canvas, 0);
        assert_eq!(dialog.height(), 40);
        let lines = plain_lines(&dialog.into_text());
        assert!(!lines[0].contains('╭'));
        assert!(lines[0].starts_with("猫咪"));
    }
}
