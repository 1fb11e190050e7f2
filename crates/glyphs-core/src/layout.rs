//! Text Tile Layout for Glyphs
//!
//! Screens are composed from rectangular blocks of styled text. A [`Tile`] is
//! always rectangular: every line is padded to the tile's display width, which
//! is measured in terminal columns so double-width glyphs lay out correctly.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Borders;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Vertical placement of a shorter tile next to a taller one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// A repeating character pattern used to fill unused space
#[derive(Debug, Clone, PartialEq)]
pub struct Filler {
    pattern: String,
    style: Style,
}

impl Filler {
    pub fn new(pattern: impl Into<String>, style: Style) -> Self {
        Self {
            pattern: pattern.into(),
            style,
        }
    }

    /// A run of exactly `width` columns. The pattern repeats from its start;
    /// columns too narrow for the next glyph are padded with spaces.
    pub fn render(&self, width: usize) -> Span<'static> {
        let mut run = String::with_capacity(width);
        let mut used = 0;
        let mut glyphs = self
            .pattern
            .chars()
            .filter(|c| c.width().unwrap_or(0) > 0)
            .cycle()
            .peekable();
        while let Some(c) = glyphs.peek().copied() {
            let w = c.width().unwrap_or(1);
            if used + w > width {
                break;
            }
            run.push(c);
            used += w;
            glyphs.next();
        }
        run.extend(std::iter::repeat(' ').take(width - used));
        Span::styled(run, self.style)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tile {
    lines: Vec<Line<'static>>,
    width: usize,
}

fn spaces(count: usize, style: Style) -> Span<'static> {
    Span::styled(" ".repeat(count), style)
}

/// Split `extra` columns (or rows) into leading/trailing amounts.
fn split_extra(extra: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Left => (0, extra),
        Alignment::Center => (extra / 2, extra - extra / 2),
        Alignment::Right => (extra, 0),
    }
}

impl VerticalAlign {
    fn split(self, extra: usize) -> (usize, usize) {
        match self {
            VerticalAlign::Top => (0, extra),
            VerticalAlign::Center => (extra / 2, extra - extra / 2),
            VerticalAlign::Bottom => (extra, 0),
        }
    }
}

impl Tile {
    /// A tile holding `content`, one line per text line, padded with `style`
    pub fn text(content: &str, style: Style) -> Self {
        let raw: Vec<&str> = if content.is_empty() {
            vec![""]
        } else {
            content.lines().collect()
        };
        let width = raw.iter().map(|l| l.width()).max().unwrap_or(0);
        let lines = raw
            .into_iter()
            .map(|l| {
                let mut spans = vec![Span::styled(l.to_string(), style)];
                let pad = width - l.width();
                if pad > 0 {
                    spans.push(spaces(pad, style));
                }
                Line::from(spans)
            })
            .collect();
        Self { lines, width }
    }

    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            lines: (0..height)
                .map(|_| Line::from(spaces(width, Style::default())))
                .collect(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn into_text(self) -> Text<'static> {
        Text::from(self.lines)
    }

    /// Surround the tile with blank space filled in `style`
    pub fn pad(self, top: usize, right: usize, bottom: usize, left: usize, style: Style) -> Self {
        let width = self.width + left + right;
        let mut lines = Vec::with_capacity(self.lines.len() + top + bottom);
        lines.extend((0..top).map(|_| Line::from(spaces(width, style))));
        for line in self.lines {
            let mut spans = Vec::with_capacity(line.spans.len() + 2);
            if left > 0 {
                spans.push(spaces(left, style));
            }
            spans.extend(line.spans);
            if right > 0 {
                spans.push(spaces(right, style));
            }
            lines.push(Line::from(spans));
        }
        lines.extend((0..bottom).map(|_| Line::from(spaces(width, style))));
        Self { lines, width }
    }

    /// Widen the tile to `width` columns, aligning the content. Tiles already
    /// at least that wide keep their natural width.
    pub fn align_to_width(self, width: usize, alignment: Alignment, style: Style) -> Self {
        if width <= self.width {
            return self;
        }
        let (left, right) = split_extra(width - self.width, alignment);
        self.pad(0, right, 0, left, style)
    }

    pub fn margin_top(self, rows: usize) -> Self {
        self.pad(rows, 0, 0, 0, Style::default())
    }

    /// Draw the selected sides of a border. Corners appear only where both
    /// adjoining sides are drawn.
    pub fn border(self, set: &border::Set, sides: Borders, style: Style) -> Self {
        let left = sides.contains(Borders::LEFT);
        let right = sides.contains(Borders::RIGHT);
        let top = sides.contains(Borders::TOP);
        let bottom = sides.contains(Borders::BOTTOM);
        let width = self.width;

        let edge = |corner_left: &'static str, fill: &'static str, corner_right: &'static str| {
            let mut spans = Vec::with_capacity(3);
            if left {
                spans.push(Span::styled(corner_left, style));
            }
            spans.push(Span::styled(fill.repeat(width), style));
            if right {
                spans.push(Span::styled(corner_right, style));
            }
            Line::from(spans)
        };

        let mut lines = Vec::with_capacity(self.lines.len() + 2);
        if top {
            lines.push(edge(set.top_left, set.horizontal_top, set.top_right));
        }
        let bottom_line = bottom.then(|| {
            edge(
                set.bottom_left,
                set.horizontal_bottom,
                set.bottom_right,
            )
        });
        for line in self.lines {
            let mut spans = Vec::with_capacity(line.spans.len() + 2);
            if left {
                spans.push(Span::styled(set.vertical_left, style));
            }
            spans.extend(line.spans);
            if right {
                spans.push(Span::styled(set.vertical_right, style));
            }
            lines.push(Line::from(spans));
        }
        lines.extend(bottom_line);

        Self {
            lines,
            width: width + usize::from(left) + usize::from(right),
        }
    }

    /// Place tiles side by side
    pub fn join_horizontal(align: VerticalAlign, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        let height = tiles.iter().map(Tile::height).max().unwrap_or(0);
        let width = tiles.iter().map(Tile::width).sum();

        let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); height];
        for tile in tiles {
            let (above, _) = align.split(height - tile.height());
            let tile_width = tile.width;
            let mut source = tile.lines.into_iter();
            for (y, row) in rows.iter_mut().enumerate() {
                match (y >= above).then(|| source.next()).flatten() {
                    Some(line) => row.extend(line.spans),
                    None => row.push(spaces(tile_width, Style::default())),
                }
            }
        }

        Self {
            lines: rows.into_iter().map(Line::from).collect(),
            width,
        }
    }

    /// Stack tiles top to bottom
    pub fn join_vertical(alignment: Alignment, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        let width = tiles.iter().map(Tile::width).max().unwrap_or(0);
        let lines = tiles
            .into_iter()
            .flat_map(|tile| tile.align_to_width(width, alignment, Style::default()).lines)
            .collect();
        Self { lines, width }
    }

    /// Position the tile inside a `width` x `height` canvas, filling the rest
    /// with `filler`. An axis where the tile is already larger is left as is.
    pub fn place(
        self,
        width: usize,
        height: usize,
        alignment: Alignment,
        vertical: VerticalAlign,
        filler: &Filler,
    ) -> Self {
        let mut placed = self;
        if width > placed.width {
            let (left, right) = split_extra(width - placed.width, alignment);
            placed = Self {
                lines: placed
                    .lines
                    .into_iter()
                    .map(|line| {
                        let mut spans = Vec::with_capacity(line.spans.len() + 2);
                        if left > 0 {
                            spans.push(filler.render(left));
                        }
                        spans.extend(line.spans);
                        if right > 0 {
                            spans.push(filler.render(right));
                        }
                        Line::from(spans)
                    })
                    .collect(),
                width,
            };
        }
        if height > placed.height() {
            let (above, below) = vertical.split(height - placed.height());
            let row = || Line::from(filler.render(placed.width));
            let mut lines = Vec::with_capacity(height);
            lines.extend((0..above).map(|_| row()));
            lines.extend(std::mem::take(&mut placed.lines));
            lines.extend((0..below).map(|_| row()));
            placed.lines = lines;
        }
        placed
    }

    /// Clip every line to at most `max` columns
    pub fn max_width(self, max: usize) -> Self {
        if self.width <= max {
            return self;
        }
        let lines = self
            .lines
            .into_iter()
            .map(|line| truncate_line(line, max))
            .collect();
        Self { lines, width: max }
    }
}

fn truncate_line(line: Line<'static>, max: usize) -> Line<'static> {
    let mut remaining = max;
    let mut spans = Vec::with_capacity(line.spans.len());
    let mut last_style = Style::default();
    for span in line.spans {
        if remaining == 0 {
            break;
        }
        last_style = span.style;
        let w = span.content.width();
        if w <= remaining {
            remaining -= w;
            spans.push(span);
            continue;
        }
        let mut cut = String::new();
        for c in span.content.chars() {
            let cw = c.width().unwrap_or(0);
            if cw > remaining {
                break;
            }
            remaining -= cw;
            cut.push(c);
        }
        spans.push(Span::styled(cut, span.style));
        break;
    }
    // A wide glyph straddling the edge leaves a gap.
    if remaining > 0 {
        spans.push(spaces(remaining, last_style));
    }
    Line::from(spans)
}
