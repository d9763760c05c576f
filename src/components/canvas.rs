//! Rendering capabilities
//!
//! Renderers only need a handful of operations from the terminal toolkit:
//! styling a piece of text, measuring it, stacking blocks, framing a block
//! and placing one block over another. [`Canvas`] names exactly those, and
//! [`TextCanvas`] provides them on top of ratatui's text and buffer types.

use crate::model::table::display_width;
use crossterm::style::{Attribute, Color as AnsiColor, ContentStyle};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub trait Canvas {
    /// Apply a style to a piece of text
    fn paint(&self, text: String, style: Style) -> Span<'static>;

    /// Width of `text` in terminal cells
    fn measure(&self, text: &str) -> usize;

    /// Put blocks one under the other
    fn stack(&self, blocks: Vec<Text<'static>>) -> Text<'static>;

    /// Draw `content` inside a titled border of exactly `size`
    fn frame(
        &self,
        content: Text<'static>,
        title: Line<'static>,
        border: Style,
        size: Size,
    ) -> Text<'static>;

    /// Draw `block` into `area` of a `screen`-sized copy of `background`
    fn place(
        &self,
        background: &Text<'static>,
        block: &Text<'static>,
        area: Rect,
        screen: Size,
    ) -> Text<'static>;
}

/// Canvas backed by ratatui text and an off-screen buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCanvas;

impl Canvas for TextCanvas {
    fn paint(&self, text: String, style: Style) -> Span<'static> {
        Span::styled(text, style)
    }

    fn measure(&self, text: &str) -> usize {
        display_width(text)
    }

    fn stack(&self, blocks: Vec<Text<'static>>) -> Text<'static> {
        let lines: Vec<Line<'static>> = blocks.into_iter().flat_map(|b| b.lines).collect();
        Text::from(lines)
    }

    fn frame(
        &self,
        content: Text<'static>,
        title: Line<'static>,
        border: Style,
        size: Size,
    ) -> Text<'static> {
        if size.width == 0 || size.height == 0 {
            return Text::default();
        }

        let area = Rect::new(0, 0, size.width, size.height);
        let mut buf = Buffer::empty(area);

        Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, &mut buf);

        buffer_to_text(&buf, false)
    }

    fn place(
        &self,
        background: &Text<'static>,
        block: &Text<'static>,
        area: Rect,
        screen: Size,
    ) -> Text<'static> {
        if screen.width == 0 || screen.height == 0 {
            return background.clone();
        }

        let full = Rect::new(0, 0, screen.width, screen.height);
        let area = area.intersection(full);
        let mut buf = Buffer::empty(full);

        Paragraph::new(background.clone()).render(full, &mut buf);
        Clear.render(area, &mut buf);
        Paragraph::new(block.clone()).render(area, &mut buf);

        buffer_to_text(&buf, true)
    }
}

/// Style of a buffer cell, with terminal-default colors left unset
fn cell_style(cell: &Cell) -> Style {
    let mut style = Style::default().add_modifier(cell.modifier);
    if cell.fg != Color::Reset {
        style = style.fg(cell.fg);
    }
    if cell.bg != Color::Reset {
        style = style.bg(cell.bg);
    }
    style
}

fn is_blank(cell: &Cell) -> bool {
    cell.symbol() == " " && cell_style(cell) == Style::default()
}

/// Read a buffer back as styled lines
///
/// Runs of equally styled cells become one span. With `trim`, unstyled
/// blanks at the end of each row are dropped.
fn buffer_to_text(buf: &Buffer, trim: bool) -> Text<'static> {
    let width = buf.area.width as usize;
    if width == 0 {
        return Text::default();
    }

    let lines: Vec<Line<'static>> = buf
        .content
        .chunks(width)
        .map(|row| {
            let row = if trim {
                let end = row.iter().rposition(|c| !is_blank(c)).map_or(0, |i| i + 1);
                &row[..end]
            } else {
                row
            };

            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_style = Style::default();
            let mut skip = 0;

            for cell in row {
                // Cells hidden behind a wide character
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                skip = display_width(symbol).saturating_sub(1);

                let style = cell_style(cell);
                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push_str(symbol);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }

            Line::from(spans)
        })
        .collect();

    Text::from(lines)
}

fn ansi_color(color: Color) -> Option<AnsiColor> {
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::DarkRed,
        Color::Green => AnsiColor::DarkGreen,
        Color::Yellow => AnsiColor::DarkYellow,
        Color::Blue => AnsiColor::DarkBlue,
        Color::Magenta => AnsiColor::DarkMagenta,
        Color::Cyan => AnsiColor::DarkCyan,
        Color::Gray => AnsiColor::Grey,
        Color::DarkGray => AnsiColor::DarkGrey,
        Color::LightRed => AnsiColor::Red,
        Color::LightGreen => AnsiColor::Green,
        Color::LightYellow => AnsiColor::Yellow,
        Color::LightBlue => AnsiColor::Blue,
        Color::LightMagenta => AnsiColor::Magenta,
        Color::LightCyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::Rgb(r, g, b) => AnsiColor::Rgb { r, g, b },
        Color::Indexed(i) => AnsiColor::AnsiValue(i),
    };
    Some(mapped)
}

fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    out.foreground_color = style.fg.and_then(ansi_color);
    out.background_color = style.bg.and_then(ansi_color);

    let modifiers = style.add_modifier - style.sub_modifier;
    let attributes = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::RAPID_BLINK, Attribute::RapidBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (modifier, attribute) in attributes {
        if modifiers.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}

/// Serialize a styled block into a single ANSI-escaped string
pub fn to_ansi(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            let line_style = text.style.patch(line.style);
            line.spans
                .iter()
                .map(|span| {
                    content_style(line_style.patch(span.style))
                        .apply(span.content.as_ref())
                        .to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of a block with all styling dropped
pub fn to_plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_keeps_order() {
        let canvas = TextCanvas;
        let text = canvas.stack(vec![Text::from("a\nb"), Text::from("c")]);
        assert_eq!(to_plain(&text), "a\nb\nc");
    }

    #[test]
    fn test_measure_wide_and_escaped() {
        let canvas = TextCanvas;
        assert_eq!(canvas.measure("abc"), 3);
        assert_eq!(canvas.measure("日本"), 4);
        assert_eq!(canvas.measure("\x1b[1mab\x1b[0m"), 2);
    }

    #[test]
    fn test_frame_draws_border_at_size() {
        let canvas = TextCanvas;
        let framed = canvas.frame(
            Text::from("hi"),
            Line::from("T"),
            Style::default(),
            Size::new(6, 3),
        );
        let plain = to_plain(&framed);
        let rows: Vec<&str> = plain.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "┌T───┐");
        assert_eq!(rows[1], "│hi  │");
        assert_eq!(rows[2], "└────┘");
    }

    #[test]
    fn test_place_overwrites_only_area() {
        let canvas = TextCanvas;
        let background = Text::from("aaaaaa\nbbbbbb\ncccccc");
        let placed = canvas.place(
            &background,
            &Text::from("XX"),
            Rect::new(2, 1, 2, 1),
            Size::new(6, 3),
        );
        assert_eq!(to_plain(&placed), "aaaaaa\nbbXXbb\ncccccc");
    }

    #[test]
    fn test_place_on_empty_screen_is_identity() {
        let canvas = TextCanvas;
        let background = Text::from("abc");
        let placed = canvas.place(
            &background,
            &Text::from("X"),
            Rect::new(0, 0, 1, 1),
            Size::new(0, 0),
        );
        assert_eq!(placed, background);
    }

    #[test]
    fn test_place_keeps_wide_characters() {
        let canvas = TextCanvas;
        let placed = canvas.place(
            &Text::from("日本語"),
            &Text::from(""),
            Rect::new(0, 1, 1, 1),
            Size::new(6, 2),
        );
        assert_eq!(to_plain(&placed).lines().next(), Some("日本語"));
    }

    #[test]
    fn test_to_ansi_plain_text_has_no_escapes() {
        assert_eq!(to_ansi(&Text::from("plain\ntext")), "plain\ntext");
    }

    #[test]
    fn test_to_ansi_styles_spans() {
        let text = Text::from(Line::from(vec![
            Span::styled("x", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("y"),
        ]));
        let out = to_ansi(&text);
        assert!(out.contains('\x1b'));
        assert!(out.ends_with('y'));
        assert_eq!(display_width(&out), 2);
    }
}
