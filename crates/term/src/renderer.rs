//! TerminalRenderer: paints the lane view at a fixed spot on the screen.
//!
//! The view is a small canvas in its own coordinates. The whole screen is
//! cleared and the view painted in full only when its placement changes (first
//! frame, terminal resize). Every other frame rewrites just the changed span of
//! each row, which is usually a few note glyphs and the status line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Where the view sits on screen and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    origin: (u16, u16),
    width: u16,
    height: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    placed: Option<Placement>,
    prev: FrameBuffer,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            placed: None,
            prev: FrameBuffer::new(0, 0),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Paint `view` with its top-left corner at `origin`.
    ///
    /// `view` is swapped with the previous frame afterwards, so the caller gets
    /// a spare canvas back instead of a copy.
    pub fn present(&mut self, origin: (u16, u16), view: &mut FrameBuffer) -> Result<()> {
        let placement = Placement {
            origin,
            width: view.width(),
            height: view.height(),
        };

        self.buf.clear();
        if self.placed == Some(placement) {
            queue_rows(&mut self.buf, origin, view, Some(&self.prev))?;
        } else {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            queue_rows(&mut self.buf, origin, view, None)?;
            self.placed = Some(placement);
        }
        self.flush()?;

        std::mem::swap(&mut self.prev, view);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Columns `start..end` of `row` that differ between two canvases of equal size.
fn dirty_span(prev: &FrameBuffer, next: &FrameBuffer, row: u16) -> Option<(u16, u16)> {
    let differs = |x: u16| prev.get(x, row) != next.get(x, row);
    let start = (0..next.width()).find(|&x| differs(x))?;
    let last = (start..next.width()).rev().find(|&x| differs(x))?;
    Some((start, last + 1))
}

/// Queue the drawing commands for `view`: every row when `prev` is `None`,
/// otherwise only the dirty span of each row.
fn queue_rows(
    out: &mut Vec<u8>,
    origin: (u16, u16),
    view: &FrameBuffer,
    prev: Option<&FrameBuffer>,
) -> Result<()> {
    let mut pen: Option<CellStyle> = None;

    for y in 0..view.height() {
        let span = match prev {
            Some(prev) => dirty_span(prev, view, y),
            None => Some((0, view.width())),
        };
        let Some((start, end)) = span else {
            continue;
        };

        out.queue(cursor::MoveTo(
            origin.0.saturating_add(start),
            origin.1.saturating_add(y),
        ))?;
        for x in start..end {
            let cell = view.get(x, y).unwrap_or_default();
            if pen != Some(cell.style) {
                queue_style(out, cell.style)?;
                pen = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    if pen.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // Attribute reset also drops colors on most terminals, so it goes first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(origin: (u16, u16), view: &FrameBuffer, prev: Option<&FrameBuffer>) -> String {
        let mut out = Vec::new();
        queue_rows(&mut out, origin, view, prev).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_paint_is_placed_at_the_origin() {
        let mut view = FrameBuffer::new(2, 2);
        view.put_char(0, 0, 'Q', CellStyle::default());
        view.put_char(1, 1, 'Z', CellStyle::default());

        let text = painted((5, 3), &view, None);
        assert!(text.contains('Q') && text.contains('Z'));
        // MoveTo is 1-based row;column: view row 0 sits on screen row 4, col 6.
        assert!(text.contains("\x1b[4;6H"));
        assert!(text.contains("\x1b[5;6H"));
        assert!(!text.contains("\r\n"));
    }

    #[test]
    fn unchanged_view_writes_nothing() {
        let mut view = FrameBuffer::new(3, 2);
        view.put_str(0, 0, "QZQ", CellStyle::default());
        assert!(painted((0, 0), &view, Some(&view.clone())).is_empty());
    }

    #[test]
    fn only_the_dirty_span_is_repainted() {
        let prev = FrameBuffer::new(8, 3);
        let mut next = prev.clone();
        next.put_char(2, 1, 'Q', CellStyle::default());
        next.put_char(5, 1, 'Z', CellStyle::default());

        assert_eq!(dirty_span(&prev, &next, 0), None);
        assert_eq!(dirty_span(&prev, &next, 1), Some((2, 6)));

        let text = painted((10, 0), &next, Some(&prev));
        assert!(text.contains("\x1b[2;13H"));
        assert_eq!(text.matches('H').count(), 1);
    }

    #[test]
    fn style_change_alone_is_dirty() {
        let prev = FrameBuffer::new(4, 1);
        let mut next = prev.clone();
        next.fill_span(1, 0, 1, CellStyle::default().on(Rgb::new(40, 40, 40)));
        assert_eq!(dirty_span(&prev, &next, 0), Some((1, 2)));
    }

    #[test]
    fn colors_map_to_truecolor() {
        assert_eq!(
            color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
