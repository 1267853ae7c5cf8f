//! TerminalSession: the terminal as a scoped resource and a frame sink.
//!
//! Raw mode and the alternate screen are entered in [`TerminalSession::enter`]
//! and restored in `Drop`, so early returns, `?` errors and panics all leave
//! the user's terminal usable.

use std::io;

use anyhow::{Context, Result};
use crossterm::terminal;

use crate::core::{FrameSink, FrameView};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalSession {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    active: bool,
}

impl TerminalSession {
    pub fn enter(view: GameView) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            active: true,
        })
    }

    /// Restore the terminal now and report failures.
    pub fn close(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }
}

impl FrameSink for TerminalSession {
    fn present(&mut self, frame: &FrameView<'_>) -> Result<()> {
        let origin = view_origin(&self.view, terminal::size())?;
        self.view.render_into(frame, &mut self.fb);
        self.renderer.present(origin, &mut self.fb)
    }
}

/// Screen position of the view for a terminal of `size`.
fn view_origin(view: &GameView, size: io::Result<(u16, u16)>) -> Result<(u16, u16)> {
    let (width, height) = size.context("failed to query terminal size")?;
    Ok(view.origin(Viewport::new(width, height)))
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_view::VIEW_HEIGHT;

    #[test]
    fn origin_centers_the_view() {
        let view = GameView::default();
        let size = Ok((view.view_width() + 20, VIEW_HEIGHT + 6));
        assert_eq!(view_origin(&view, size).unwrap(), (10, 3));
    }

    #[test]
    fn size_query_failure_is_reported() {
        let size = Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        let err = view_origin(&GameView::default(), size).unwrap_err();
        assert!(err.to_string().contains("terminal size"));
    }
}
