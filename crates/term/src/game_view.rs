//! GameView: maps a `core::FrameView` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//!   1  2  3  4
//! ┌────────────┐
//! │ 1        4 │   <- row 0, four seconds out
//! │    2       │
//! │ ...        │   <- row 19, on the hit zone
//! └────────────┘ <-- HIT ZONE
//! Time: 1.23 s | Score: 10 | Combo: x2
//! HIT C4      key 0
//! ```

use crate::core::FrameView;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{JudgementKind, Lane, LANE_COUNT, TRACK_HEIGHT};

const HIT_ZONE_LABEL: &str = "<-- HIT ZONE";

/// Room for the status line at five-digit scores and three-digit combos.
const STATUS_WIDTH: u16 = 48;

/// Rows used by the view: header, two borders, track, status, judgement.
pub const VIEW_HEIGHT: u16 = TRACK_HEIGHT as u16 + 5;

const TRACK_BG: Rgb = Rgb::new(20, 20, 28);
const HIT_ROW_BG: Rgb = Rgb::new(45, 45, 60);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lane colors: green, red, yellow, blue.
pub fn lane_color(lane: Lane) -> Rgb {
    match lane.index() {
        0 => Rgb::new(90, 210, 110),
        1 => Rgb::new(225, 80, 80),
        2 => Rgb::new(235, 210, 80),
        _ => Rgb::new(90, 140, 235),
    }
}

/// A lightweight terminal view of the lane track.
pub struct GameView {
    /// Lane width in terminal columns.
    lane_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { lane_w: 3 }
    }
}

impl GameView {
    pub fn new(lane_w: u16) -> Self {
        Self {
            lane_w: lane_w.max(1),
        }
    }

    /// Width of the bordered track.
    pub fn frame_width(&self) -> u16 {
        LANE_COUNT as u16 * self.lane_w + 2
    }

    /// Width of the whole view: track plus hit zone label, or the status line.
    pub fn view_width(&self) -> u16 {
        let track = self.frame_width() + 1 + HIT_ZONE_LABEL.chars().count() as u16;
        track.max(STATUS_WIDTH)
    }

    /// Column of a lane's glyph relative to the track's left border.
    pub fn lane_column(&self, lane: usize) -> u16 {
        1 + lane as u16 * self.lane_w + self.lane_w / 2
    }

    /// Top-left corner of the view inside the viewport (centered).
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(self.view_width()) / 2,
            viewport.height.saturating_sub(VIEW_HEIGHT) / 2,
        )
    }

    /// Render one frame into a new canvas of the view's size.
    pub fn render(&self, frame: &FrameView<'_>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(frame, &mut fb);
        fb
    }

    /// Render one frame into `fb`, resizing it to the view.
    ///
    /// Coordinates are view-local; [`GameView::origin`] says where the canvas
    /// goes on screen.
    pub fn render_into(&self, frame: &FrameView<'_>, fb: &mut FrameBuffer) {
        fb.reset(self.view_width(), VIEW_HEIGHT, Cell::default());

        let frame_w = self.frame_width();
        let frame_h = TRACK_HEIGHT as u16 + 2;

        // Lane header.
        for lane in Lane::all() {
            let style = CellStyle::fg(lane_color(lane)).bold();
            fb.put_char(self.lane_column(lane.index()), 0, lane.glyph(), style);
        }

        fb.draw_box(0, 1, frame_w, frame_h, CellStyle::fg(Rgb::new(200, 200, 200)));
        self.draw_track(fb, frame, 1, 2);

        let bottom_y = frame_h;
        fb.put_str(
            frame_w + 1,
            bottom_y,
            HIT_ZONE_LABEL,
            CellStyle::fg(Rgb::new(160, 160, 160)),
        );

        self.draw_status(fb, frame, bottom_y + 1);
    }

    fn draw_track(&self, fb: &mut FrameBuffer, frame: &FrameView<'_>, x: u16, y: u16) {
        let inner_w = LANE_COUNT as u16 * self.lane_w;
        let hit_row = TRACK_HEIGHT - 1;

        for (row, cells) in frame.grid.rows().iter().enumerate() {
            let ry = y + row as u16;
            let bg = if row == hit_row { HIT_ROW_BG } else { TRACK_BG };
            fb.fill_span(x, ry, inner_w, CellStyle::default().on(bg));

            for lane in Lane::all() {
                let cx = x + lane.index() as u16 * self.lane_w;
                let pressed = row == hit_row && frame.pressed.is_some_and(|p| lane.matches_press(p));
                if pressed {
                    let flash = CellStyle::default().on(lane_color(lane).scaled(45));
                    fb.fill_span(cx, ry, self.lane_w, flash);
                }
                if let Some(glyph) = cells[lane.index()] {
                    let cell_bg = fb.get(cx, ry).map(|c| c.style.bg).unwrap_or(bg);
                    let style = CellStyle::fg(lane_color(lane)).on(cell_bg).bold();
                    fb.put_char(cx + self.lane_w / 2, ry, glyph, style);
                }
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, frame: &FrameView<'_>, y: u16) {
        let value = CellStyle::fg(Rgb::new(220, 220, 220));
        let status = format!(
            "Time: {:.2} s | Score: {} | Combo: x{}",
            frame.elapsed, frame.score, frame.combo
        );
        fb.put_str(0, y, &status, value);

        let line_y = y + 1;
        if let Some(judgement) = frame.last_judgement {
            let color = match judgement.kind {
                JudgementKind::Hit => Rgb::new(120, 230, 120),
                JudgementKind::Miss => Rgb::new(230, 90, 90),
            };
            let text = format!("{} {}", judgement.kind.as_str(), judgement.note_name);
            fb.put_str(0, line_y, &text, CellStyle::fg(color).bold());
        }
        if let Some(pressed) = frame.pressed {
            fb.put_str(12, line_y, &format!("key {}", pressed), value.dim());
        }
    }
}
