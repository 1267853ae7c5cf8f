//! Lane projection - upcoming notes mapped onto a fixed 20 x 4 grid.
//!
//! Row 0 is the far end of the track (4 seconds out), row 19 sits on the hit
//! zone. The projection is a pure function of the chart and the elapsed time.

use crate::chart::NoteChart;
use crate::types::{LANE_COUNT, LOOKAHEAD_SECS, TRACK_HEIGHT};

/// Glyph grid of the visible track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneGrid {
    cells: [[Option<char>; LANE_COUNT]; TRACK_HEIGHT],
}

impl Default for LaneGrid {
    fn default() -> Self {
        Self {
            cells: [[None; LANE_COUNT]; TRACK_HEIGHT],
        }
    }
}

impl LaneGrid {
    /// Project every pending note within the lookahead onto the grid.
    pub fn project(chart: &NoteChart, elapsed: f64) -> Self {
        let mut grid = Self::default();
        for (_, note) in chart.pending() {
            let dist = note.timestamp as f64 - elapsed;
            let Some(row) = row_for_distance(dist) else {
                continue;
            };
            grid.cells[row][note.lane.index()] = Some(note.lane.glyph());
        }
        grid
    }

    pub fn get(&self, row: usize, lane: usize) -> Option<char> {
        self.cells.get(row)?.get(lane).copied().flatten()
    }

    pub fn rows(&self) -> &[[Option<char>; LANE_COUNT]; TRACK_HEIGHT] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Plain-text row, one character per lane (space when empty).
    pub fn row_text(&self, row: usize) -> String {
        (0..LANE_COUNT)
            .map(|lane| self.get(row, lane).unwrap_or(' '))
            .collect()
    }
}

/// Grid row for a note `dist` seconds away, if it is on screen.
pub fn row_for_distance(dist: f64) -> Option<usize> {
    if !(0.0..LOOKAHEAD_SECS).contains(&dist) {
        return None;
    }
    let height = TRACK_HEIGHT as i64;
    let offset = (dist / LOOKAHEAD_SECS * TRACK_HEIGHT as f64).floor() as i64;
    let row = height - 1 - offset;
    if (0..height).contains(&row) {
        Some(row as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_distance() {
        assert_eq!(row_for_distance(0.0), Some(19));
        assert_eq!(row_for_distance(0.19), Some(19));
        assert_eq!(row_for_distance(0.2), Some(18));
        assert_eq!(row_for_distance(2.0), Some(9));
        assert_eq!(row_for_distance(3.99), Some(0));
    }

    #[test]
    fn outside_lookahead_is_hidden() {
        assert_eq!(row_for_distance(-0.01), None);
        assert_eq!(row_for_distance(4.0), None);
        assert_eq!(row_for_distance(10.0), None);
    }

    #[test]
    fn notes_land_in_their_lane() {
        let (chart, _) = NoteChart::parse("1.0 C4 1.0 B4 3.0 E4");
        let grid = LaneGrid::project(&chart, 1.0);
        assert_eq!(grid.get(19, 0), Some('1'));
        assert_eq!(grid.get(19, 3), Some('4'));
        assert_eq!(grid.get(9, 1), Some('2'));
        assert_eq!(grid.row_text(19), "1  4");
        assert_eq!(grid.row_text(0), "    ");
    }

    #[test]
    fn passed_and_far_notes_are_not_drawn() {
        let (chart, _) = NoteChart::parse("0.5 C4 9.0 D4");
        let grid = LaneGrid::project(&chart, 1.0);
        assert!(grid.is_empty());
    }

    #[test]
    fn projection_is_idempotent() {
        let (chart, _) = NoteChart::parse("1.0 C4 1.5 E4 2.0 G4 2.5 B4");
        let a = LaneGrid::project(&chart, 0.7);
        let b = LaneGrid::project(&chart, 0.7);
        assert_eq!(a, b);
    }
}
