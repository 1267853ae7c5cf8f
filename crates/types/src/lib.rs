//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, audio clocks).
//!
//! # Track Geometry
//!
//! - **Lanes**: 4 columns (indexed 0-3), shown to the player as `1`-`4`
//! - **Track height**: 20 rows; row 19 sits directly above the hit zone
//! - **Lookahead**: notes up to 4 seconds away are visible
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HIT_WINDOW_SECS` | 0.2 | Half-width of the hit window around a note |
//! | `LOOKAHEAD_SECS` | 4.0 | Forward horizon of the lane view |
//! | `LEVEL_END_MARGIN_SECS` | 2.0 | Time after the last note before the level ends |
//! | `EMPTY_CHART_END_SECS` | 5.0 | Level length when the chart has no notes |
//! | `TARGET_FPS` | 30 | Nominal frame rate of the game loop |
//! | `FRAME_MS` | 33 | Frame budget derived from `TARGET_FPS` |
//! | `DEFAULT_LEAD_IN_MS` | 3000 | Pause between track start and the first frame |
//!
//! # Examples
//!
//! ```
//! use tui_rhythm_types::{InputSignal, Lane, LANE_COUNT};
//!
//! // Note names map onto lanes by their first letter.
//! assert_eq!(Lane::from_note_name("C4"), Some(Lane::new(0).unwrap()));
//! assert_eq!(Lane::from_note_name("B3").map(Lane::glyph), Some('4'));
//! assert_eq!(Lane::from_note_name("X1"), None);
//!
//! // Digits select lanes, Ctrl+C (0x03) quits.
//! assert_eq!(InputSignal::from_char('2'), Some(InputSignal::Lane(2)));
//! assert_eq!(InputSignal::from_char('\u{3}'), Some(InputSignal::Quit));
//!
//! assert_eq!(LANE_COUNT, 4);
//! ```

/// Number of note lanes.
pub const LANE_COUNT: usize = 4;

/// Height of the lane track in rows.
pub const TRACK_HEIGHT: usize = 20;

/// Maximum number of notes a chart keeps.
pub const MAX_NOTES: usize = 2000;

/// Longest note label kept on a `NoteEvent` (e.g. `"C#4"`).
pub const NOTE_NAME_MAX: usize = 4;

/// Half-width of the hit window, in seconds.
pub const HIT_WINDOW_SECS: f64 = 0.2;

/// Forward time horizon of the lane view, in seconds.
pub const LOOKAHEAD_SECS: f64 = 4.0;

/// The level ends this long after the last note.
pub const LEVEL_END_MARGIN_SECS: f64 = 2.0;

/// Level length for an empty chart.
pub const EMPTY_CHART_END_SECS: f64 = 5.0;

/// Points per hit before the combo multiplier.
pub const HIT_POINTS: u32 = 10;

/// Nominal frame rate of the game loop.
pub const TARGET_FPS: u32 = 30;

/// Frame budget in milliseconds (1000 / 30, truncated).
pub const FRAME_MS: u64 = 1000 / TARGET_FPS as u64;

/// Pause after the track starts and before the first frame.
pub const DEFAULT_LEAD_IN_MS: u64 = 3000;

/// Interrupt character delivered by Ctrl+C in raw mode.
pub const INTERRUPT_CHAR: char = '\u{3}';

/// One of the four note lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    /// Create a lane from its 0-based index.
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < LANE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Map a note label onto a lane by its first character.
    ///
    /// `C`/`D` → 0, `E`/`F` → 1, `G`/`A` → 2, `B` → 3. Anything else
    /// (including lowercase letters) is unmapped.
    pub fn from_note_name(name: &str) -> Option<Self> {
        match name.chars().next()? {
            'C' | 'D' => Some(Self(0)),
            'E' | 'F' => Some(Self(1)),
            'G' | 'A' => Some(Self(2)),
            'B' => Some(Self(3)),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Digit shown for this lane (`'1'`-`'4'`).
    pub fn glyph(self) -> char {
        (b'1' + self.0) as char
    }

    /// Whether a pressed lane number selects this lane.
    pub fn matches_press(self, pressed: u8) -> bool {
        self.0 == pressed
    }

    pub fn all() -> impl Iterator<Item = Lane> {
        (0..LANE_COUNT as u8).map(Lane)
    }
}

/// Player input relevant to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    /// Stop the session right away.
    Quit,
    /// A lane key (`0`-`4`) pressed this frame.
    ///
    /// The value is the raw digit; `4` is accepted but matches no lane.
    Lane(u8),
}

impl InputSignal {
    /// Interpret a single input character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            INTERRUPT_CHAR => Some(InputSignal::Quit),
            '0'..='4' => Some(InputSignal::Lane(ch as u8 - b'0')),
            _ => None,
        }
    }
}

/// Outcome of a note once it leaves the `Pending` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JudgementKind {
    Hit,
    Miss,
}

impl JudgementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgementKind::Hit => "HIT",
            JudgementKind::Miss => "MISS",
        }
    }
}

/// The most recent judgement, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub kind: JudgementKind,
    pub note_name: String,
    pub lane: Lane,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The player pressed Ctrl+C.
    Quit,
    /// Elapsed time passed the level-end threshold.
    LevelEnd,
    /// The backing track stopped playing.
    TrackEnded,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Quit => "quit",
            EndReason::LevelEnd => "level end",
            EndReason::TrackEnded => "track ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(HIT_WINDOW_SECS, 0.2);
        assert_eq!(LOOKAHEAD_SECS, 4.0);
        assert_eq!(LEVEL_END_MARGIN_SECS, 2.0);
        assert_eq!(EMPTY_CHART_END_SECS, 5.0);
        assert_eq!(FRAME_MS, 33);
        assert_eq!(MAX_NOTES, 2000);
        assert_eq!(TRACK_HEIGHT, 20);
    }

    #[test]
    fn note_names_map_to_lanes() {
        let lane = |s: &str| Lane::from_note_name(s).map(Lane::index);
        assert_eq!(lane("C4"), Some(0));
        assert_eq!(lane("D#5"), Some(0));
        assert_eq!(lane("E4"), Some(1));
        assert_eq!(lane("F2"), Some(1));
        assert_eq!(lane("G3"), Some(2));
        assert_eq!(lane("A4"), Some(2));
        assert_eq!(lane("B1"), Some(3));
    }

    #[test]
    fn unknown_note_names_are_unmapped() {
        assert_eq!(Lane::from_note_name("H4"), None);
        assert_eq!(Lane::from_note_name("c4"), None);
        assert_eq!(Lane::from_note_name("4C"), None);
        assert_eq!(Lane::from_note_name(""), None);
    }

    #[test]
    fn lane_bounds_and_glyphs() {
        assert!(Lane::new(3).is_some());
        assert!(Lane::new(4).is_none());
        let glyphs: String = Lane::all().map(Lane::glyph).collect();
        assert_eq!(glyphs, "1234");
    }

    #[test]
    fn input_chars() {
        assert_eq!(InputSignal::from_char('0'), Some(InputSignal::Lane(0)));
        assert_eq!(InputSignal::from_char('4'), Some(InputSignal::Lane(4)));
        assert_eq!(InputSignal::from_char('5'), None);
        assert_eq!(InputSignal::from_char('q'), None);
        assert_eq!(InputSignal::from_char(INTERRUPT_CHAR), Some(InputSignal::Quit));
    }

    #[test]
    fn press_four_matches_no_lane() {
        assert!(Lane::all().all(|lane| !lane.matches_press(4)));
        assert!(Lane::new(0).unwrap().matches_press(0));
    }
}
