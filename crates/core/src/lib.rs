//! Core game logic module - deterministic and testable
//!
//! This crate contains the rules of the rhythm game: the note chart, the
//! scoring engine, the lane projection and the frame loop. It has **no
//! dependencies** on audio, terminals or keyboards; those are reached through
//! the [`PlaybackClock`], [`InputSampler`] and [`FrameSink`] traits.
//!
//! # Module Structure
//!
//! - [`chart`]: chart text format, loading, capacity limit
//! - [`scoring`]: hit window, miss detection, points, level-end threshold
//! - [`game_state`]: per-frame judgement of pending notes, score and combo
//! - [`lanes`]: projection of upcoming notes onto the 20 x 4 track
//! - [`session`]: the fixed-rate game loop and its collaborator traits
//!
//! # Game Rules
//!
//! - **Lanes**: note names map by first letter: C/D, E/F, G/A, B
//! - **Hit window**: ±0.2s around the note time, exclusive
//! - **Scoring**: a hit adds `10 * combo`, then the combo grows by one
//! - **Miss**: a note left unpressed past its window resets the combo to 1
//! - **Level end**: 2s after the last note (5s for an empty chart)
//!
//! # Example
//!
//! ```
//! use tui_rhythm_core::{GameState, LaneGrid, NoteChart};
//!
//! let (chart, report) = NoteChart::parse("1.0 C4\n2.0 E4\n");
//! assert_eq!(report.loaded, 2);
//!
//! let mut game = GameState::new(chart);
//! game.judge_frame(1.05, Some(0));
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.combo(), 2);
//!
//! // The remaining note is 0.95s away: row 19 - floor(0.95 / 4 * 20) = 15.
//! let grid = LaneGrid::project(game.chart(), 1.05);
//! assert_eq!(grid.get(15, 1), Some('2'));
//! ```

pub mod chart;
pub mod game_state;
pub mod lanes;
pub mod scoring;
pub mod session;

pub use tui_rhythm_types as types;

// Re-export commonly used types for convenience
pub use chart::{ChartError, LoadReport, NoteChart, NoteEvent};
pub use game_state::{FrameOutcome, GameState};
pub use lanes::LaneGrid;
pub use scoring::{calculate_hit_points, level_end_secs};
pub use session::{
    FrameSink, FrameView, InputSampler, PlaybackClock, Session, SessionConfig, SessionSummary,
};
