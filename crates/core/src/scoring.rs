//! Scoring module - hit windows, points and the level-end threshold
//!
//! Rules:
//! - A press hits a note when it selects the note's lane and elapsed time lies
//!   strictly inside `(timestamp - 0.2, timestamp + 0.2)`.
//! - A note misses once elapsed time passes `timestamp + 0.2` unjudged.
//! - A hit is worth `10 * combo`, measured before the combo increments.

use crate::chart::NoteChart;
use crate::types::{EMPTY_CHART_END_SECS, HIT_POINTS, HIT_WINDOW_SECS, LEVEL_END_MARGIN_SECS};

/// Points for a hit at the given combo.
pub fn calculate_hit_points(combo: u32) -> u32 {
    HIT_POINTS.saturating_mul(combo)
}

/// Whether `elapsed` lies inside the open hit window of a note.
pub fn in_hit_window(elapsed: f64, timestamp: f32) -> bool {
    let t = timestamp as f64;
    elapsed > t - HIT_WINDOW_SECS && elapsed < t + HIT_WINDOW_SECS
}

/// Whether the hit window of a note has closed.
pub fn hit_window_closed(elapsed: f64, timestamp: f32) -> bool {
    elapsed > timestamp as f64 + HIT_WINDOW_SECS
}

/// Elapsed time after which the level is over.
///
/// Last note (in chart order) plus the margin, or a fixed length for an empty chart.
pub fn level_end_secs(chart: &NoteChart) -> f64 {
    match chart.last_timestamp() {
        Some(last) => last as f64 + LEVEL_END_MARGIN_SECS,
        None => EMPTY_CHART_END_SECS,
    }
}
