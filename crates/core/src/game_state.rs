//! Game state module - the scoring engine
//!
//! Owns the chart and drives every note through `Pending -> Hit | Missed`
//! once per frame. All mutation happens inside [`GameState::judge_frame`].

use crate::chart::NoteChart;
use crate::scoring::{calculate_hit_points, hit_window_closed, in_hit_window, level_end_secs};
use crate::types::{Judgement, JudgementKind};

/// What one scoring pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Chart index of the note hit this frame, if any.
    pub hit: Option<usize>,
    /// Number of notes whose window closed this frame.
    pub misses: usize,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    chart: NoteChart,
    score: u32,
    combo: u32,
    max_combo: u32,
    hits: u32,
    misses: u32,
    last_judgement: Option<Judgement>,
    level_end_secs: f64,
}

impl GameState {
    pub fn new(chart: NoteChart) -> Self {
        let level_end_secs = level_end_secs(&chart);
        let mut state = Self {
            chart,
            score: 0,
            combo: 1,
            max_combo: 1,
            hits: 0,
            misses: 0,
            last_judgement: None,
            level_end_secs,
        };
        state.reset();
        state
    }

    /// Back to a fresh game on the same chart.
    pub fn reset(&mut self) {
        self.chart.reset();
        self.score = 0;
        self.combo = 1;
        self.max_combo = 1;
        self.hits = 0;
        self.misses = 0;
        self.last_judgement = None;
    }

    pub fn chart(&self) -> &NoteChart {
        &self.chart
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn last_judgement(&self) -> Option<&Judgement> {
        self.last_judgement.as_ref()
    }

    /// Elapsed time after which the level is over.
    pub fn level_end_secs(&self) -> f64 {
        self.level_end_secs
    }

    pub fn level_ended(&self, elapsed: f64) -> bool {
        elapsed > self.level_end_secs
    }

    /// Run one scoring pass.
    ///
    /// Notes are visited in chart order. For each pending note the hit check
    /// runs before the miss check; the first hit ends the pass, so a press
    /// is consumed by at most one note and later overdue notes wait for the
    /// next frame.
    pub fn judge_frame(&mut self, elapsed: f64, pressed: Option<u8>) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        for index in 0..self.chart.len() {
            let note = &self.chart.notes()[index];
            if note.processed() {
                continue;
            }
            let (timestamp, lane) = (note.timestamp, note.lane);

            let pressed_lane = pressed.is_some_and(|p| lane.matches_press(p));
            if pressed_lane && in_hit_window(elapsed, timestamp) {
                self.apply_hit(index);
                outcome.hit = Some(index);
                break;
            }

            if hit_window_closed(elapsed, timestamp) {
                self.apply_miss(index);
                outcome.misses += 1;
            }
        }

        outcome
    }

    fn apply_hit(&mut self, index: usize) {
        self.score = self.score.saturating_add(calculate_hit_points(self.combo));
        self.combo = self.combo.saturating_add(1);
        self.max_combo = self.max_combo.max(self.combo);
        self.hits += 1;
        self.judge(index, JudgementKind::Hit);
    }

    fn apply_miss(&mut self, index: usize) {
        self.combo = 1;
        self.misses += 1;
        self.judge(index, JudgementKind::Miss);
    }

    fn judge(&mut self, index: usize, kind: JudgementKind) {
        let note = &mut self.chart.notes_mut()[index];
        note.mark_processed();
        log::debug!(
            "{} note #{} {} at {:.2}s",
            kind.as_str(),
            index,
            note.name,
            note.timestamp
        );
        self.last_judgement = Some(Judgement {
            kind,
            note_name: note.name.clone(),
            lane: note.lane,
        });
    }
}
