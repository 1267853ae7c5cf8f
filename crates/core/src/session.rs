//! Game loop - drives clock, input, scoring and rendering at a fixed frame rate.
//!
//! The loop only talks to its collaborators through three small traits, so the
//! audio device, the terminal and the keyboard can all be replaced by fakes.

use anyhow::Result;

use crate::game_state::GameState;
use crate::lanes::LaneGrid;
use crate::types::{EndReason, InputSignal, Judgement, DEFAULT_LEAD_IN_MS, FRAME_MS};

/// Time source tied to the backing track.
pub trait PlaybackClock {
    /// Milliseconds since an arbitrary, fixed epoch.
    fn now_ms(&self) -> u64;

    /// Whether the backing track is still playing.
    fn is_playing(&self) -> bool;

    /// Block for `ms` milliseconds.
    fn wait(&mut self, ms: u64);
}

/// Non-blocking keyboard sampler.
pub trait InputSampler {
    /// Return at most one pending signal. Must never block.
    fn poll(&mut self) -> Result<Option<InputSignal>>;
}

/// Receives one finished frame.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameView<'_>) -> Result<()>;
}

/// Everything the display needs for one frame.
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub grid: LaneGrid,
    pub elapsed: f64,
    pub score: u32,
    pub combo: u32,
    /// Lane key pressed this frame.
    pub pressed: Option<u8>,
    pub last_judgement: Option<&'a Judgement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub frame_ms: u64,
    pub lead_in_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            lead_in_ms: DEFAULT_LEAD_IN_MS,
        }
    }
}

impl SessionConfig {
    pub fn with_fps(fps: u32) -> Self {
        Self {
            frame_ms: 1000 / fps.max(1) as u64,
            ..Self::default()
        }
    }

    pub fn lead_in_ms(mut self, lead_in_ms: u64) -> Self {
        self.lead_in_ms = lead_in_ms;
        self
    }
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub max_combo: u32,
    pub hits: u32,
    pub misses: u32,
    /// Elapsed time of the last frame that ran.
    pub elapsed: f64,
    pub reason: EndReason,
}

/// One play-through of a chart.
pub struct Session {
    state: GameState,
    config: SessionConfig,
}

impl Session {
    pub fn new(state: GameState, config: SessionConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run frames until the player quits, the level ends or the track stops.
    ///
    /// The playback epoch is read from `clock` on entry; the lead-in counts
    /// towards elapsed time.
    pub fn run<C, I, S>(&mut self, clock: &mut C, input: &mut I, sink: &mut S) -> Result<SessionSummary>
    where
        C: PlaybackClock + ?Sized,
        I: InputSampler + ?Sized,
        S: FrameSink + ?Sized,
    {
        let start_ms = clock.now_ms();
        if self.config.lead_in_ms > 0 {
            clock.wait(self.config.lead_in_ms);
        }

        let mut elapsed = 0.0;
        let reason = loop {
            if !clock.is_playing() {
                break EndReason::TrackEnded;
            }

            let frame_start = clock.now_ms();
            elapsed = frame_start.saturating_sub(start_ms) as f64 / 1000.0;

            let pressed = match input.poll()? {
                Some(InputSignal::Quit) => break EndReason::Quit,
                Some(InputSignal::Lane(lane)) => Some(lane),
                None => None,
            };

            self.state.judge_frame(elapsed, pressed);
            let level_ended = self.state.level_ended(elapsed);

            let frame = FrameView {
                grid: LaneGrid::project(self.state.chart(), elapsed),
                elapsed,
                score: self.state.score(),
                combo: self.state.combo(),
                pressed,
                last_judgement: self.state.last_judgement(),
            };
            sink.present(&frame)?;

            if level_ended {
                break EndReason::LevelEnd;
            }

            let spent = clock.now_ms().saturating_sub(frame_start);
            if spent < self.config.frame_ms {
                clock.wait(self.config.frame_ms - spent);
            }
        };

        log::info!(
            "session ended ({}) at {:.2}s: score {}, {} hits, {} misses",
            reason.as_str(),
            elapsed,
            self.state.score(),
            self.state.hits(),
            self.state.misses()
        );

        Ok(SessionSummary {
            score: self.state.score(),
            max_combo: self.state.max_combo(),
            hits: self.state.hits(),
            misses: self.state.misses(),
            elapsed,
            reason,
        })
    }
}
