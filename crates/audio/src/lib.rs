//! Audio clocks for the game loop.
//!
//! The game only needs two things from audio: "is the track still playing"
//! and "how much time has passed". [`BackingTrack`] answers both from a rodio
//! sink; [`WallClock`] answers them without touching the audio device.

pub mod clock;
pub mod track;

pub use tui_rhythm_core as core;

pub use clock::WallClock;
pub use track::{AudioError, BackingTrack};
