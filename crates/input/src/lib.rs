//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputSignal`] and provides
//! a zero-timeout [`TerminalInput`] sampler for the game loop. Raw mode itself
//! is owned by the terminal session in `tui-rhythm-term`.

pub mod map;
pub mod sampler;

pub use tui_rhythm_core as core;
pub use tui_rhythm_types as types;

pub use map::{handle_key_event, key_char};
pub use sampler::TerminalInput;
