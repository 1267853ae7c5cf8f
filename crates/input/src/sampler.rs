//! Non-blocking keyboard sampler backed by crossterm.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::InputSampler;
use crate::map::handle_key_event;
use crate::types::InputSignal;

/// Reads at most one key press per poll; anything still queued waits for the
/// next frame.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSampler for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputSignal>> {
        while event::poll(Duration::ZERO)? {
            // Resize/focus events and key releases are drained without
            // counting as this frame's character.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(handle_key_event(key));
                }
            }
        }
        Ok(None)
    }
}
