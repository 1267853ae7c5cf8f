//! Wall clock for playing without audio.

use std::thread;
use std::time::{Duration, Instant};

use crate::core::PlaybackClock;

/// Monotonic clock that is always "playing".
///
/// The game loop stops on its own level-end condition.
#[derive(Debug, Clone)]
pub struct WallClock {
    epoch: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl PlaybackClock for WallClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn is_playing(&self) -> bool {
        true
    }

    fn wait(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_advances_time() {
        let mut clock = WallClock::new();
        let before = clock.now_ms();
        clock.wait(20);
        assert!(clock.now_ms() >= before + 20);
    }

    #[test]
    fn keeps_playing_after_waiting() {
        let mut clock = WallClock::new();
        assert!(clock.is_playing());
        clock.wait(15);
        assert!(clock.is_playing());
    }
}
