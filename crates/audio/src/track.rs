//! Backing track playback through rodio.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, PlayError, Sink, StreamError};
use thiserror::Error;

use crate::core::PlaybackClock;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio output device")]
    Device(#[from] StreamError),

    #[error("failed to create audio sink")]
    Sink(#[from] PlayError),

    #[error("failed to open track: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode track: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },
}

/// A decoded track on the default output device, played once.
///
/// The clock epoch is the moment the track was opened.
pub struct BackingTrack {
    // Dropping the stream stops all output.
    _stream: OutputStream,
    sink: Sink,
    epoch: Instant,
}

impl BackingTrack {
    /// Open the output device and queue the track, paused.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;

        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        sink.pause();
        sink.append(source);
        log::info!("loaded track {}", path.display());

        Ok(Self {
            _stream: stream,
            sink,
            epoch: Instant::now(),
        })
    }

    pub fn play(&self) {
        self.sink.play();
    }
}

impl PlaybackClock for BackingTrack {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn is_playing(&self) -> bool {
        !self.sink.empty()
    }

    fn wait(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
