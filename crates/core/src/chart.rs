//! Note chart - the immutable timeline of notes for one level.
//!
//! Charts are plain text: whitespace-separated `<seconds> <note-name>` pairs.
//!
//! ```text
//! 1.00 C4
//! 1.50 E4
//! 2.25 B3
//! ```
//!
//! Line breaks are not significant. Loading stops at the first malformed
//! timestamp or a timestamp without a label.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Lane, MAX_NOTES, NOTE_NAME_MAX};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to open chart file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read chart: {0}")]
    Read(#[from] io::Error),
}

/// One note of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    pub timestamp: f32,
    pub lane: Lane,
    pub name: String,
    processed: bool,
}

impl NoteEvent {
    pub fn new(timestamp: f32, lane: Lane, name: &str) -> Self {
        Self {
            timestamp,
            lane,
            name: name.chars().take(NOTE_NAME_MAX).collect(),
            processed: false,
        }
    }

    pub fn processed(&self) -> bool {
        self.processed
    }

    /// Mark the note as judged. Only the scoring pass calls this.
    pub(crate) fn mark_processed(&mut self) {
        self.processed = true;
    }
}

/// What happened while loading a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Notes stored in the chart.
    pub loaded: usize,
    /// Records whose label maps to no lane.
    pub unmapped: usize,
    /// Valid records dropped because the chart was full.
    pub over_capacity: usize,
}

/// Ordered notes of one level.
///
/// Notes keep the source order; positions never change after loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteChart {
    notes: Vec<NoteEvent>,
}

impl NoteChart {
    /// Load a chart file.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, LoadReport), ChartError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| ChartError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let (chart, report) = Self::from_reader(file)?;
        log::info!(
            "loaded {} notes from {} ({} unmapped, {} over capacity)",
            report.loaded,
            path.display(),
            report.unmapped,
            report.over_capacity
        );
        Ok((chart, report))
    }

    /// Read a chart from any byte source.
    ///
    /// Only I/O failures are errors. Bytes that are not valid UTF-8 end the
    /// chart like any other malformed token.
    pub fn from_reader(mut reader: impl Read) -> Result<(Self, LoadReport), ChartError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::parse_bytes(&bytes, MAX_NOTES))
    }

    /// Parse chart text. Never fails: bad input just ends the chart early.
    pub fn parse(text: &str) -> (Self, LoadReport) {
        Self::parse_with_capacity(text, MAX_NOTES)
    }

    pub fn parse_with_capacity(text: &str, capacity: usize) -> (Self, LoadReport) {
        Self::parse_bytes(text.as_bytes(), capacity)
    }

    fn parse_bytes(bytes: &[u8], capacity: usize) -> (Self, LoadReport) {
        let mut notes = Vec::new();
        let mut report = LoadReport::default();
        let mut tokens = bytes
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| std::str::from_utf8(token).ok());

        while let Some(ts_token) = tokens.next() {
            let Some(timestamp) = ts_token.and_then(parse_timestamp) else {
                break;
            };
            let Some(Some(name)) = tokens.next() else {
                break;
            };
            let Some(lane) = Lane::from_note_name(name) else {
                report.unmapped += 1;
                continue;
            };
            if notes.len() >= capacity {
                report.over_capacity += 1;
                continue;
            }
            notes.push(NoteEvent::new(timestamp, lane, name));
        }

        report.loaded = notes.len();
        (Self { notes }, report)
    }

    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    pub(crate) fn notes_mut(&mut self) -> &mut [NoteEvent] {
        &mut self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Timestamp of the last note in chart order.
    pub fn last_timestamp(&self) -> Option<f32> {
        self.notes.last().map(|n| n.timestamp)
    }

    /// Notes not judged yet, with their chart index.
    pub fn pending(&self) -> impl Iterator<Item = (usize, &NoteEvent)> {
        self.notes.iter().enumerate().filter(|(_, n)| !n.processed)
    }

    /// Clear every `processed` flag.
    pub fn reset(&mut self) {
        for note in &mut self.notes {
            note.processed = false;
        }
    }
}

/// `nan` and `inf` parse as floats but can never be reached by the clock.
fn parse_timestamp(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|t| t.is_finite())
}
