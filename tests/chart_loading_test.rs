//! Chart loading from real files.

use std::io::Write;

use tempfile::NamedTempFile;
use tui_rhythm::core::{ChartError, NoteChart};
use tui_rhythm::types::MAX_NOTES;

fn chart_file(text: &str) -> NamedTempFile {
    chart_bytes(text.as_bytes())
}

fn chart_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_lanes_from_file() {
    let file = chart_file("1.0 C4\n2.0 E4\n3.0 G4\n4.0 B4\n5.0 D5\n6.0 A3\n");
    let (chart, report) = NoteChart::load(file.path()).unwrap();

    let lanes: Vec<usize> = chart.notes().iter().map(|n| n.lane.index()).collect();
    assert_eq!(lanes, vec![0, 1, 2, 3, 0, 2]);
    assert_eq!(report.loaded, 6);
    assert_eq!(report.unmapped, 0);
}

#[test]
fn every_stored_lane_is_valid() {
    let file = chart_file("0.5 C4 0.6 H2 0.7 Bb3 0.8 x1 0.9 F#4 1.0 ?? 1.1 Ab2");
    let (chart, report) = NoteChart::load(file.path()).unwrap();

    assert!(chart.notes().iter().all(|n| n.lane.index() < 4));
    assert!(chart
        .notes()
        .iter()
        .all(|n| "CDEFGAB".contains(n.name.chars().next().unwrap())));
    assert_eq!(report.loaded, 4);
    assert_eq!(report.unmapped, 3);
}

#[test]
fn capacity_is_observable() {
    let mut text = String::new();
    for i in 0..(MAX_NOTES + 25) {
        text.push_str(&format!("{:.2} E4\n", i as f32 * 0.1));
    }
    let file = chart_file(&text);
    let (chart, report) = NoteChart::load(file.path()).unwrap();

    assert_eq!(chart.len(), MAX_NOTES);
    assert_eq!(report.loaded, MAX_NOTES);
    assert_eq!(report.over_capacity, 25);
}

#[test]
fn truncated_file_keeps_what_was_read() {
    let file = chart_file("1.0 C4\n2.0 D4\n3.0");
    let (chart, _) = NoteChart::load(file.path()).unwrap();
    assert_eq!(chart.len(), 2);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = NoteChart::load(dir.path().join("notes.txt")).unwrap_err();
    match err {
        ChartError::Open { path, .. } => assert!(path.ends_with("notes.txt")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn latin1_label_ends_the_chart_without_failing() {
    let file = chart_bytes(b"1.0 C4\n2.0 E4\n3.0 G\xe94\n4.0 B4\n");
    let (chart, report) = NoteChart::load(file.path()).unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(chart.last_timestamp(), Some(2.0));
}

#[test]
fn nan_timestamp_cannot_stall_the_level_end() {
    let file = chart_file("1.0 C4\n2.0 E4\nnan G4\n");
    let (chart, _) = NoteChart::load(file.path()).unwrap();
    let end = tui_rhythm::core::level_end_secs(&chart);
    assert!(end.is_finite());
    assert!((end - 4.0).abs() < 1e-9);
}
