//! Rendering of game frames into the terminal framebuffer.

use tui_rhythm::core::{FrameView, GameState, LaneGrid, NoteChart};
use tui_rhythm::term::{lane_color, GameView, Viewport, VIEW_HEIGHT};
use tui_rhythm::types::Lane;

fn frame_for(state: &GameState, elapsed: f64, pressed: Option<u8>) -> FrameView<'_> {
    FrameView {
        grid: LaneGrid::project(state.chart(), elapsed),
        elapsed,
        score: state.score(),
        combo: state.combo(),
        pressed,
        last_judgement: state.last_judgement(),
    }
}

#[test]
fn status_line_shows_time_score_and_combo() {
    let (chart, _) = NoteChart::parse("1.0 C4\n2.0 E4\n");
    let mut state = GameState::new(chart);
    state.judge_frame(1.05, Some(0));

    let fb = GameView::default().render(&frame_for(&state, 1.05, Some(0)));
    let text = fb.text();
    assert!(text.contains("Time: 1.05 s | Score: 10 | Combo: x2"));
    assert!(text.contains("HIT C4"));
    assert!(text.contains("key 0"));
}

#[test]
fn miss_is_reported() {
    let (chart, _) = NoteChart::parse("1.0 C4\n");
    let mut state = GameState::new(chart);
    state.judge_frame(1.21, None);

    let fb = GameView::default().render(&frame_for(&state, 1.21, None));
    assert!(fb.text().contains("MISS C4"));
}

#[test]
fn view_is_centered_in_large_viewports() {
    let (chart, _) = NoteChart::parse("");
    let state = GameState::new(chart);
    let view = GameView::default();
    let fb = view.render(&frame_for(&state, 0.0, None));

    // The canvas never grows with the terminal; only its origin moves.
    assert_eq!((fb.width(), fb.height()), (view.view_width(), VIEW_HEIGHT));
    let vp = Viewport::new(view.view_width() + 10, VIEW_HEIGHT + 4);
    assert_eq!(view.origin(vp), (5, 2));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
}

#[test]
fn notes_scroll_towards_the_hit_zone() {
    let (chart, _) = NoteChart::parse("3.0 G4\n");
    let state = GameState::new(chart);
    let view = GameView::default();
    let col = view.lane_column(2);

    let row_of_note = |elapsed: f64| {
        let fb = view.render(&frame_for(&state, elapsed, None));
        (2..2 + 20u16).find(|&y| fb.get(col, y).map(|c| c.ch) == Some('3'))
    };

    let far = row_of_note(0.0).unwrap();
    let near = row_of_note(2.5).unwrap();
    assert!(near > far);
    assert_eq!(near, 2 + 17);
    assert_eq!(row_of_note(3.5), None);
}

#[test]
fn rendering_is_repeatable() {
    let (chart, _) = NoteChart::parse("1.0 C4\n1.5 E4\n2.0 G4\n2.5 B4\n");
    let state = GameState::new(chart);
    let view = GameView::default();

    let a = view.render(&frame_for(&state, 0.8, None));
    let b = view.render(&frame_for(&state, 0.8, None));
    assert_eq!(a, b);

    // B4 is 1.7s out: row 19 - floor(1.7 / 4 * 20) = 11, drawn in blue.
    let cell = a.get(view.lane_column(3), 2 + 11).unwrap();
    assert_eq!(cell.ch, '4');
    assert_eq!(cell.style.fg, lane_color(Lane::new(3).unwrap()));
}
