//! Terminal rhythm game runner (default binary).
//!
//! Loads a chart, starts the backing track and runs the game loop with
//! crossterm input and the framebuffer-based lane view.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tui_rhythm::audio::{BackingTrack, WallClock};
use tui_rhythm::core::{GameState, NoteChart, PlaybackClock, Session, SessionConfig, SessionSummary};
use tui_rhythm::input::TerminalInput;
use tui_rhythm::term::{GameView, TerminalSession};
use tui_rhythm::types::{EndReason, DEFAULT_LEAD_IN_MS, TARGET_FPS};

#[derive(Parser, Debug)]
#[command(name = "tui-rhythm", about = "Hit the notes as they reach the bottom of their lane")]
struct Args {
    /// Chart file: whitespace-separated `<seconds> <note>` pairs
    #[arg(env = "RHYTHM_CHART", default_value = "notes.txt")]
    chart: PathBuf,

    /// Backing track to play
    #[arg(long, env = "RHYTHM_TRACK", default_value = "music.mp3")]
    track: PathBuf,

    /// Target frames per second
    #[arg(long, env = "RHYTHM_FPS", default_value_t = TARGET_FPS)]
    fps: u32,

    /// Pause between starting the track and the first frame
    #[arg(long, env = "RHYTHM_LEAD_IN_MS", default_value_t = DEFAULT_LEAD_IN_MS)]
    lead_in_ms: u64,

    /// Play without audio, timed by the wall clock
    #[arg(long, env = "RHYTHM_MUTE")]
    mute: bool,

    /// Log file (the terminal is busy drawing the game)
    #[arg(long, env = "RHYTHM_LOG", default_value = "tui-rhythm.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file);
    log::info!("tui-rhythm starting: {:?}", args);

    let (chart, report) = NoteChart::load(&args.chart)
        .with_context(|| format!("could not load level {}", args.chart.display()))?;
    println!("{} notes loaded and mapped onto lanes.", report.loaded);

    let config = SessionConfig::with_fps(args.fps).lead_in_ms(args.lead_in_ms);
    let mut session = Session::new(GameState::new(chart), config);

    let summary = if args.mute {
        play(&mut session, &mut WallClock::new(), |_| {})?
    } else {
        let mut track = BackingTrack::open(&args.track)
            .with_context(|| format!("could not start audio for {}", args.track.display()))?;
        play(&mut session, &mut track, |track| track.play())?
    };

    match summary.reason {
        EndReason::Quit => println!("Ctrl+C pressed. Quitting..."),
        EndReason::LevelEnd => println!("Level complete!"),
        EndReason::TrackEnded => println!("The track has ended!"),
    }
    println!(
        "Final score: {} | Hits: {} | Misses: {} | Best combo: x{}",
        summary.score, summary.hits, summary.misses, summary.max_combo
    );
    Ok(())
}

/// Run the session inside a raw-mode terminal; `start` kicks off playback.
fn play<C: PlaybackClock>(
    session: &mut Session,
    clock: &mut C,
    start: impl FnOnce(&mut C),
) -> Result<SessionSummary> {
    let mut term = TerminalSession::enter(GameView::default())?;
    let mut input = TerminalInput::new();

    start(clock);
    let result = session.run(clock, &mut input, &mut term);

    // Restore the terminal before reporting anything.
    let closed = term.close();
    let summary = result?;
    closed?;
    Ok(summary)
}

fn init_logging(path: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
