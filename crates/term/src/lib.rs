//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout toolkits and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Paint the view once, then only the cells that changed
//! - Own raw mode through a guard so every exit path restores the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod session;

pub use tui_rhythm_core as core;
pub use tui_rhythm_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{lane_color, GameView, Viewport, VIEW_HEIGHT};
pub use renderer::TerminalRenderer;
pub use session::TerminalSession;
