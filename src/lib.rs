//! Terminal rhythm game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_rhythm::{types, core, input, term, audio}` and hosts
//! the `tui-rhythm` binary.

pub use tui_rhythm_audio as audio;
pub use tui_rhythm_core as core;
pub use tui_rhythm_input as input;
pub use tui_rhythm_term as term;
pub use tui_rhythm_types as types;
