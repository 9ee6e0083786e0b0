//! Ingestion pipeline for game-progress webhook payloads.
//!
//! A game-progress response is a JSON document carrying a rich-presence
//! script and a list of achievement events, each pairing a trigger id with
//! its condition macro. [`parse_game_progress`] parses one such document and
//! registers everything it describes with an [`AchievementRuntime`].
//!
//! Fetching the document is the caller's problem; this crate starts from
//! JSON text already resident in memory and runs synchronously to
//! completion. All-or-nothing semantics apply: a single malformed event
//! invalidates the entire response.

#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate log;

pub mod progress;
mod runtime;

pub use progress::{parse_game_progress, GameEvent, GameProgressResponse, ProgressError};
pub use runtime::{AchievementRuntime, RuntimeError};
