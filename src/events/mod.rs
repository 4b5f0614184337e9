//! Narration of game events.
//!
//! - `event`: the `GameEvent` vocabulary and its human-readable rendering
//! - `narrator`: the `Narrator` sink trait, a `tracing` narrator and an
//!   in-memory log

pub mod event;
pub mod narrator;

pub use event::GameEvent;
pub use narrator::{EventLog, Narrator, TracingNarrator};
