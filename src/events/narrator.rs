//! Narration sinks.
//!
//! A `Narrator` observes events; it never influences the game.

use super::event::GameEvent;

/// Receives every event a game produces, in order.
pub trait Narrator {
    fn narrate(&mut self, event: GameEvent);
}

/// Emits events through `tracing` at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn narrate(&mut self, event: GameEvent) {
        tracing::info!(target: "monopoly", "{event}");
    }
}

/// Records events in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Rendered text of every event, one entry per event.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Drop recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Narrator for EventLog {
    fn narrate(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
