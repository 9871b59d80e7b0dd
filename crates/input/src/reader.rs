//! Non-blocking, one-key-per-frame input reader.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::FrogAction;

/// Source of terminal events.
pub trait EventSource {
    /// Whether an event is ready within `timeout`.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;
    fn read(&mut self) -> Result<Event>;
}

/// Events from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Samples at most one pending event per call and never waits for input.
#[derive(Debug, Default)]
pub struct InputReader<E: EventSource = TerminalEvents> {
    events: E,
}

impl InputReader {
    pub fn new() -> Self {
        Self::with_source(TerminalEvents)
    }
}

impl<E: EventSource> InputReader<E> {
    pub fn with_source(events: E) -> Self {
        Self { events }
    }

    /// Read one pending event, if any, and map it to a command.
    ///
    /// Repeats, releases, non-key events and unmapped keys all yield `None`.
    pub fn poll_action(&mut self) -> Result<Option<FrogAction>> {
        if !self.events.poll(Duration::ZERO)? {
            return Ok(None);
        }

        match self.events.read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
