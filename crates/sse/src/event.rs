use crate::error::SseError;
use serde::Serialize;

/// Payload sent by the server when the stream has no more events.
pub const DONE_MARKER: &str = "[DONE]";

/// One completed event block. Lines of a multi-line block are joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSentEvent {
    pub data: String,
}

impl ServerSentEvent {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Receives parser callbacks in stream order.
pub trait EventListener {
    fn on_event(&mut self, event: &ServerSentEvent);

    /// Called once before the parser returns a read failure.
    fn on_error(&mut self, _error: &SseError) {}

    /// Called when the stream ends, either on a [`DONE_MARKER`] event or at
    /// end of input.
    fn on_close(&mut self) {}
}

/// Listener that keeps every event it receives.
#[derive(Debug, Default)]
pub struct EventCollector {
    pub events: Vec<ServerSentEvent>,
    pub closed: bool,
}

impl EventListener for EventCollector {
    fn on_event(&mut self, event: &ServerSentEvent) {
        self.events.push(event.clone());
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}
