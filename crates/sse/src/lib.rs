pub mod error;
pub mod event;
pub mod parser;

pub use error::SseError;
pub use event::{DONE_MARKER, EventCollector, EventListener, ServerSentEvent};
pub use parser::{StreamEnd, collect_events, parse, parse_async};
