//! Line-oriented parsing of `text/event-stream` bodies.
//!
//! Blocks are separated by blank lines. A leading `data:` is stripped from
//! each line; lines without it (for example a bare JSON error body) are taken
//! verbatim. Every line is trimmed, and the lines of a block are joined with
//! `\n`. A block whose payload is [`DONE_MARKER`] ends the stream.
//!
//! Lines are decoded lossily: invalid UTF-8 becomes U+FFFD and parsing
//! carries on.

use crate::{
    error::SseError,
    event::{DONE_MARKER, EventCollector, EventListener, ServerSentEvent},
};
use std::{borrow::Cow, io::BufRead, ops::ControlFlow};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, trace};

const DATA_PREFIX: &str = "data:";

/// How a successfully parsed stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The server sent the end-of-stream marker.
    Done,
    /// Input ran out without an end-of-stream marker.
    Eof,
}

#[derive(Debug, Default)]
struct BlockBuffer {
    data: String,
}

impl BlockBuffer {
    /// Feeds one line (without its terminator). Returns the finished block
    /// when `line` is blank and something has been accumulated.
    fn push_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.take();
        }

        let content = line.strip_prefix(DATA_PREFIX).unwrap_or(line);
        if !self.data.is_empty() {
            self.data.push('\n');
        }
        self.data.push_str(content.trim());
        None
    }

    fn take(&mut self) -> Option<String> {
        if self.data.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.data))
        }
    }
}

/// Parses a blocking reader, pushing events into `listener`.
pub fn parse<R, L>(mut reader: R, listener: &mut L) -> Result<StreamEnd, SseError>
where
    R: BufRead,
    L: EventListener + ?Sized,
{
    let mut block = BlockBuffer::default();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .map_err(|err| fail(err.into(), listener))?;
        if read == 0 {
            break;
        }

        if let Some(data) = block.push_line(&decode_line(&raw))
            && let ControlFlow::Break(end) = deliver(data, listener)
        {
            return Ok(end);
        }
    }

    finish(block, listener)
}

/// Asynchronous counterpart of [`parse`].
pub async fn parse_async<R, L>(mut reader: R, listener: &mut L) -> Result<StreamEnd, SseError>
where
    R: AsyncBufRead + Unpin,
    L: EventListener + ?Sized,
{
    let mut block = BlockBuffer::default();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .await
            .map_err(|err| fail(err.into(), listener))?;
        if read == 0 {
            break;
        }

        if let Some(data) = block.push_line(&decode_line(&raw))
            && let ControlFlow::Break(end) = deliver(data, listener)
        {
            return Ok(end);
        }
    }

    finish(block, listener)
}

/// Parses the whole stream and returns its events, excluding the
/// end-of-stream marker.
pub fn collect_events<R: BufRead>(reader: R) -> Result<Vec<ServerSentEvent>, SseError> {
    let mut collector = EventCollector::default();
    parse(reader, &mut collector)?;
    Ok(collector.events)
}

/// Drops the `\n` or `\r\n` terminator and decodes the rest.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

fn deliver<L>(data: String, listener: &mut L) -> ControlFlow<StreamEnd>
where
    L: EventListener + ?Sized,
{
    if data == DONE_MARKER {
        debug!("Received end-of-stream marker");
        listener.on_close();
        return ControlFlow::Break(StreamEnd::Done);
    }

    trace!(bytes = data.len(), "Dispatching event");
    listener.on_event(&ServerSentEvent { data });
    ControlFlow::Continue(())
}

fn finish<L>(mut block: BlockBuffer, listener: &mut L) -> Result<StreamEnd, SseError>
where
    L: EventListener + ?Sized,
{
    if let Some(data) = block.take()
        && let ControlFlow::Break(end) = deliver(data, listener)
    {
        return Ok(end);
    }

    listener.on_close();
    Ok(StreamEnd::Eof)
}

fn fail<L>(err: SseError, listener: &mut L) -> SseError
where
    L: EventListener + ?Sized,
{
    debug!(error = %err, "Event stream failed");
    listener.on_error(&err);
    err
}
