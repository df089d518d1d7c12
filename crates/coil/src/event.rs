//! Event source abstraction over the external YAML tokenizer.
//!
//! The interpreter never touches tokenizer types directly; it pulls
//! owned [`Event`]s from an [`EventSource`]. `LiveEvents` is the
//! production implementation backed by saphyr's pull parser, and tests
//! substitute a pre-recorded stream.

use saphyr_parser::{Event as YamlEvent, Parser, ScanError, Span};

use crate::error::{Error, Result};

/// One parse event, owned and stripped of tokenizer detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    /// A scalar value, as raw text.
    Scalar(String),
    /// An alias referring back to the given anchor id.
    Alias(usize),
    /// The tokenizer produced no event. Fatal when seen mid-stream.
    Nothing,
}

/// Pull interface for parse events.
///
/// `next_event` also reports the 1-based source line the event started
/// on, for diagnostics; sources without position information return 0.
pub trait EventSource {
    fn next_event(&mut self) -> Result<(Event, usize)>;
}

type TokenizerItem<'input> = std::result::Result<(YamlEvent<'input>, Span), ScanError>;

/// Event source backed by the saphyr pull parser over a string.
pub struct LiveEvents<'input> {
    events: Box<dyn Iterator<Item = TokenizerItem<'input>> + 'input>,
}

impl<'input> LiveEvents<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            events: Box::new(Parser::new_from_str(input)),
        }
    }
}

impl EventSource for LiveEvents<'_> {
    fn next_event(&mut self) -> Result<(Event, usize)> {
        match self.events.next() {
            Some(Ok((event, span))) => Ok((convert(event), span.start.line())),
            Some(Err(err)) => Err(Error::Scan(err)),
            // Exhaustion before StreamEnd; the interpreter rejects it.
            None => Ok((Event::Nothing, 0)),
        }
    }
}

fn convert(event: YamlEvent<'_>) -> Event {
    match event {
        YamlEvent::StreamStart => Event::StreamStart,
        YamlEvent::StreamEnd => Event::StreamEnd,
        YamlEvent::DocumentStart { .. } => Event::DocumentStart,
        YamlEvent::DocumentEnd => Event::DocumentEnd,
        YamlEvent::SequenceStart(..) => Event::SequenceStart,
        YamlEvent::SequenceEnd => Event::SequenceEnd,
        YamlEvent::MappingStart(..) => Event::MappingStart,
        YamlEvent::MappingEnd => Event::MappingEnd,
        YamlEvent::Scalar(value, ..) => Event::Scalar(value.into_owned()),
        YamlEvent::Alias(anchor) => Event::Alias(anchor),
        YamlEvent::Nothing => Event::Nothing,
    }
}
