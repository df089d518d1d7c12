//! The event interpreter: a small state machine that reconstructs the
//! two-level coil schema from a flat event stream.
//!
//! Keys are strict. The top level knows `current`, `freq` and the
//! `loops` label; inside the loop sequence only `radius`, `x_center`
//! and `y_center` are accepted. A key scalar is always immediately
//! followed by its value scalar, pulled from the source on the spot.

use crate::error::{Error, Result};
use crate::event::{Event, EventSource};
use crate::model::{Coil, Loop};

/// Interpreter state: whether we are inside the `loops` sequence, and
/// how many loop mappings have been observed so far (1-based index of
/// the entry currently being filled).
pub struct Interpreter {
    in_sequence: bool,
    observed: usize,
    capacity: usize,
}

impl Interpreter {
    pub fn new(capacity: usize) -> Self {
        Self {
            in_sequence: false,
            observed: 0,
            capacity,
        }
    }

    /// Consume events until the stream ends, populating `coil`.
    ///
    /// Returns the number of loop mappings observed in the document.
    /// That count may exceed `coil`'s capacity: surplus entries are
    /// still counted and key-validated, but their values are dropped
    /// and the stream is drained to its end so the tokenizer is never
    /// abandoned mid-document.
    pub fn run<S: EventSource>(&mut self, source: &mut S, coil: &mut Coil) -> Result<usize> {
        loop {
            let (event, line) = source.next_event()?;
            match event {
                Event::StreamEnd => break,
                Event::SequenceStart => self.in_sequence = true,
                Event::SequenceEnd => self.in_sequence = false,
                Event::MappingStart => {
                    if self.in_sequence {
                        self.observed += 1;
                        if self.observed <= self.capacity {
                            coil.loops.push(Loop::default());
                        }
                    }
                }
                Event::Scalar(key) => self.resolve_scalar(source, coil, key, line)?,
                Event::Alias(anchor) => {
                    return Err(Error::UnsupportedAlias { anchor, line });
                }
                Event::Nothing => {
                    return Err(Error::Protocol {
                        line,
                        message: "tokenizer yielded no event".to_string(),
                    });
                }
                Event::StreamStart
                | Event::DocumentStart
                | Event::DocumentEnd
                | Event::MappingEnd => {}
            }
        }
        Ok(self.observed)
    }

    /// First-level resolution of a key scalar. Order matters: the two
    /// top-level fields win even inside the sequence, then loop fields,
    /// then the structural `loops` label.
    fn resolve_scalar<S: EventSource>(
        &mut self,
        source: &mut S,
        coil: &mut Coil,
        key: String,
        line: usize,
    ) -> Result<()> {
        match key.as_str() {
            "current" => {
                let (value, vline) = expect_value(source, "current")?;
                coil.current = parse_u32("current", &value, vline)?;
            }
            "freq" => {
                let (value, vline) = expect_value(source, "freq")?;
                coil.frequency = parse_f64("freq", &value, vline)?;
            }
            _ if self.in_sequence => self.resolve_loop_field(source, coil, key, line)?,
            // The label introducing the sequence; structural, not data.
            "loops" => {}
            _ => return Err(Error::UnknownField { key, line }),
        }
        Ok(())
    }

    /// Second-level resolution of a per-loop field key.
    fn resolve_loop_field<S: EventSource>(
        &mut self,
        source: &mut S,
        coil: &mut Coil,
        key: String,
        line: usize,
    ) -> Result<()> {
        if !matches!(key.as_str(), "radius" | "x_center" | "y_center") {
            return Err(Error::UnknownField { key, line });
        }
        let (value, vline) = expect_value(source, &key)?;
        let value = parse_f64(&key, &value, vline)?;
        // Entries past capacity were never pushed; their values are
        // parsed for validation and then dropped.
        let slot = self.observed.checked_sub(1);
        if let Some(entry) = slot.and_then(|i| coil.loops.get_mut(i)) {
            match key.as_str() {
                "radius" => entry.radius = value,
                "x_center" => entry.x_center = value,
                _ => entry.y_center = value,
            }
        }
        Ok(())
    }
}

/// Pull the value scalar that must follow a key scalar.
fn expect_value<S: EventSource>(source: &mut S, key: &str) -> Result<(String, usize)> {
    match source.next_event()? {
        (Event::Scalar(value), line) => Ok((value, line)),
        (Event::Alias(anchor), line) => Err(Error::UnsupportedAlias { anchor, line }),
        (other, line) => Err(Error::Protocol {
            line,
            message: format!("expected a value for `{key}`, got {other:?}"),
        }),
    }
}

fn parse_u32(key: &str, value: &str, line: usize) -> Result<u32> {
    value.parse().map_err(|_| Error::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
        line,
    })
}

fn parse_f64(key: &str, value: &str, line: usize) -> Result<f64> {
    value.parse().map_err(|_| Error::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
        line,
    })
}
