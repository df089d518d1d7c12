#![doc = include_str!("../README.md")]

pub mod error;
pub mod event;
pub mod interpret;
pub mod model;
pub mod reconcile;

pub use crate::error::{Error, Result};
pub use crate::event::{Event, EventSource, LiveEvents};
pub use crate::interpret::Interpreter;
pub use crate::model::{Coil, Loop};
pub use crate::reconcile::{Reconciliation, reconcile};

use std::io::Read;

/// Parse a coil document, with loop storage capped at `requested`
/// entries, and reconcile the storage against the observed loop count.
pub fn parse_str(input: &str, requested: usize) -> Result<(Coil, Reconciliation)> {
    let mut coil = Coil::with_capacity(requested);
    let mut source = LiveEvents::new(input);
    let observed = Interpreter::new(requested).run(&mut source, &mut coil)?;
    let outcome = reconcile(&mut coil, observed, requested);
    Ok((coil, outcome))
}

pub fn parse_reader<R: Read>(mut reader: R, requested: usize) -> Result<(Coil, Reconciliation)> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_str(&buf, requested)
}
