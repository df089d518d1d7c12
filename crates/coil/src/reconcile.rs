//! Post-parse reconciliation of loop storage against the caller's
//! requested capacity.

use std::cmp::Ordering;

use tracing::info;

use crate::model::Coil;

/// Outcome of reconciling observed loop count against requested
/// capacity. Carries enough to render a user-facing note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Document matched the requested count exactly.
    Unchanged { len: usize },
    /// Document declared more loops than requested; surplus discarded.
    Truncated { observed: usize, kept: usize },
    /// Document declared fewer loops than requested; storage shrunk.
    Shrunk { requested: usize, len: usize },
}

impl Reconciliation {
    /// The authoritative usable length of `loops` after reconciliation.
    pub fn final_len(&self) -> usize {
        match *self {
            Reconciliation::Unchanged { len } => len,
            Reconciliation::Truncated { kept, .. } => kept,
            Reconciliation::Shrunk { len, .. } => len,
        }
    }
}

/// Resize `coil.loops` so exactly the usable range is exposed.
///
/// Count mismatches are informational, not errors: the interpreter
/// already refused to store entries past capacity, so truncation here
/// only drops empty slots, and shrinking releases storage that never
/// held data. Reconciling again with the same counts is a no-op.
pub fn reconcile(coil: &mut Coil, observed: usize, requested: usize) -> Reconciliation {
    match observed.cmp(&requested) {
        Ordering::Greater => {
            info!(
                observed,
                requested, "document contains more coil loops than requested"
            );
            coil.loops.truncate(requested);
            Reconciliation::Truncated {
                observed,
                kept: requested,
            }
        }
        Ordering::Less => {
            info!(
                observed,
                requested, "document contains fewer coil loops than requested; storage shrunk"
            );
            coil.loops.truncate(observed);
            coil.loops.shrink_to_fit();
            Reconciliation::Shrunk {
                requested,
                len: observed,
            }
        }
        Ordering::Equal => Reconciliation::Unchanged { len: observed },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Loop;

    fn coil_with_loops(n: usize) -> Coil {
        let mut coil = Coil::with_capacity(n);
        for i in 0..n {
            coil.loops.push(Loop {
                radius: i as f64 + 1.0,
                ..Loop::default()
            });
        }
        coil
    }

    #[test]
    fn equal_counts_are_untouched() {
        let mut coil = coil_with_loops(2);
        let outcome = reconcile(&mut coil, 2, 2);
        assert_eq!(outcome, Reconciliation::Unchanged { len: 2 });
        assert_eq!(coil.loops.len(), 2);
    }

    #[test]
    fn surplus_is_truncated_to_requested() {
        // Interpreter stored only up to capacity (2) of 3 observed.
        let mut coil = coil_with_loops(2);
        let outcome = reconcile(&mut coil, 3, 2);
        assert_eq!(
            outcome,
            Reconciliation::Truncated {
                observed: 3,
                kept: 2
            }
        );
        assert_eq!(outcome.final_len(), 2);
        assert_eq!(coil.loops.len(), 2);
    }

    #[test]
    fn shortfall_shrinks_storage_to_observed() {
        let mut coil = Coil::with_capacity(3);
        coil.loops.push(Loop::default());
        let outcome = reconcile(&mut coil, 1, 3);
        assert_eq!(
            outcome,
            Reconciliation::Shrunk {
                requested: 3,
                len: 1
            }
        );
        assert_eq!(coil.loops.len(), 1);
        assert!(coil.loops.capacity() < 3);
    }

    #[test]
    fn reconciling_twice_is_idempotent() {
        let mut coil = coil_with_loops(2);
        let first = reconcile(&mut coil, 3, 2);
        let len_after_first = coil.loops.len();
        let second = reconcile(&mut coil, 3, 2);
        assert_eq!(first, second);
        assert_eq!(coil.loops.len(), len_after_first);
    }
}
