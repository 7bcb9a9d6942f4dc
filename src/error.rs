//! Error aggregation for parallel operations
//!
//! Workers never abort a batch: every failure is recorded and the full set
//! is handed back once the batch completes. [`AggregateError`] is the public
//! carrier; [`ErrorSink`] is the internal collection point workers report
//! into.

use parking_lot::Mutex;
use std::fmt;
use thiserror::Error;

/// Every failure produced by one parallel call.
///
/// Holds one cause per failed element, in completion order. Completion order
/// is a scheduling artifact and is not stable across runs; callers needing
/// determinism should match on the set of causes, not their positions.
///
/// No cause is ever dropped: if three elements failed, `causes` has exactly
/// three entries.
#[derive(Error, Debug)]
#[error("{} operation(s) failed: {}", .causes.len(), render_causes(.causes))]
pub struct AggregateError<E: fmt::Display> {
    /// One cause per failed element, in completion order
    pub causes: Vec<E>,
}

impl<E: fmt::Display> AggregateError<E> {
    /// Number of failed elements.
    pub fn len(&self) -> usize {
        self.causes.len()
    }

    /// True when no causes are present.
    ///
    /// Operations in this crate never return an empty aggregate; this exists
    /// for callers that assemble aggregates of their own.
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Iterate over the causes in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.causes.iter()
    }

    /// Consume the aggregate, returning the causes.
    pub fn into_causes(self) -> Vec<E> {
        self.causes
    }
}

fn render_causes<E: fmt::Display>(causes: &[E]) -> String {
    causes
        .iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collection point the workers of one batch record failures into.
///
/// `record` takes `&self` and serializes internally, so workers share a
/// plain reference. `finish` runs after the completion barrier, when no
/// worker can still be recording.
pub(crate) struct ErrorSink<E> {
    causes: Mutex<Vec<E>>,
}

impl<E: fmt::Display> ErrorSink<E> {
    pub(crate) fn new() -> Self {
        Self {
            causes: Mutex::new(Vec::new()),
        }
    }

    /// Record one failure. Holds the lock only for the push.
    pub(crate) fn record(&self, cause: E) {
        self.causes.lock().push(cause);
    }

    /// Drain the sink into the public aggregate, `None` when nothing failed.
    pub(crate) fn finish(self) -> Option<AggregateError<E>> {
        let causes = self.causes.into_inner();
        if causes.is_empty() {
            None
        } else {
            tracing::debug!("parallel batch finished with {} failure(s)", causes.len());
            Some(AggregateError { causes })
        }
    }
}
