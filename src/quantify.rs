//! Parallel quantifiers over a slice: [`all`] and [`any`]
//!
//! Both run every element to completion and share their verdict through a
//! flag that only ever moves in one direction, so racing workers cannot
//! overwrite each other's result.

use crate::config::ParallelConfig;
use crate::error::{AggregateError, ErrorSink};
use crate::gate::Gate;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Parallel universal quantifier
///
/// Evaluates `predicate` on every element with at most
/// `config.max_parallelism` workers live at once and reports whether every
/// element satisfied it. The verdict flag only moves from `true` to
/// `false`; every element is always evaluated, there is no short-circuit.
///
/// Two behaviors to note:
/// * **An empty slice returns `false`**, not the vacuous `true` of
///   [`Iterator::all`].
/// * An element whose predicate fails is skipped: it contributes a cause to
///   the aggregate but does not count as a failed predicate.
///
/// # Example
/// ```
/// use parslice::{all, ParallelConfig};
///
/// let items = vec![2, 4, 6];
/// let (holds, errors) = all(&items, |&n| Ok::<_, String>(n % 2 == 0), ParallelConfig::default());
/// assert!(holds);
/// assert!(errors.is_none());
///
/// let empty: Vec<i32> = Vec::new();
/// let (holds, _) = all(&empty, |&n| Ok::<_, String>(n % 2 == 0), ParallelConfig::default());
/// assert!(!holds);
/// ```
pub fn all<T, E, F>(
    items: &[T],
    predicate: F,
    config: ParallelConfig,
) -> (bool, Option<AggregateError<E>>)
where
    T: Sync,
    E: Send + fmt::Display,
    F: Fn(&T) -> Result<bool, E> + Sync,
{
    // Empty slice: false, never vacuously true
    if items.is_empty() {
        return (false, None);
    }

    // Single element - no parallelism needed
    if items.len() == 1 {
        return match predicate(&items[0]) {
            Ok(holds) => (holds, None),
            // An error is not a failed predicate
            Err(cause) => (
                true,
                Some(AggregateError {
                    causes: vec![cause],
                }),
            ),
        };
    }

    tracing::trace!(
        "parallel all over {} item(s), cap {}",
        items.len(),
        config.worker_cap()
    );

    let gate = Gate::new(config.worker_cap());
    let sink = ErrorSink::new();
    let holds = AtomicBool::new(true);

    thread::scope(|scope| {
        for item in items {
            let permit = gate.acquire();
            let predicate = &predicate;
            let sink = &sink;
            let holds = &holds;
            scope.spawn(move || {
                let _admission = permit;
                match predicate(item) {
                    Ok(true) => {}
                    Ok(false) => holds.store(false, Ordering::SeqCst),
                    Err(cause) => sink.record(cause),
                }
            });
        }
    });

    (holds.into_inner(), sink.finish())
}

/// Parallel existential quantifier
///
/// Evaluates `predicate` on every element with at most
/// `config.max_parallelism` workers live at once and reports whether any
/// element satisfied it. The verdict flag only moves from `false` to
/// `true`; every element is always evaluated, there is no short-circuit.
///
/// An empty slice returns `false`, as [`Iterator::any`] also does. An
/// element whose predicate fails contributes a cause to the aggregate and
/// cannot satisfy the quantifier.
///
/// # Example
/// ```
/// use parslice::{any, ParallelConfig};
///
/// let items = vec![1, 3, 4];
/// let (found, errors) = any(&items, |&n| Ok::<_, String>(n % 2 == 0), ParallelConfig::default());
/// assert!(found);
/// assert!(errors.is_none());
/// ```
pub fn any<T, E, F>(
    items: &[T],
    predicate: F,
    config: ParallelConfig,
) -> (bool, Option<AggregateError<E>>)
where
    T: Sync,
    E: Send + fmt::Display,
    F: Fn(&T) -> Result<bool, E> + Sync,
{
    // Empty slice fast path
    if items.is_empty() {
        return (false, None);
    }

    // Single element - no parallelism needed
    if items.len() == 1 {
        return match predicate(&items[0]) {
            Ok(found) => (found, None),
            Err(cause) => (
                false,
                Some(AggregateError {
                    causes: vec![cause],
                }),
            ),
        };
    }

    tracing::trace!(
        "parallel any over {} item(s), cap {}",
        items.len(),
        config.worker_cap()
    );

    let gate = Gate::new(config.worker_cap());
    let sink = ErrorSink::new();
    let found = AtomicBool::new(false);

    thread::scope(|scope| {
        for item in items {
            let permit = gate.acquire();
            let predicate = &predicate;
            let sink = &sink;
            let found = &found;
            scope.spawn(move || {
                let _admission = permit;
                match predicate(item) {
                    Ok(true) => found.store(true, Ordering::SeqCst),
                    Ok(false) => {}
                    Err(cause) => sink.record(cause),
                }
            });
        }
    });

    (found.into_inner(), sink.finish())
}
