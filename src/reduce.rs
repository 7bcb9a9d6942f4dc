//! Sequential and parallel reduction over a slice

use crate::config::ParallelConfig;
use crate::error::{AggregateError, ErrorSink};
use crate::gate::Gate;
use parking_lot::Mutex;
use std::fmt;
use std::thread;

/// Sequential left fold with error aggregation
///
/// Folds `items` into `zero` on the calling thread, left to right. The fold
/// receives the element and a reference to the current accumulator and
/// returns the next accumulator value.
///
/// A failing fold contributes one cause to the aggregate and leaves the
/// accumulator exactly as it was; folding continues with the next element.
///
/// # Example
/// ```
/// use parslice::ordered_reduce;
///
/// let raw = vec!["a", "b", "x", "56", "2"];
/// let (total, errors) = ordered_reduce(&raw, |s, &acc| s.parse::<i32>().map(|n| acc + n), 0);
/// assert_eq!(total, 58);
/// assert_eq!(errors.unwrap().len(), 3);
/// ```
pub fn ordered_reduce<T, R, E, F>(
    items: &[T],
    fold: F,
    zero: R,
) -> (R, Option<AggregateError<E>>)
where
    E: fmt::Display,
    F: Fn(&T, &R) -> Result<R, E>,
{
    let sink = ErrorSink::new();
    let mut accumulator = zero;
    for item in items {
        match fold(item, &accumulator) {
            Ok(next) => accumulator = next,
            Err(cause) => sink.record(cause),
        }
    }
    (accumulator, sink.finish())
}

/// Parallel fold without an ordering guarantee
///
/// Folds `items` into `zero` with at most `config.max_parallelism` workers
/// live at once. Each fold runs under the accumulator lock against the
/// current value, so folds are serialized but their order follows
/// scheduling, not input position. Use [`ordered_reduce`] when the fold is
/// sensitive to element order; this variant is only deterministic for
/// commutative, associative folds.
///
/// A failing fold contributes one cause to the aggregate and leaves the
/// accumulator exactly as it was; every other element still folds.
///
/// # Example
/// ```
/// use parslice::{unordered_reduce, ParallelConfig};
///
/// let items = vec![1, 2, 3, 4];
/// let (total, errors) = unordered_reduce(
///     &items,
///     |&n, &acc| Ok::<_, String>(acc + n),
///     0,
///     ParallelConfig::default(),
/// );
/// assert_eq!(total, 10);
/// assert!(errors.is_none());
/// ```
pub fn unordered_reduce<T, R, E, F>(
    items: &[T],
    fold: F,
    zero: R,
    config: ParallelConfig,
) -> (R, Option<AggregateError<E>>)
where
    T: Sync,
    R: Send,
    E: Send + fmt::Display,
    F: Fn(&T, &R) -> Result<R, E> + Sync,
{
    // Empty slice fast path
    if items.is_empty() {
        return (zero, None);
    }

    // Single element - no parallelism needed
    if items.len() == 1 {
        return match fold(&items[0], &zero) {
            Ok(next) => (next, None),
            Err(cause) => (
                zero,
                Some(AggregateError {
                    causes: vec![cause],
                }),
            ),
        };
    }

    tracing::trace!(
        "parallel reduce over {} item(s), cap {}",
        items.len(),
        config.worker_cap()
    );

    let gate = Gate::new(config.worker_cap());
    let sink = ErrorSink::new();
    let accumulator = Mutex::new(zero);

    thread::scope(|scope| {
        for item in items {
            let permit = gate.acquire();
            let fold = &fold;
            let sink = &sink;
            let accumulator = &accumulator;
            scope.spawn(move || {
                let _admission = permit;
                let mut current = accumulator.lock();
                match fold(item, &*current) {
                    Ok(next) => *current = next,
                    Err(cause) => {
                        drop(current);
                        sink.record(cause);
                    }
                }
            });
        }
    });

    (accumulator.into_inner(), sink.finish())
}
