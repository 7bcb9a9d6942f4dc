//! Parallel map over a slice, preserving length and order

use crate::config::ParallelConfig;
use crate::error::{AggregateError, ErrorSink};
use crate::gate::Gate;
use std::fmt;
use std::thread;

/// Parallel map preserving input length and order
///
/// Applies `transform` to every element with at most
/// `config.max_parallelism` workers live at once. Order is preserved by
/// construction: each worker writes to the output slot matching its element,
/// so results never race for position.
///
/// Failures never abort the batch. A failed element leaves `R::default()`
/// in its slot and contributes one cause to the aggregate; every remaining
/// element is still processed.
///
/// # Arguments
/// * `items` - Input slice; read concurrently, never mutated
/// * `transform` - Fallible element transform (must be thread-safe)
/// * `config` - Worker cap for this call
///
/// # Returns
/// The full-length output vector, and the aggregate of every failure if any
/// occurred.
///
/// # Example
/// ```
/// use parslice::{map, ParallelConfig};
///
/// let items = vec![1, 2, 3];
/// let (doubled, errors) = map(&items, |&n| Ok::<_, String>(n * 2), ParallelConfig::default());
/// assert_eq!(doubled, vec![2, 4, 6]);
/// assert!(errors.is_none());
/// ```
///
/// Failed slots keep the default value and every cause is reported:
/// ```
/// use parslice::{map, ParallelConfig};
///
/// let raw = vec!["4", "x", "9"];
/// let (parsed, errors) = map(&raw, |s| s.parse::<i32>(), ParallelConfig::default());
/// assert_eq!(parsed, vec![4, 0, 9]);
/// assert_eq!(errors.unwrap().len(), 1);
/// ```
pub fn map<T, R, E, F>(
    items: &[T],
    transform: F,
    config: ParallelConfig,
) -> (Vec<R>, Option<AggregateError<E>>)
where
    T: Sync,
    R: Default + Send,
    E: Send + fmt::Display,
    F: Fn(&T) -> Result<R, E> + Sync,
{
    // Empty slice fast path
    if items.is_empty() {
        return (Vec::new(), None);
    }

    // Single element - no parallelism needed
    if items.len() == 1 {
        return match transform(&items[0]) {
            Ok(value) => (vec![value], None),
            Err(cause) => (
                vec![R::default()],
                Some(AggregateError {
                    causes: vec![cause],
                }),
            ),
        };
    }

    tracing::trace!(
        "parallel map over {} item(s), cap {}",
        items.len(),
        config.worker_cap()
    );

    let gate = Gate::new(config.worker_cap());
    let sink = ErrorSink::new();
    let mut output: Vec<R> = Vec::new();
    output.resize_with(items.len(), R::default);

    thread::scope(|scope| {
        for (slot, item) in output.iter_mut().zip(items) {
            // Admission happens before spawn, so at most `worker_cap` workers
            // are ever live at once.
            let permit = gate.acquire();
            let transform = &transform;
            let sink = &sink;
            scope.spawn(move || {
                let _admission = permit;
                match transform(item) {
                    Ok(value) => *slot = value,
                    Err(cause) => sink.record(cause),
                }
            });
        }
    });

    (output, sink.finish())
}
