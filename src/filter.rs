//! Parallel filter over a slice, preserving input order

use crate::collector::IndexedCollector;
use crate::config::ParallelConfig;
use crate::error::{AggregateError, ErrorSink};
use crate::gate::Gate;
use std::fmt;
use std::thread;

/// Parallel filter preserving input order
///
/// Evaluates `predicate` on every element with at most
/// `config.max_parallelism` workers live at once. Survivors are tagged with
/// their input position as they arrive and sorted back into input order
/// after the batch completes, so the output reads like a sequential filter.
///
/// Failures never abort the batch. An element whose predicate fails is
/// excluded from the output, exactly like one that returned `false`, and
/// contributes one cause to the aggregate.
///
/// # Arguments
/// * `items` - Input slice; survivors are cloned into the output
/// * `predicate` - Fallible keep/drop decision (must be thread-safe)
/// * `config` - Worker cap for this call
///
/// # Returns
/// The surviving elements in input order, and the aggregate of every
/// failure if any occurred.
///
/// # Example
/// ```
/// use parslice::{filter, ParallelConfig};
///
/// let raw = vec!["a", "b", "x", "56", "2"];
/// let (kept, errors) = filter(
///     &raw,
///     |s| s.parse::<i32>().map(|n| n > 3),
///     ParallelConfig::default(),
/// );
/// assert_eq!(kept, vec!["56"]);
/// assert_eq!(errors.unwrap().len(), 3);
/// ```
pub fn filter<T, E, F>(
    items: &[T],
    predicate: F,
    config: ParallelConfig,
) -> (Vec<T>, Option<AggregateError<E>>)
where
    T: Clone + Send + Sync,
    E: Send + fmt::Display,
    F: Fn(&T) -> Result<bool, E> + Sync,
{
    // Empty slice fast path
    if items.is_empty() {
        return (Vec::new(), None);
    }

    // Single element - no parallelism needed
    if items.len() == 1 {
        return match predicate(&items[0]) {
            Ok(true) => (vec![items[0].clone()], None),
            Ok(false) => (Vec::new(), None),
            Err(cause) => (
                Vec::new(),
                Some(AggregateError {
                    causes: vec![cause],
                }),
            ),
        };
    }

    tracing::trace!(
        "parallel filter over {} item(s), cap {}",
        items.len(),
        config.worker_cap()
    );

    let gate = Gate::new(config.worker_cap());
    let sink = ErrorSink::new();
    let survivors = IndexedCollector::with_capacity(items.len());

    thread::scope(|scope| {
        for (index, item) in items.iter().enumerate() {
            let permit = gate.acquire();
            let predicate = &predicate;
            let sink = &sink;
            let survivors = &survivors;
            scope.spawn(move || {
                let _admission = permit;
                match predicate(item) {
                    Ok(true) => survivors.push(index, item.clone()),
                    Ok(false) => {}
                    Err(cause) => sink.record(cause),
                }
            });
        }
    });

    (survivors.into_ordered(), sink.finish())
}
