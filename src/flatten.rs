//! Nested-slice flattening

/// Flatten one level of nesting, preserving order
///
/// Concatenates the inner vectors front to back. Runs on the calling
/// thread: concatenation is memory-bound and gains nothing from fan-out.
///
/// # Example
/// ```
/// use parslice::flatten;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    let total: usize = nested.iter().map(Vec::len).sum();
    let mut flat = Vec::with_capacity(total);
    for row in nested {
        flat.extend_from_slice(row);
    }
    flat
}
