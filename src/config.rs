//! Execution-width configuration for parallel operations
//!
//! Every parallel entry point takes a [`ParallelConfig`] by value. There is
//! no process-global knob: two call sites with different widths never
//! observe each other.

/// Worker cap used by [`ParallelConfig::default`].
pub const DEFAULT_MAX_PARALLELISM: usize = 5;

/// Configuration for parallel execution
///
/// Bounds the number of simultaneously live workers for one call. The bound
/// applies to admitted workers, not to input length: operations accept
/// slices of any size and admit elements as slots free up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Maximum number of simultaneously live workers (default: 5)
    pub max_parallelism: usize,
}

impl ParallelConfig {
    /// Create a configuration with an explicit worker cap.
    pub fn new(max_parallelism: usize) -> Self {
        Self { max_parallelism }
    }

    /// Create a configuration sized to the machine.
    ///
    /// Uses the number of logical CPUs. Prefer this over [`Default`] for
    /// CPU-bound work.
    pub fn available_parallelism() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }

    /// Effective worker cap: `max_parallelism` clamped to at least one.
    ///
    /// A zero cap would admit no workers and block forever.
    pub(crate) fn worker_cap(&self) -> usize {
        self.max_parallelism.max(1)
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: DEFAULT_MAX_PARALLELISM,
        }
    }
}
