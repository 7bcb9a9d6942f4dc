//! # parslice - Parallel Slice Operations
//!
//! [![Crates.io](https://img.shields.io/crates/v/parslice.svg)](https://crates.io/crates/parslice)
//! [![Documentation](https://docs.rs/parslice/badge.svg)](https://docs.rs/parslice)
//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)
//!
//! **Higher-order slice operations with bounded fan-out**: map, filter,
//! reduce, and quantifiers that run element work on parallel workers while
//! never exceeding a caller-chosen concurrency cap.
//!
//! ## Features
//!
//! - ✅ **Bounded fan-out** - At most `max_parallelism` workers live at once, per call
//! - 🔢 **Order preserved** - `map` and `filter` outputs read like their sequential versions
//! - 🧾 **No error dropped** - Failures aggregate into one carrier alongside the partial result
//! - 🏁 **Run to completion** - No short-circuit, no cancellation: every element is processed
//! - 🔒 **Zero unsafe code** - Scoped threads and RAII permits, no raw pointers
//!
//! ## Quick Start
//!
//! Add parslice to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! parslice = "1.0.2"
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use parslice::{filter, map, ParallelConfig};
//!
//! let raw = vec!["a", "b", "x", "56", "2"];
//!
//! // Parse in parallel; failed slots keep the default value
//! let (parsed, errors) = map(&raw, |s| s.parse::<i32>(), ParallelConfig::default());
//! assert_eq!(parsed, vec![0, 0, 0, 56, 2]);
//! assert_eq!(errors.unwrap().len(), 3);
//!
//! // Keep the elements that parse to something above three
//! let (kept, _) = filter(&raw, |s| s.parse::<i32>().map(|n| n > 3), ParallelConfig::default());
//! assert_eq!(kept, vec!["56"]);
//! ```
//!
//! ## Architecture
//!
//! Every parallel operation runs the same admission pipeline:
//!
//! ```text
//! items → gate (≤ cap permits) → scoped workers → slots / collector / accumulator → barrier → (output, errors)
//! ```
//!
//! The spawning loop acquires a permit before each spawn, so at most
//! `max_parallelism` workers are ever alive; the scope's implicit join is
//! the completion barrier, after which results and errors are assembled on
//! the calling thread. Nothing is shared between calls: two calls with
//! different caps never influence each other.
//!
//! ### Main Components
//!
//! - [`ParallelConfig`] - Per-call worker cap (default: 5)
//! - [`map`] - Length- and order-preserving parallel transform
//! - [`filter`] - Order-preserving parallel selection
//! - [`ordered_reduce`] - Sequential left fold with error aggregation
//! - [`unordered_reduce`] - Parallel fold, serialized on the accumulator
//! - [`all`] / [`any`] - Parallel quantifiers; **empty input is `false` for both**
//! - [`flatten`] - One level of nested-vector concatenation
//! - [`AggregateError`] - Every failure from one call, none dropped
//!
//! ## Error Handling
//!
//! Operations return `(result, Option<AggregateError<E>>)` instead of a
//! `Result`: a batch with failures still produces its partial result, and
//! the aggregate carries one cause per failed element.
//!
//! ```rust
//! use parslice::{map, ParallelConfig};
//!
//! let raw = vec!["7", "seven"];
//! let (_, errors) = map(&raw, |s| s.parse::<u32>(), ParallelConfig::new(2));
//! let aggregate = errors.expect("one element cannot parse");
//! assert_eq!(aggregate.len(), 1);
//! assert!(aggregate.to_string().contains("1 operation(s) failed"));
//! ```
//!
//! ## Performance
//!
//! - **Admission before spawn**: the spawning loop blocks at the cap, so
//!   thread count never balloons with input length
//! - **Preallocated outputs**: `map` writes disjoint slots, no result
//!   reshuffling afterwards
//! - **One sort per filter**: survivors are ordered once, after the barrier
//! - `unordered_reduce` runs every fold under the accumulator lock: it
//!   relaxes fold order, it does not add fold throughput
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

// Module declarations
/// Version of the parslice library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod collector;
pub mod config;
pub mod error;
mod filter;
mod flatten;
mod gate;
mod map;
mod quantify;
mod reduce;

// Re-export main types and operations
pub use config::{ParallelConfig, DEFAULT_MAX_PARALLELISM};
pub use error::AggregateError;
pub use filter::filter;
pub use flatten::flatten;
pub use map::map;
pub use quantify::{all, any};
pub use reduce::{ordered_reduce, unordered_reduce};
