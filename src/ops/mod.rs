//! Free-function operators over [`Sequence`](crate::sequence::Sequence).
//!
//! Every operator here is also exposed as a method on `Sequence` with
//! identical semantics; the method shape simply delegates to these
//! functions.

pub mod aggregate;
pub mod cache;
pub mod constructors;
pub mod sort;
pub mod split;
pub mod transform;
pub mod zip;

// Re-export constructors
pub use constructors::{empty, emit, range, range_step, repeat, sequence, unfold};

// Re-export lazy transforms
pub use transform::{
    chain, chunk, concat, enumerate, filter, filter_map, flat_map, intersperse, map, reverse,
    skip, skip_while, take, take_while,
};

// Re-export the re-entrancy subsystems
pub use cache::cache;
pub use split::{break_with, partition, span_with, split};

// Re-export lockstep multi-source operators
pub use zip::{equal, zip, zip_pair, zip_with};

// Re-export the eager boundary
pub use aggregate::{
    all, any, average, count, first, fold, for_each, last, max, max_by, min, min_by, reduce,
    scan, sum, to_vec,
};
pub use sort::{sort, sort_by, sorted, sorted_by};
