//! lazyseq - A lazy sequence combinator library
//!
//! This crate wraps any producer of values into a uniform, chainable
//! [`Sequence`] abstraction and offers a vocabulary of transformation,
//! filtering, aggregation and restructuring operators over it, evaluated
//! lazily wherever possible. Building a pipeline performs no work; traversal
//! is the only trigger for execution, and it proceeds depth-first through
//! the chain, pulling one element at a time.
//!
//! The re-entrancy engine is the interesting part: [`cache`](ops::cache::cache)
//! turns an inherently single-pass producer into a multiply-traversable
//! sequence, the [`split`](ops::split) family derives two independent
//! downstream sequences from one upstream without losing or duplicating
//! elements, and [`zip`](ops::zip::zip)/[`equal`](ops::zip::equal) advance
//! several producers in lockstep.
//!
//! The library assumes a single cooperative execution context: streams are
//! not `Send`, there is no cross-thread concurrency, and suspension happens
//! only at sequence-production points.

pub mod compose;
pub mod error;
pub mod ops;
pub mod seq_ext;
pub mod sequence;

// Re-export the whole operator vocabulary at the crate root
pub use compose::{compose, identity, Composer};
pub use error::{SeqError, SeqResult};
pub use ops::*;
pub use sequence::{SeqStream, Sequence};
