//! Error types for lazyseq operators.
//!
//! Most of the argument validation the library performs happens in the type
//! system: counts are `usize`, predicates and combiners are `Fn` bounds, and
//! sources are `Sequence` values by construction. What remains is the small
//! set of argument errors only checkable at runtime, raised synchronously at
//! operator-call time, before any traversal begins.

/// Argument validation error, raised before any traversal begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeqError {
    /// An operator received an argument it cannot work with. `arg` is the
    /// zero-based position of the offending argument in the free-function
    /// call shape.
    #[error("{op}: argument {arg} invalid: {reason}")]
    BadArgument {
        op: &'static str,
        arg: usize,
        reason: String,
    },
}

/// Result type for fallible lazyseq operations
pub type SeqResult<T> = Result<T, SeqError>;
