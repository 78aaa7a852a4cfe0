//! The `Sequence` wrapper: one abstraction over heterogeneous producers.
//!
//! A [`Sequence`] normalizes anything that can produce values one at a time
//! into a single chainable type. Producers come in two kinds, decided once at
//! construction:
//!
//! - **multi-pass**: a restartable source, held as a stream factory. Every
//!   traversal gets a fresh, independent run from the start.
//! - **single-pass**: a suspendable producer (typically an
//!   `async_stream::stream!` generator), held as shared suspended state.
//!   Every traversal is a continuation of the same underlying position;
//!   traversing twice does *not* replay from the start.
//!
//! Operators that need repeatability over a single-pass source must buffer
//! explicitly; see [`cache`](crate::ops::cache::cache) and the split family.
//!
//! The whole library assumes a single cooperative execution context:
//! suspension happens only at the point a producer yields, streams are boxed
//! without a `Send` bound, and shared state lives behind `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use futures_core::Stream;
use futures_util::stream::{self, LocalBoxStream, StreamExt};

/// A boxed, heap-allocated stream of sequence elements. Not `Send`: the
/// library runs in a single cooperative execution context.
pub type SeqStream<T> = LocalBoxStream<'static, T>;

/// The producer behind a [`Sequence`], tagged by traversal discipline.
enum Source<T> {
    /// Restartable: each call to the factory starts an independent traversal.
    MultiPass(Rc<dyn Fn() -> SeqStream<T>>),
    /// Exhaustible: all traversals share one suspended producer.
    SinglePass(Rc<RefCell<SeqStream<T>>>),
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::MultiPass(factory) => Source::MultiPass(Rc::clone(factory)),
            Source::SinglePass(cell) => Source::SinglePass(Rc::clone(cell)),
        }
    }
}

/// The central wrapper type: a lazily traversable sequence of values.
///
/// Construction is cheap and performs no traversal; work happens only when a
/// traversal stream is polled. `Sequence` is `Clone`; clones share the
/// underlying producer, so clones of a single-pass sequence observe one
/// common continuation.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let seq = sequence(vec![1, 2, 3]);
/// let doubled = seq.map(|x| x * 2);
/// assert_eq!(doubled.to_vec().await, vec![2, 4, 6]);
/// // Multi-pass: traversing again yields the same elements.
/// assert_eq!(doubled.to_vec().await, vec![2, 4, 6]);
/// # }
/// ```
pub struct Sequence<T> {
    source: Source<T>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            source: self.source.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.source {
            Source::MultiPass(_) => "MultiPass",
            Source::SinglePass(_) => "SinglePass",
        };
        f.debug_struct("Sequence").field("source", &kind).finish()
    }
}

impl<T: 'static> Sequence<T> {
    /// Wrap a restartable producer. The factory is invoked once per
    /// traversal and must hand back an independent run from the start.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> SeqStream<T> + 'static,
    {
        Sequence {
            source: Source::MultiPass(Rc::new(factory)),
        }
    }

    /// Wrap a single-pass producer. An `async_stream` generator is already a
    /// stream, so it wraps directly; whatever it has produced stays
    /// produced, and later traversals continue from the current position.
    pub fn from_stream<S>(s: S) -> Self
    where
        S: Stream<Item = T> + 'static,
    {
        Sequence {
            source: Source::SinglePass(Rc::new(RefCell::new(s.boxed_local()))),
        }
    }

    /// Whether this sequence wraps an exhaustible producer.
    pub fn is_single_pass(&self) -> bool {
        matches!(self.source, Source::SinglePass(_))
    }

    /// Begin a traversal.
    ///
    /// For a multi-pass sequence this is a fresh run from the start. For a
    /// single-pass sequence this is a draining view over the shared
    /// producer: the cell is borrowed only for the duration of each poll, so
    /// interleaved traversals take turns pulling from one continuation.
    pub fn stream(&self) -> SeqStream<T> {
        match &self.source {
            Source::MultiPass(factory) => factory(),
            Source::SinglePass(cell) => {
                let cell = Rc::clone(cell);
                stream::poll_fn(move |cx| cell.borrow_mut().as_mut().poll_next(cx)).boxed_local()
            }
        }
    }

    /// Element at the zero-based ordinal, or `None` if the traversal ends
    /// first.
    ///
    /// Computed by a fresh traversal of the wrapped reference, counting
    /// yields. It is O(n) per call and never cached. On a single-pass sequence
    /// that has already been partially consumed, ordinals count from the
    /// *remaining* elements, and the call itself consumes them.
    ///
    /// # Examples
    /// ```
    /// use lazyseq::*;
    ///
    /// # async fn example() {
    /// let seq = sequence(vec![10, 20, 30]);
    /// assert_eq!(seq.get(1).await, Some(20));
    /// assert_eq!(seq.get(5).await, None);
    /// # }
    /// ```
    pub async fn get(&self, index: usize) -> Option<T> {
        let mut s = self.stream();
        let mut ordinal = 0;
        while let Some(item) = s.next().await {
            if ordinal == index {
                return Some(item);
            }
            ordinal += 1;
        }
        None
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        crate::ops::constructors::sequence(items)
    }
}
