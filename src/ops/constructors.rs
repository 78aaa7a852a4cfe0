//! Sequence constructors: empty, emit, sequence, range, repeat, unfold.

use std::rc::Rc;

use async_stream::stream;
use futures_util::{future, stream as futures_stream, StreamExt};

use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Create an empty sequence that completes immediately
pub fn empty<T: 'static>() -> Sequence<T> {
    Sequence::from_factory(|| futures_stream::empty().boxed_local())
}

/// Emit a single element as a sequence
pub fn emit<T>(item: T) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::from_factory(move || {
        futures_stream::once(future::ready(item.clone())).boxed_local()
    })
}

/// Create a multi-pass sequence from anything iterable.
///
/// The iterable must be cloneable so every traversal can restart from the
/// beginning.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let seq = sequence(vec![1, 2, 3]);
/// assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
/// assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
/// # }
/// ```
pub fn sequence<I>(iter: I) -> Sequence<I::Item>
where
    I: IntoIterator + Clone + 'static,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    Sequence::from_factory(move || futures_stream::iter(iter.clone()).boxed_local())
}

/// Integers from `start` (inclusive) to `end` (exclusive), step 1. Empty
/// when `end <= start`.
pub fn range(start: i64, end: i64) -> Sequence<i64> {
    Sequence::from_factory(move || {
        stream! {
            let mut current = start;
            while current < end {
                yield current;
                current += 1;
            }
        }
        .boxed_local()
    })
}

/// Integers from `start` (inclusive) towards `end` (exclusive) by `step`,
/// which may be negative for a descending range.
///
/// Fails with [`SeqError::BadArgument`] when `step` is zero, validated
/// here, before any traversal begins.
pub fn range_step(start: i64, end: i64, step: i64) -> SeqResult<Sequence<i64>> {
    if step == 0 {
        return Err(SeqError::BadArgument {
            op: "range_step",
            arg: 2,
            reason: "step must be non-zero".to_string(),
        });
    }
    Ok(Sequence::from_factory(move || {
        stream! {
            let mut current = start;
            while (step > 0 && current < end) || (step < 0 && current > end) {
                yield current;
                current += step;
            }
        }
        .boxed_local()
    }))
}

/// Repeat a value indefinitely
pub fn repeat<T>(item: T) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::from_factory(move || futures_stream::repeat(item.clone()).boxed_local())
}

/// Generate a sequence from a seed value and a function.
///
/// The function produces an element and the next state; the sequence ends
/// when it returns `None`. Each traversal restarts from the initial seed.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let fibonacci = unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))));
/// assert_eq!(fibonacci.take(8).to_vec().await, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// # }
/// ```
pub fn unfold<S, T, F>(init: S, f: F) -> Sequence<T>
where
    S: Clone + 'static,
    T: 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
{
    let f = Rc::new(f);
    Sequence::from_factory(move || {
        let init = init.clone();
        let f = Rc::clone(&f);
        stream! {
            let mut state = init;
            loop {
                match f(state) {
                    Some((item, next_state)) => {
                        state = next_state;
                        yield item;
                    }
                    None => break,
                }
            }
        }
        .boxed_local()
    })
}
