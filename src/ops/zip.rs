//! The lockstep multi-source subsystem: zip and equality.
//!
//! These operators advance several producers one step at a time, stopping at
//! the first exhausted input. Pulls within a step are strictly sequential:
//! there is no concurrency between sources, only lockstep interleaving in
//! one cooperative context.

use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::{SeqStream, Sequence};

/// Advance all input sequences in lockstep, yielding one `Vec` of per-step
/// values per step. Stops as soon as any input is exhausted, without pulling
/// the inputs after it in that step. An empty input list yields the empty
/// sequence.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let zipped = zip(vec![sequence(vec![1, 2, 3]), sequence(vec![10, 20])]);
/// assert_eq!(zipped.to_vec().await, vec![vec![1, 10], vec![2, 20]]);
/// # }
/// ```
pub fn zip<T: 'static>(seqs: Vec<Sequence<T>>) -> Sequence<Vec<T>> {
    let seqs = Rc::new(seqs);
    Sequence::from_factory(move || {
        let seqs = Rc::clone(&seqs);
        stream! {
            if !seqs.is_empty() {
                let mut streams: Vec<SeqStream<T>> =
                    seqs.iter().map(|seq| seq.stream()).collect();
                'steps: loop {
                    let mut step = Vec::with_capacity(streams.len());
                    for s in streams.iter_mut() {
                        match s.next().await {
                            Some(value) => step.push(value),
                            None => break 'steps,
                        }
                    }
                    yield step;
                }
            }
        }
        .boxed_local()
    })
}

/// Lockstep zip combining each step's values with a function
pub fn zip_with<T, U, F>(seqs: Vec<Sequence<T>>, combiner: F) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(Vec<T>) -> U + 'static,
{
    crate::ops::transform::map(&zip(seqs), combiner)
}

/// Combine two sequences of possibly different element types in lockstep,
/// stopping when either ends.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let sums = zip_pair(&sequence(vec![1, 2, 3]), &sequence(vec![10, 20]), |a, b| a + b);
/// assert_eq!(sums.to_vec().await, vec![11, 22]);
/// # }
/// ```
pub fn zip_pair<A, B, O, F>(a: &Sequence<A>, b: &Sequence<B>, combiner: F) -> Sequence<O>
where
    A: 'static,
    B: 'static,
    O: 'static,
    F: Fn(A, B) -> O + 'static,
{
    let a = a.clone();
    let b = b.clone();
    let combiner = Rc::new(combiner);
    Sequence::from_factory(move || {
        let a = a.clone();
        let b = b.clone();
        let combiner = Rc::clone(&combiner);
        stream! {
            let mut sa = a.stream();
            let mut sb = b.stream();
            loop {
                let x = match sa.next().await {
                    Some(x) => x,
                    None => break,
                };
                let y = match sb.next().await {
                    Some(y) => y,
                    None => break,
                };
                yield combiner(x, y);
            }
        }
        .boxed_local()
    })
}

/// Compare two sequences in lockstep.
///
/// `false` at the first index where the values differ, or where one
/// sequence ends before the other; `true` only when both end together with
/// no prior mismatch. Short-circuits: neither sequence is pulled past the
/// deciding step.
pub async fn equal<T>(a: &Sequence<T>, b: &Sequence<T>) -> bool
where
    T: PartialEq + 'static,
{
    let mut sa = a.stream();
    let mut sb = b.stream();
    loop {
        match (sa.next().await, sb.next().await) {
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}
