//! Sorting and sortedness: the fully eager corner of the library.
//!
//! `sort` and `sort_by` must materialize the entire upstream before the
//! first element can be produced; they do not terminate on an infinite
//! sequence. The sort is stable: elements comparing equal keep their
//! original relative order, which callers rely on for deterministic
//! pipelines. `sorted`/`sorted_by` stay lazy and short-circuit at the first
//! inversion.

use std::cmp::Ordering;
use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::Sequence;

/// Yield the elements in ascending natural order (stable).
///
/// Materialization happens when a traversal begins, not at call time; each
/// traversal of a multi-pass source re-materializes.
pub fn sort<T>(seq: &Sequence<T>) -> Sequence<T>
where
    T: Ord + 'static,
{
    sort_by(seq, |a, b| a.cmp(b))
}

/// Yield the elements ordered by a three-way comparator (stable).
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let seq = sequence(vec![(1, 'b'), (0, 'z'), (1, 'a')]);
/// let by_key = seq.sort_by(|x, y| x.0.cmp(&y.0));
/// // Stable: (1, 'b') stays ahead of (1, 'a').
/// assert_eq!(by_key.to_vec().await, vec![(0, 'z'), (1, 'b'), (1, 'a')]);
/// # }
/// ```
pub fn sort_by<T, F>(seq: &Sequence<T>, cmp: F) -> Sequence<T>
where
    T: 'static,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    let src = seq.clone();
    let cmp = Rc::new(cmp);
    Sequence::from_factory(move || {
        let src = src.clone();
        let cmp = Rc::clone(&cmp);
        stream! {
            let mut items: Vec<T> = src.stream().collect().await;
            items.sort_by(|a, b| cmp(a, b));
            for item in items {
                yield item;
            }
        }
        .boxed_local()
    })
}

/// Whether the sequence is already non-decreasing under natural ordering.
/// Lazy: stops pulling at the first inversion.
pub async fn sorted<T>(seq: &Sequence<T>) -> bool
where
    T: PartialOrd + 'static,
{
    let mut s = seq.stream();
    let mut prev: Option<T> = None;
    while let Some(item) = s.next().await {
        if let Some(p) = &prev {
            if *p > item {
                return false;
            }
        }
        prev = Some(item);
    }
    true
}

/// Whether the sequence is already non-decreasing under a comparator.
/// Lazy: stops pulling at the first inversion.
pub async fn sorted_by<T, F>(seq: &Sequence<T>, cmp: F) -> bool
where
    T: 'static,
    F: Fn(&T, &T) -> Ordering,
{
    let mut s = seq.stream();
    let mut prev: Option<T> = None;
    while let Some(item) = s.next().await {
        if let Some(p) = &prev {
            if cmp(p, &item) == Ordering::Greater {
                return false;
            }
        }
        prev = Some(item);
    }
    true
}
