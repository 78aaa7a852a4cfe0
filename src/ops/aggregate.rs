//! Folds and other one-shot consumers of a sequence.
//!
//! Everything here traverses the source once. `fold`, `reduce`, `sum`,
//! `average`, `min`, `max`, `count`, `last` and `to_vec` consume the whole
//! traversal and therefore do not terminate on an infinite sequence;
//! `first`, `any` and `all` short-circuit. `scan` is the lazy member of the
//! family: it yields every intermediate accumulator as a new sequence.

use std::ops::Add;
use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::Sequence;

/// Collect every element into a `Vec`
pub async fn to_vec<T: 'static>(seq: &Sequence<T>) -> Vec<T> {
    seq.stream().collect().await
}

/// Fold left-to-right over the full sequence with an explicit seed
pub async fn fold<T, A, F>(seq: &Sequence<T>, init: A, mut f: F) -> A
where
    T: 'static,
    F: FnMut(A, T) -> A,
{
    let mut s = seq.stream();
    let mut acc = init;
    while let Some(item) = s.next().await {
        acc = f(acc, item);
    }
    acc
}

/// Seedless fold: the first element seeds the accumulator. Returns `None`
/// for an empty sequence.
pub async fn reduce<T, F>(seq: &Sequence<T>, mut f: F) -> Option<T>
where
    T: 'static,
    F: FnMut(T, T) -> T,
{
    let mut s = seq.stream();
    let first = s.next().await?;
    let mut acc = first;
    while let Some(item) = s.next().await {
        acc = f(acc, item);
    }
    Some(acc)
}

/// Like fold, but lazy: yields the accumulator after each combination, so
/// `n` input elements produce `n` outputs. The seed itself is not emitted.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let running = sequence(vec![1, 2, 3]).scan(0, |acc, x| acc + x);
/// assert_eq!(running.to_vec().await, vec![1, 3, 6]);
/// # }
/// ```
pub fn scan<T, U, F>(seq: &Sequence<T>, init: U, f: F) -> Sequence<U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T) -> U + 'static,
{
    let src = seq.clone();
    let f = Rc::new(f);
    Sequence::from_factory(move || {
        let src = src.clone();
        let init = init.clone();
        let f = Rc::clone(&f);
        stream! {
            let mut s = src.stream();
            let mut acc = init;
            while let Some(item) = s.next().await {
                acc = f(acc.clone(), item);
                yield acc.clone();
            }
        }
        .boxed_local()
    })
}

/// Sum of all elements, starting from the type's zero value
pub async fn sum<T>(seq: &Sequence<T>) -> T
where
    T: Default + Add<Output = T> + 'static,
{
    fold(seq, T::default(), |acc, x| acc + x).await
}

/// Arithmetic mean of all elements, or `None` for an empty sequence
pub async fn average<T>(seq: &Sequence<T>) -> Option<f64>
where
    T: Into<f64> + 'static,
{
    let (count, total) = fold(seq, (0usize, 0.0f64), |(count, total), x| {
        (count + 1, total + x.into())
    })
    .await;
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// Smallest element, or `None` for an empty sequence. The first of several
/// equal minima wins.
pub async fn min<T>(seq: &Sequence<T>) -> Option<T>
where
    T: Ord + 'static,
{
    reduce(seq, |a, b| if b < a { b } else { a }).await
}

/// Largest element, or `None` for an empty sequence. The last of several
/// equal maxima wins.
pub async fn max<T>(seq: &Sequence<T>) -> Option<T>
where
    T: Ord + 'static,
{
    reduce(seq, |a, b| if a > b { a } else { b }).await
}

/// Smallest element under a three-way comparator
pub async fn min_by<T, F>(seq: &Sequence<T>, cmp: F) -> Option<T>
where
    T: 'static,
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    reduce(seq, |a, b| {
        if cmp(&b, &a) == std::cmp::Ordering::Less {
            b
        } else {
            a
        }
    })
    .await
}

/// Largest element under a three-way comparator
pub async fn max_by<T, F>(seq: &Sequence<T>, cmp: F) -> Option<T>
where
    T: 'static,
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    reduce(seq, |a, b| {
        if cmp(&a, &b) == std::cmp::Ordering::Greater {
            a
        } else {
            b
        }
    })
    .await
}

/// Number of elements in the sequence
pub async fn count<T: 'static>(seq: &Sequence<T>) -> usize {
    fold(seq, 0usize, |n, _| n + 1).await
}

/// First element, or `None` if the sequence is empty
pub async fn first<T: 'static>(seq: &Sequence<T>) -> Option<T> {
    seq.stream().next().await
}

/// Last element, or `None` if the sequence is empty
pub async fn last<T: 'static>(seq: &Sequence<T>) -> Option<T> {
    let mut s = seq.stream();
    let mut last = None;
    while let Some(item) = s.next().await {
        last = Some(item);
    }
    last
}

/// Whether any element satisfies the predicate; short-circuits on the first
/// hit.
pub async fn any<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    let mut s = seq.stream();
    while let Some(item) = s.next().await {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Whether every element satisfies the predicate; short-circuits on the
/// first failure.
pub async fn all<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    let mut s = seq.stream();
    while let Some(item) = s.next().await {
        if !predicate(&item) {
            return false;
        }
    }
    true
}

/// Run a function over every element for its side effects
pub async fn for_each<T, F>(seq: &Sequence<T>, mut f: F)
where
    T: 'static,
    F: FnMut(T),
{
    let mut s = seq.stream();
    while let Some(item) = s.next().await {
        f(item);
    }
}
