//! One-pass lazy transforms: map, filter, slicing, concatenation,
//! restructuring.
//!
//! Every transform wraps a suspension procedure that drives the upstream
//! sequence and yields transformed values. The result preserves the
//! upstream's traversal discipline: over a multi-pass upstream each
//! traversal re-drives a fresh run; over a single-pass upstream each
//! traversal continues the shared producer.

use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::Sequence;

/// Transform every element with a function
pub fn map<T, U, F>(seq: &Sequence<T>, f: F) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let src = seq.clone();
    let f = Rc::new(f);
    Sequence::from_factory(move || {
        let src = src.clone();
        let f = Rc::clone(&f);
        stream! {
            let mut s = src.stream();
            while let Some(item) = s.next().await {
                yield f(item);
            }
        }
        .boxed_local()
    })
}

/// Keep only the elements satisfying the predicate
pub fn filter<T, F>(seq: &Sequence<T>, predicate: F) -> Sequence<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    let src = seq.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let src = src.clone();
        let predicate = Rc::clone(&predicate);
        stream! {
            let mut s = src.stream();
            while let Some(item) = s.next().await {
                if predicate(&item) {
                    yield item;
                }
            }
        }
        .boxed_local()
    })
}

/// Filter and map elements in one operation
pub fn filter_map<T, U, F>(seq: &Sequence<T>, f: F) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Option<U> + 'static,
{
    let src = seq.clone();
    let f = Rc::new(f);
    Sequence::from_factory(move || {
        let src = src.clone();
        let f = Rc::clone(&f);
        stream! {
            let mut s = src.stream();
            while let Some(item) = s.next().await {
                if let Some(mapped) = f(item) {
                    yield mapped;
                }
            }
        }
        .boxed_local()
    })
}

/// Map every element to a sequence and flatten the results in order
pub fn flat_map<T, U, F>(seq: &Sequence<T>, f: F) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Sequence<U> + 'static,
{
    let src = seq.clone();
    let f = Rc::new(f);
    Sequence::from_factory(move || {
        let src = src.clone();
        let f = Rc::clone(&f);
        stream! {
            let mut outer = src.stream();
            while let Some(item) = outer.next().await {
                let mut inner = f(item).stream();
                while let Some(value) = inner.next().await {
                    yield value;
                }
            }
        }
        .boxed_local()
    })
}

/// Take the first `n` elements. The upstream is pulled at most `n` times
/// per traversal.
pub fn take<T: 'static>(seq: &Sequence<T>, n: usize) -> Sequence<T> {
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        stream! {
            if n > 0 {
                let mut s = src.stream();
                let mut remaining = n;
                while let Some(item) = s.next().await {
                    yield item;
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }
        .boxed_local()
    })
}

/// Yield elements while the predicate holds, then stop at (and swallow) the
/// first failure.
pub fn take_while<T, F>(seq: &Sequence<T>, predicate: F) -> Sequence<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    let src = seq.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let src = src.clone();
        let predicate = Rc::clone(&predicate);
        stream! {
            let mut s = src.stream();
            while let Some(item) = s.next().await {
                if predicate(&item) {
                    yield item;
                } else {
                    break;
                }
            }
        }
        .boxed_local()
    })
}

/// Skip the first `n` elements
pub fn skip<T: 'static>(seq: &Sequence<T>, n: usize) -> Sequence<T> {
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        stream! {
            let mut s = src.stream();
            let mut skipped = 0;
            while let Some(item) = s.next().await {
                if skipped < n {
                    skipped += 1;
                    continue;
                }
                yield item;
            }
        }
        .boxed_local()
    })
}

/// Skip elements while the predicate holds; once it first fails, yield that
/// element and everything after it.
pub fn skip_while<T, F>(seq: &Sequence<T>, predicate: F) -> Sequence<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    let src = seq.clone();
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let src = src.clone();
        let predicate = Rc::clone(&predicate);
        stream! {
            let mut s = src.stream();
            let mut skipping = true;
            while let Some(item) = s.next().await {
                if skipping && predicate(&item) {
                    continue;
                }
                skipping = false;
                yield item;
            }
        }
        .boxed_local()
    })
}

/// Yield all of `a`, then all of `b`
pub fn chain<T: 'static>(a: &Sequence<T>, b: &Sequence<T>) -> Sequence<T> {
    concat(vec![a.clone(), b.clone()])
}

/// Concatenate any number of sequences in order
pub fn concat<T: 'static>(seqs: Vec<Sequence<T>>) -> Sequence<T> {
    let seqs = Rc::new(seqs);
    Sequence::from_factory(move || {
        let seqs = Rc::clone(&seqs);
        stream! {
            for seq in seqs.iter() {
                let mut s = seq.stream();
                while let Some(item) = s.next().await {
                    yield item;
                }
            }
        }
        .boxed_local()
    })
}

/// Pair every element with its zero-based ordinal
pub fn enumerate<T: 'static>(seq: &Sequence<T>) -> Sequence<(usize, T)> {
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        stream! {
            let mut s = src.stream();
            let mut ordinal = 0;
            while let Some(item) = s.next().await {
                yield (ordinal, item);
                ordinal += 1;
            }
        }
        .boxed_local()
    })
}

/// Insert a separator between consecutive elements
pub fn intersperse<T>(seq: &Sequence<T>, separator: T) -> Sequence<T>
where
    T: Clone + 'static,
{
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        let separator = separator.clone();
        stream! {
            let mut s = src.stream();
            let mut first = true;
            while let Some(item) = s.next().await {
                if !first {
                    yield separator.clone();
                }
                first = false;
                yield item;
            }
        }
        .boxed_local()
    })
}

/// Chunk the sequence into Vecs of at most `size` elements; the final chunk
/// may be shorter.
///
/// # Panics
///
/// Panics if `size` is 0, validated at call time before any traversal.
pub fn chunk<T: 'static>(seq: &Sequence<T>, size: usize) -> Sequence<Vec<T>> {
    assert!(size > 0, "chunk: size must be greater than zero");
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        stream! {
            let mut s = src.stream();
            let mut buf = Vec::with_capacity(size);
            while let Some(item) = s.next().await {
                buf.push(item);
                if buf.len() == size {
                    yield std::mem::take(&mut buf);
                }
            }
            if !buf.is_empty() {
                yield std::mem::take(&mut buf);
            }
        }
        .boxed_local()
    })
}

/// Yield the elements in reverse order.
///
/// Requires materializing the whole upstream before the first element is
/// produced; does not terminate on an infinite sequence.
pub fn reverse<T: 'static>(seq: &Sequence<T>) -> Sequence<T> {
    let src = seq.clone();
    Sequence::from_factory(move || {
        let src = src.clone();
        stream! {
            let items: Vec<T> = src.stream().collect().await;
            for item in items.into_iter().rev() {
                yield item;
            }
        }
        .boxed_local()
    })
}
