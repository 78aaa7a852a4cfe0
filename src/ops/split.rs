//! The split/partition subsystem: deriving two independently traversable
//! sequences from one shared upstream.
//!
//! All four operators share one mechanism: a single shared upstream
//! traversal, a stateful classifier assigning each produced element to
//! branch A or branch B, and one holding buffer per branch. Whichever branch
//! is traversed drives the upstream forward; elements classified to the
//! other branch are appended to that branch's buffer instead of being
//! dropped, and a branch always drains its own buffer before pulling
//! upstream again. Every upstream element is delivered exactly once, to
//! exactly one branch, in production order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::{SeqStream, Sequence};

/// Shared state of one split: the upstream traversal, the branch
/// classifier (true means branch A), and the per-branch holding buffers.
struct SplitState<T> {
    upstream: SeqStream<T>,
    classify: Box<dyn FnMut(&T) -> bool>,
    buffered_a: VecDeque<T>,
    buffered_b: VecDeque<T>,
    done: bool,
}

impl<T> SplitState<T> {
    fn buffer_mut(&mut self, branch_a: bool) -> &mut VecDeque<T> {
        if branch_a {
            &mut self.buffered_a
        } else {
            &mut self.buffered_b
        }
    }
}

fn branches<T: 'static>(
    seq: &Sequence<T>,
    classify: Box<dyn FnMut(&T) -> bool>,
) -> (Sequence<T>, Sequence<T>) {
    let state = Rc::new(RefCell::new(SplitState {
        upstream: seq.stream(),
        classify,
        buffered_a: VecDeque::new(),
        buffered_b: VecDeque::new(),
        done: false,
    }));
    (branch(Rc::clone(&state), true), branch(state, false))
}

/// One output branch: drain our buffer first, then drive the shared
/// upstream, stashing elements classified to the other side. The returned
/// sequence is single-pass: it is a view over shared state, not a
/// restartable source.
fn branch<T: 'static>(state: Rc<RefCell<SplitState<T>>>, ours_a: bool) -> Sequence<T> {
    Sequence::from_stream(stream! {
        loop {
            let next = {
                let mut st = state.borrow_mut();
                if let Some(item) = st.buffer_mut(ours_a).pop_front() {
                    Some(item)
                } else if st.done {
                    None
                } else {
                    loop {
                        match st.upstream.next().await {
                            Some(item) => {
                                let to_a = (st.classify)(&item);
                                if to_a == ours_a {
                                    break Some(item);
                                }
                                st.buffer_mut(to_a).push_back(item);
                            }
                            None => {
                                st.done = true;
                                log::trace!("split: shared upstream exhausted");
                                break None;
                            }
                        }
                    }
                }
            };
            match next {
                Some(item) => yield item,
                None => break,
            }
        }
    })
}

/// Split by position: the first `n` elements form branch A, the remainder
/// branch B.
///
/// `n == 0` yields an empty branch A; `n` past the end of the sequence
/// yields an empty branch B. Concatenating A then B always reproduces the
/// upstream order exactly.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let (head, tail) = sequence(vec![1, 2, 3, 4, 5]).split(2);
/// assert_eq!(head.to_vec().await, vec![1, 2]);
/// assert_eq!(tail.to_vec().await, vec![3, 4, 5]);
/// # }
/// ```
pub fn split<T: 'static>(seq: &Sequence<T>, n: usize) -> (Sequence<T>, Sequence<T>) {
    let mut seen = 0usize;
    branches(
        seq,
        Box::new(move |_item| {
            let in_head = seen < n;
            seen += 1;
            in_head
        }),
    )
}

/// Split at the first predicate failure: branch A is the longest prefix
/// whose elements all satisfy `predicate`, branch B is everything from the
/// first failure onward, including later elements that would satisfy the
/// predicate again.
pub fn span_with<T, P>(seq: &Sequence<T>, predicate: P) -> (Sequence<T>, Sequence<T>)
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let mut in_prefix = true;
    branches(
        seq,
        Box::new(move |item| {
            if in_prefix && !predicate(item) {
                in_prefix = false;
            }
            in_prefix
        }),
    )
}

/// Split at the first predicate success: branch A is the prefix of elements
/// that do *not* satisfy `predicate`, branch B is everything from the first
/// satisfying element onward.
pub fn break_with<T, P>(seq: &Sequence<T>, predicate: P) -> (Sequence<T>, Sequence<T>)
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let mut in_prefix = true;
    branches(
        seq,
        Box::new(move |item| {
            if in_prefix && predicate(item) {
                in_prefix = false;
            }
            in_prefix
        }),
    )
}

/// Classify every element for the sequence's whole lifetime: branch A holds
/// all elements satisfying `predicate`, branch B all elements failing it,
/// each in original relative order.
pub fn partition<T, P>(seq: &Sequence<T>, predicate: P) -> (Sequence<T>, Sequence<T>)
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    branches(seq, Box::new(move |item| predicate(item)))
}
