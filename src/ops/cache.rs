//! The memoization subsystem: replaying a single-pass producer to many
//! traversals.

use std::cell::RefCell;
use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;

use crate::sequence::{SeqStream, Sequence};

/// Replay buffer shared by every traversal of one cached sequence. Only the
/// traversal currently pulling from upstream holds the borrow, and it
/// releases it before suspending at a yield; buffer growth is append-only.
struct CacheState<T> {
    upstream: SeqStream<T>,
    buffer: Vec<T>,
    done: bool,
}

/// Make any sequence safely multiply-traversable.
///
/// The first time an ordinal is needed, the element is pulled from upstream
/// and recorded in a replay buffer; every later traversal of that ordinal is
/// served from the buffer. The upstream producer is never driven beyond the
/// furthest ordinal any traversal has requested, no matter how many
/// traversals run or how they interleave.
///
/// The buffer never evicts. Over an infinite upstream, memory grows without
/// bound as new ordinals are visited. That is the contract, and the price
/// of repeatability.
///
/// # Examples
/// ```
/// use lazyseq::*;
/// use async_stream::stream;
///
/// # async fn example() {
/// // A single-pass generator, traversable once...
/// let once_only = Sequence::from_stream(stream! {
///     for i in 1..=3 {
///         yield i;
///     }
/// });
/// // ...becomes repeatable when cached.
/// let cached = once_only.cache();
/// assert_eq!(cached.to_vec().await, vec![1, 2, 3]);
/// assert_eq!(cached.to_vec().await, vec![1, 2, 3]);
/// # }
/// ```
pub fn cache<T>(seq: &Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    let state = Rc::new(RefCell::new(CacheState {
        upstream: seq.stream(),
        buffer: Vec::new(),
        done: false,
    }));
    Sequence::from_factory(move || {
        let state = Rc::clone(&state);
        stream! {
            let mut pos = 0;
            loop {
                let step = {
                    let mut st = state.borrow_mut();
                    if pos < st.buffer.len() {
                        Some(st.buffer[pos].clone())
                    } else if st.done {
                        None
                    } else {
                        match st.upstream.next().await {
                            Some(item) => {
                                st.buffer.push(item.clone());
                                Some(item)
                            }
                            None => {
                                st.done = true;
                                log::trace!(
                                    "cache: upstream exhausted after {} elements",
                                    st.buffer.len()
                                );
                                None
                            }
                        }
                    }
                };
                match step {
                    Some(item) => {
                        pos += 1;
                        yield item;
                    }
                    None => break,
                }
            }
        }
        .boxed_local()
    })
}
