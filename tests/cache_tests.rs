use std::cell::Cell;
use std::rc::Rc;

use async_stream::stream;
use futures_util::StreamExt;
use lazyseq::*;

/// Single-pass producer that counts how many elements it has yielded.
fn counted_source(n: usize, pulls: Rc<Cell<usize>>) -> Sequence<usize> {
    Sequence::from_stream(stream! {
        for i in 0..n {
            pulls.set(pulls.get() + 1);
            yield i;
        }
    })
}

#[tokio::test]
async fn cache_makes_single_pass_repeatable() {
    let pulls = Rc::new(Cell::new(0));
    let cached = counted_source(3, Rc::clone(&pulls)).cache();
    assert_eq!(cached.to_vec().await, vec![0, 1, 2]);
    assert_eq!(cached.to_vec().await, vec![0, 1, 2]);
    assert_eq!(cached.to_vec().await, vec![0, 1, 2]);
    // Three full traversals, but the producer ran exactly once.
    assert_eq!(pulls.get(), 3);
}

#[tokio::test]
async fn cache_pulls_upstream_once_per_ordinal() {
    let pulls = Rc::new(Cell::new(0));
    let cached = counted_source(10, Rc::clone(&pulls)).cache();

    // A partial traversal drives the producer only as far as requested.
    assert_eq!(cached.stream().take(4).collect::<Vec<_>>().await, vec![0, 1, 2, 3]);
    assert_eq!(pulls.get(), 4);

    // Replaying those ordinals costs nothing.
    assert_eq!(cached.stream().take(4).collect::<Vec<_>>().await, vec![0, 1, 2, 3]);
    assert_eq!(pulls.get(), 4);

    // Going further pulls only the new ordinals.
    assert_eq!(cached.stream().take(7).collect::<Vec<_>>().await.len(), 7);
    assert_eq!(pulls.get(), 7);
}

#[tokio::test]
async fn interleaved_traversals_share_one_buffer() {
    let pulls = Rc::new(Cell::new(0));
    let cached = counted_source(4, Rc::clone(&pulls)).cache();

    let mut fast = cached.stream();
    let mut slow = cached.stream();

    assert_eq!(fast.next().await, Some(0));
    assert_eq!(fast.next().await, Some(1));
    // The lagging traversal replays from the buffer without new pulls.
    assert_eq!(slow.next().await, Some(0));
    assert_eq!(slow.next().await, Some(1));
    assert_eq!(pulls.get(), 2);

    // The lagging traversal can become the driver.
    assert_eq!(slow.next().await, Some(2));
    assert_eq!(fast.next().await, Some(2));
    assert_eq!(pulls.get(), 3);

    assert_eq!(fast.next().await, Some(3));
    assert_eq!(fast.next().await, None);
    assert_eq!(slow.next().await, Some(3));
    assert_eq!(slow.next().await, None);
    assert_eq!(pulls.get(), 4);
}

#[tokio::test]
async fn operator_chains_over_cache_replay_identically() {
    let pulls = Rc::new(Cell::new(0));
    let cached = counted_source(5, Rc::clone(&pulls)).cache();
    let derived = cached.map(|x| x * x).filter(|x| x % 2 == 0);

    let first = derived.to_vec().await;
    let second = derived.to_vec().await;
    assert_eq!(first, vec![0, 4, 16]);
    assert_eq!(first, second);
    assert_eq!(pulls.get(), 5);
}

#[tokio::test]
async fn cache_of_multi_pass_is_transparent() {
    let seq = sequence(vec![1, 2, 3]).cache();
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
}

#[tokio::test]
async fn cache_of_empty_sequence() {
    let cached = empty::<i32>().cache();
    assert_eq!(cached.to_vec().await, Vec::<i32>::new());
    assert_eq!(cached.to_vec().await, Vec::<i32>::new());
}

#[tokio::test]
async fn cache_get_is_repeatable() {
    let pulls = Rc::new(Cell::new(0));
    let cached = counted_source(5, Rc::clone(&pulls)).cache();
    assert_eq!(cached.get(3).await, Some(3));
    assert_eq!(cached.get(3).await, Some(3));
    assert_eq!(cached.get(0).await, Some(0));
    assert_eq!(pulls.get(), 4);
}

#[tokio::test]
async fn cache_over_infinite_source_serves_visited_prefix() {
    let naturals = unfold(0u64, |n| Some((n, n + 1))).cache();
    assert_eq!(naturals.stream().take(3).collect::<Vec<_>>().await, vec![0, 1, 2]);
    assert_eq!(naturals.stream().take(5).collect::<Vec<_>>().await, vec![0, 1, 2, 3, 4]);
}
