use async_stream::stream;
use futures_util::StreamExt;
use lazyseq::*;

/// A single-pass generator counting from 1 to n.
fn generator_source(n: i32) -> Sequence<i32> {
    Sequence::from_stream(stream! {
        for i in 1..=n {
            yield i;
        }
    })
}

#[tokio::test]
async fn multi_pass_sequence_traverses_repeatedly() {
    let seq = sequence(vec![1, 2, 3]);
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
}

#[tokio::test]
async fn from_vec_conversion() {
    let seq: Sequence<i32> = vec![4, 5, 6].into();
    assert_eq!(seq.to_vec().await, vec![4, 5, 6]);
}

#[tokio::test]
async fn single_pass_traversals_are_continuations() {
    let seq = generator_source(5);
    let first: Vec<i32> = seq.stream().take(2).collect().await;
    assert_eq!(first, vec![1, 2]);
    // A second traversal continues where the first left off.
    assert_eq!(seq.to_vec().await, vec![3, 4, 5]);
    // The producer is exhausted now.
    assert_eq!(seq.to_vec().await, Vec::<i32>::new());
}

#[tokio::test]
async fn clones_share_single_pass_state() {
    let seq = generator_source(4);
    let alias = seq.clone();
    assert_eq!(seq.stream().take(2).collect::<Vec<_>>().await, vec![1, 2]);
    assert_eq!(alias.to_vec().await, vec![3, 4]);
}

#[tokio::test]
async fn clones_of_multi_pass_are_independent_runs() {
    let seq = sequence(vec![1, 2, 3]);
    let alias = seq.clone();
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
    assert_eq!(alias.to_vec().await, vec![1, 2, 3]);
}

#[tokio::test]
async fn source_kind_is_reported() {
    assert!(generator_source(1).is_single_pass());
    assert!(!sequence(vec![1]).is_single_pass());
}

#[tokio::test]
async fn get_returns_element_at_ordinal() {
    let seq = sequence(vec![10, 20, 30]);
    assert_eq!(seq.get(0).await, Some(10));
    assert_eq!(seq.get(1).await, Some(20));
    assert_eq!(seq.get(5).await, None);
    // Multi-pass: index access never consumes the sequence.
    assert_eq!(seq.get(1).await, Some(20));
}

#[tokio::test]
async fn get_on_partially_consumed_single_pass_counts_remaining() {
    let seq = generator_source(5);
    let consumed: Vec<i32> = seq.stream().take(2).collect().await;
    assert_eq!(consumed, vec![1, 2]);
    // Ordinal 0 of what remains is the third element overall.
    assert_eq!(seq.get(0).await, Some(3));
    // That call itself consumed 3; past the remaining elements is None.
    assert_eq!(seq.get(5).await, None);
}

#[tokio::test]
async fn building_a_pipeline_does_no_work() {
    let seq = generator_source(3);
    // Stacking operators must not pull anything from the producer.
    let _pipeline = seq.map(|x| x * 2).filter(|x| *x > 0).take(10);
    assert_eq!(seq.to_vec().await, vec![1, 2, 3]);
}

#[tokio::test]
async fn method_and_free_function_shapes_agree() {
    let seq = sequence(vec![1, 2, 3, 4]);
    let via_method = seq.map(|x| x + 1).to_vec().await;
    let via_free = to_vec(&map(&seq, |x| x + 1)).await;
    assert_eq!(via_method, via_free);

    let via_method = seq.filter(|x| x % 2 == 0).to_vec().await;
    let via_free = to_vec(&filter(&seq, |x| x % 2 == 0)).await;
    assert_eq!(via_method, via_free);

    assert_eq!(seq.fold(0, |a, x| a + x).await, fold(&seq, 0, |a, x| a + x).await);
}

#[tokio::test]
async fn operators_over_single_pass_stay_single_pass_in_effect() {
    let seq = generator_source(4);
    let doubled = seq.map(|x| x * 2);
    assert_eq!(doubled.stream().take(2).collect::<Vec<_>>().await, vec![2, 4]);
    // Re-traversing the derived sequence continues the shared producer.
    assert_eq!(doubled.to_vec().await, vec![6, 8]);
}
