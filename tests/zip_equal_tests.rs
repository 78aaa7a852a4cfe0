use async_stream::stream;
use lazyseq::*;

fn generator_source(values: Vec<i32>) -> Sequence<i32> {
    Sequence::from_stream(stream! {
        for v in values {
            yield v;
        }
    })
}

#[tokio::test]
async fn zip_pair_stops_at_shorter_input() {
    let sums = zip_pair(&sequence(vec![1, 2, 3]), &sequence(vec![10, 20]), |a, b| a + b);
    assert_eq!(sums.to_vec().await, vec![11, 22]);
}

#[tokio::test]
async fn zip_pair_combines_different_types() {
    let labeled = zip_pair(&sequence(vec!["a", "b"]), &sequence(vec![1, 2, 3]), |s, n| {
        format!("{}{}", s, n)
    });
    assert_eq!(labeled.to_vec().await, vec!["a1".to_string(), "b2".to_string()]);
}

#[tokio::test]
async fn zip_advances_all_inputs_in_lockstep() {
    let zipped = zip(vec![
        sequence(vec![1, 2, 3]),
        sequence(vec![10, 20, 30]),
        sequence(vec![100, 200]),
    ]);
    assert_eq!(zipped.to_vec().await, vec![vec![1, 10, 100], vec![2, 20, 200]]);
}

#[tokio::test]
async fn zip_of_no_sequences_is_empty() {
    let zipped = zip(Vec::<Sequence<i32>>::new());
    assert_eq!(zipped.to_vec().await, Vec::<Vec<i32>>::new());
}

#[tokio::test]
async fn zip_with_applies_the_combiner() {
    let totals = zip_with(
        vec![sequence(vec![1, 2]), sequence(vec![10, 20]), sequence(vec![100, 200])],
        |step| step.into_iter().sum::<i32>(),
    );
    assert_eq!(totals.to_vec().await, vec![111, 222]);
}

#[tokio::test]
async fn zip_works_over_single_pass_inputs() {
    let a = generator_source(vec![1, 2, 3]);
    let b = generator_source(vec![4, 5]);
    let pairs = zip_pair(&a, &b, |x, y| (x, y));
    assert_eq!(pairs.to_vec().await, vec![(1, 4), (2, 5)]);
}

#[tokio::test]
async fn zip_with_an_infinite_input_ends_with_the_finite_one() {
    let naturals = unfold(0i32, |n| Some((n, n + 1)));
    let pairs = zip_pair(&naturals, &sequence(vec![10, 20, 30]), |a, b| a + b);
    assert_eq!(pairs.to_vec().await, vec![10, 21, 32]);
}

#[tokio::test]
async fn equal_matches_identical_sequences() {
    assert!(equal(&sequence(vec![1, 2, 3]), &sequence(vec![1, 2, 3])).await);
    assert!(equal(&empty::<i32>(), &empty::<i32>()).await);
}

#[tokio::test]
async fn equal_rejects_mismatch_and_length_divergence() {
    assert!(!equal(&sequence(vec![1, 2, 3]), &sequence(vec![1, 2])).await);
    assert!(!equal(&sequence(vec![1, 2]), &sequence(vec![1, 2, 3])).await);
    assert!(!equal(&sequence(vec![1, 9, 3]), &sequence(vec![1, 2, 3])).await);
}

#[tokio::test]
async fn equal_short_circuits_on_first_mismatch() {
    // An infinite sequence is fine as long as the mismatch comes first.
    let naturals = unfold(0i32, |n| Some((n, n + 1)));
    assert!(!equal(&naturals, &sequence(vec![0, 1, 9])).await);
}

#[tokio::test]
async fn equal_method_shape_agrees() {
    let a = sequence(vec![1, 2]);
    let b = sequence(vec![1, 2]);
    assert!(a.equal(&b).await);
    assert_eq!(a.equal(&b).await, equal(&a, &b).await);
}
