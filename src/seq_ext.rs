//! The method call shape: every operator, bound to a source sequence.
//!
//! Each method delegates to the free function of the same name in
//! [`crate::ops`] (or [`crate::compose`]); the two shapes are one contract
//! and always produce identical results for identical arguments.

use std::cmp::Ordering;
use std::ops::Add;

use crate::compose::{compose, Composer};
use crate::ops::{aggregate, cache, sort, split, transform, zip};
use crate::sequence::Sequence;

impl<T: 'static> Sequence<T> {
    // ================================
    // Lazy transforms
    // ================================

    /// Transform every element with a function
    pub fn map<U: 'static, F>(&self, f: F) -> Sequence<U>
    where
        F: Fn(T) -> U + 'static,
    {
        transform::map(self, f)
    }

    /// Keep only the elements satisfying the predicate
    pub fn filter<F>(&self, predicate: F) -> Sequence<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        transform::filter(self, predicate)
    }

    /// Filter and map elements in one operation
    pub fn filter_map<U: 'static, F>(&self, f: F) -> Sequence<U>
    where
        F: Fn(T) -> Option<U> + 'static,
    {
        transform::filter_map(self, f)
    }

    /// Map every element to a sequence and flatten the results in order
    pub fn flat_map<U: 'static, F>(&self, f: F) -> Sequence<U>
    where
        F: Fn(T) -> Sequence<U> + 'static,
    {
        transform::flat_map(self, f)
    }

    /// Take the first `n` elements
    pub fn take(&self, n: usize) -> Sequence<T> {
        transform::take(self, n)
    }

    /// Yield elements while the predicate holds
    pub fn take_while<F>(&self, predicate: F) -> Sequence<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        transform::take_while(self, predicate)
    }

    /// Skip the first `n` elements
    pub fn skip(&self, n: usize) -> Sequence<T> {
        transform::skip(self, n)
    }

    /// Skip elements while the predicate holds, then yield the rest
    pub fn skip_while<F>(&self, predicate: F) -> Sequence<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        transform::skip_while(self, predicate)
    }

    /// Yield all of this sequence, then all of `other`
    pub fn chain(&self, other: &Sequence<T>) -> Sequence<T> {
        transform::chain(self, other)
    }

    /// Pair every element with its zero-based ordinal
    pub fn enumerate(&self) -> Sequence<(usize, T)> {
        transform::enumerate(self)
    }

    /// Insert a separator between consecutive elements
    pub fn intersperse(&self, separator: T) -> Sequence<T>
    where
        T: Clone,
    {
        transform::intersperse(self, separator)
    }

    /// Chunk the sequence into Vecs of at most `size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn chunk(&self, size: usize) -> Sequence<Vec<T>> {
        transform::chunk(self, size)
    }

    /// Yield the elements in reverse order (materializes on traversal)
    pub fn reverse(&self) -> Sequence<T> {
        transform::reverse(self)
    }

    /// Apply composers left to right; the extension point for user-defined
    /// operators
    pub fn compose(&self, composers: &[Composer<T, T>]) -> Sequence<T> {
        compose(self, composers)
    }

    /// Apply a single composer to this sequence
    pub fn via<U: 'static>(&self, composer: &Composer<T, U>) -> Sequence<U> {
        composer.apply(self.clone())
    }

    // ================================
    // Re-entrancy subsystems
    // ================================

    /// Make this sequence safely multiply-traversable by recording produced
    /// elements in a replay buffer. See [`crate::ops::cache::cache`].
    pub fn cache(&self) -> Sequence<T>
    where
        T: Clone,
    {
        cache::cache(self)
    }

    /// Split by position into (first `n`, remainder)
    pub fn split(&self, n: usize) -> (Sequence<T>, Sequence<T>) {
        split::split(self, n)
    }

    /// Split into (longest satisfying prefix, remainder)
    pub fn span_with<P>(&self, predicate: P) -> (Sequence<T>, Sequence<T>)
    where
        P: Fn(&T) -> bool + 'static,
    {
        split::span_with(self, predicate)
    }

    /// Split into (prefix before the first match, remainder)
    pub fn break_with<P>(&self, predicate: P) -> (Sequence<T>, Sequence<T>)
    where
        P: Fn(&T) -> bool + 'static,
    {
        split::break_with(self, predicate)
    }

    /// Split into (all satisfying elements, all failing elements)
    pub fn partition<P>(&self, predicate: P) -> (Sequence<T>, Sequence<T>)
    where
        P: Fn(&T) -> bool + 'static,
    {
        split::partition(self, predicate)
    }

    // ================================
    // Lockstep multi-source
    // ================================

    /// Combine with another sequence in lockstep, stopping when either ends
    pub fn zip_pair<B: 'static, O: 'static, F>(
        &self,
        other: &Sequence<B>,
        combiner: F,
    ) -> Sequence<O>
    where
        F: Fn(T, B) -> O + 'static,
    {
        zip::zip_pair(self, other, combiner)
    }

    /// Lockstep equality against another sequence
    pub async fn equal(&self, other: &Sequence<T>) -> bool
    where
        T: PartialEq,
    {
        zip::equal(self, other).await
    }

    // ================================
    // Eager boundary
    // ================================

    /// Collect every element into a `Vec`
    pub async fn to_vec(&self) -> Vec<T> {
        aggregate::to_vec(self).await
    }

    /// Fold left-to-right with an explicit seed
    pub async fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        aggregate::fold(self, init, f).await
    }

    /// Seedless fold; `None` on an empty sequence
    pub async fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        aggregate::reduce(self, f).await
    }

    /// Yield the accumulator after each combination
    pub fn scan<U, F>(&self, init: U, f: F) -> Sequence<U>
    where
        U: Clone + 'static,
        F: Fn(U, T) -> U + 'static,
    {
        aggregate::scan(self, init, f)
    }

    /// Sum of all elements
    pub async fn sum(&self) -> T
    where
        T: Default + Add<Output = T>,
    {
        aggregate::sum(self).await
    }

    /// Arithmetic mean, or `None` on an empty sequence
    pub async fn average(&self) -> Option<f64>
    where
        T: Into<f64>,
    {
        aggregate::average(self).await
    }

    /// Smallest element, or `None` on an empty sequence
    pub async fn min(&self) -> Option<T>
    where
        T: Ord,
    {
        aggregate::min(self).await
    }

    /// Largest element, or `None` on an empty sequence
    pub async fn max(&self) -> Option<T>
    where
        T: Ord,
    {
        aggregate::max(self).await
    }

    /// Smallest element under a three-way comparator
    pub async fn min_by<F>(&self, cmp: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        aggregate::min_by(self, cmp).await
    }

    /// Largest element under a three-way comparator
    pub async fn max_by<F>(&self, cmp: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        aggregate::max_by(self, cmp).await
    }

    /// Number of elements
    pub async fn count(&self) -> usize {
        aggregate::count(self).await
    }

    /// First element, or `None` if empty
    pub async fn first(&self) -> Option<T> {
        aggregate::first(self).await
    }

    /// Last element, or `None` if empty
    pub async fn last(&self) -> Option<T> {
        aggregate::last(self).await
    }

    /// Whether any element satisfies the predicate
    pub async fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        aggregate::any(self, predicate).await
    }

    /// Whether every element satisfies the predicate
    pub async fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        aggregate::all(self, predicate).await
    }

    /// Run a function over every element for its side effects
    pub async fn for_each<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        aggregate::for_each(self, f).await
    }

    /// Stable ascending sort under natural ordering (materializes on
    /// traversal)
    pub fn sort(&self) -> Sequence<T>
    where
        T: Ord,
    {
        sort::sort(self)
    }

    /// Stable sort under a three-way comparator (materializes on traversal)
    pub fn sort_by<F>(&self, cmp: F) -> Sequence<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        sort::sort_by(self, cmp)
    }

    /// Whether the sequence is already non-decreasing; short-circuits at the
    /// first inversion
    pub async fn sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        sort::sorted(self).await
    }

    /// Whether the sequence is non-decreasing under a comparator
    pub async fn sorted_by<F>(&self, cmp: F) -> bool
    where
        F: Fn(&T, &T) -> Ordering,
    {
        sort::sorted_by(self, cmp).await
    }
}
