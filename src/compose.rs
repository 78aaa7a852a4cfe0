//! The operator core: building new sequences out of sequence transformations.
//!
//! A [`Composer`] is a reusable transformation from `Sequence<I>` to
//! `Sequence<O>`. Every built-in operator follows the same discipline
//! internally (wrap a suspension procedure that drives the upstream
//! sequence and yields transformed values), and `Composer` is the supported
//! extension point for user-defined operators in that style.

use std::rc::Rc;

use crate::sequence::Sequence;

/// A reusable sequence transformation from one element type to another.
pub struct Composer<I, O> {
    f: Rc<dyn Fn(Sequence<I>) -> Sequence<O>>,
}

impl<I, O> Clone for Composer<I, O> {
    fn clone(&self) -> Self {
        Composer { f: Rc::clone(&self.f) }
    }
}

impl<I: 'static, O: 'static> Composer<I, O> {
    /// Create a new composer from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Sequence<I>) -> Sequence<O> + 'static,
    {
        Composer { f: Rc::new(f) }
    }

    /// Apply this composer to a sequence
    pub fn apply(&self, input: Sequence<I>) -> Sequence<O> {
        (self.f)(input)
    }

    /// Chain this composer with another, threading this one's output into
    /// the other's input.
    pub fn then<P: 'static>(self, next: Composer<O, P>) -> Composer<I, P> {
        Composer::new(move |input| next.apply(self.apply(input)))
    }
}

/// Identity composer that leaves the sequence untouched
pub fn identity<I: 'static>() -> Composer<I, I> {
    Composer::new(|input| input)
}

/// Apply composers to a sequence left to right, threading the output of one
/// into the input of the next. With no composers this is the identity.
///
/// # Examples
/// ```
/// use lazyseq::*;
///
/// # async fn example() {
/// let evens_doubled = compose(
///     &sequence(1..=6),
///     &[
///         Composer::new(|s| s.filter(|x| x % 2 == 0)),
///         Composer::new(|s| s.map(|x| x * 10)),
///     ],
/// );
/// assert_eq!(evens_doubled.to_vec().await, vec![20, 40, 60]);
/// # }
/// ```
pub fn compose<T: 'static>(seq: &Sequence<T>, composers: &[Composer<T, T>]) -> Sequence<T> {
    let mut out = seq.clone();
    for composer in composers {
        out = composer.apply(out);
    }
    out
}
