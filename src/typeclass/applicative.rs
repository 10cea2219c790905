//! Applicative type class - lifting values and combining containers.
//!
//! `Applicative` extends [`Functor`] with `pure`, the `of` constructor every
//! container exposes, and with `map2`, which combines two containers of the
//! same kind using a binary function.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))          (homomorphism via fmap)
//! fa.map2(pure(()), |a, _| a) == fa       (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pointfree::typeclass::{Applicative, Identity};
//!
//! let first = <Identity<()>>::pure(2);
//! let second = Identity(40);
//! assert_eq!(first.map2(second, |a, b| a + b), Identity(42));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift a plain value and combine two
/// containers.
pub trait Applicative: Functor {
    /// Lifts a value into the container's success case.
    ///
    /// `B: Clone` because deferred containers (`IO`, `Task`) hand out the
    /// lifted value again on every run.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Combines the values of two containers with `function`.
    ///
    /// If either container is in a failure or absent state, the first such
    /// state (reading left to right) is the result.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        B: 'static,
        Self::Inner: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}
