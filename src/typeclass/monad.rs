//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map` (the "chain" operation),
//! letting the next computation depend on the result of the previous one.
//! A failure or absent state stops the chain: later steps are never called.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  (left identity)
//! m.flat_map(pure) == m                                        (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::Maybe;
//! use pointfree::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(20).flat_map(half).flat_map(half), Maybe::Just(5));
//! assert_eq!(Maybe::Just(10).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Feeds the contained value to `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}
