//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps exactly one value and adds no behaviour. It is the
//! simplest container that satisfies [`Functor`], [`Applicative`] and
//! [`Monad`], which makes it the reference model when checking laws.

use std::fmt;

use super::{Applicative, Functor, Monad, TypeConstructor};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use pointfree::typeclass::Identity;
///
/// let wrapped = Identity::of(vec!["do", "ray", "me"]);
/// let first = wrapped.map(|notes| notes[0]);
/// assert_eq!(first.into_inner(), "do");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Applies `function` to the wrapped value, producing a new `Identity`.
    ///
    /// ```rust
    /// use pointfree::typeclass::Identity;
    ///
    /// assert_eq!(Identity::of(2).map(|n| n + 3), Identity(5));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies a container-returning function and flattens the result.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: Fn(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::of(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
