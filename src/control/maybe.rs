//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. Mapping over `Nothing` is a
//! no-op, so a chain of `map`s stops at the first absent value without any
//! explicit checks. The chain is finally consumed with [`Maybe::fold`] (or
//! the [`Maybe::maybe`] helper), which takes one handler per case.
//!
//! `Maybe` converts losslessly to and from [`Option`].
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::Maybe;
//!
//! let street = Maybe::of("  main st ")
//!     .map(str::trim)
//!     .map(str::to_uppercase);
//! assert_eq!(street, Maybe::Just("MAIN ST".to_string()));
//!
//! let missing: Maybe<&str> = Maybe::Nothing;
//! assert_eq!(missing.map(str::trim).map(str::to_uppercase), Maybe::Nothing);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present (`Just`) or absent (`Nothing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// A present value.
    Just(A),
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> Maybe<A> {
    /// Wraps `value` in `Just`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Just(value)
    }

    /// Builds a `Maybe` from an `Option`, treating `None` as `Nothing`.
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Applies `function` to a present value; `Nothing` stays `Nothing`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function to a present value and flattens.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Consumes the `Maybe`, calling exactly one of the two handlers.
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// let greeting = Maybe::of("Ada").fold(|| "who?".to_string(), |name| format!("hi {name}"));
    /// assert_eq!(greeting, "hi Ada");
    /// ```
    #[inline]
    pub fn fold<B, N, J>(self, on_nothing: N, on_just: J) -> B
    where
        N: FnOnce() -> B,
        J: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Returns `function(value)` for `Just`, otherwise `default`.
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(3).maybe(0, |n| n * 2), 6);
    /// assert_eq!(Maybe::Nothing.maybe(0, |n: i32| n * 2), 0);
    /// ```
    #[inline]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.fold(|| default, function)
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        self.maybe(default, |value| value)
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.maybe(None, Some)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: Fn(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}
