//! Data-last mapping over any container.
//!
//! [`fmap`] and [`chain`] turn the `Functor` and `Monad` methods into
//! functions awaiting their container, so a container step can be written
//! inside [`compose!`](crate::compose) without naming the value.

use crate::typeclass::{Functor, Monad};

/// `fmap(f)(container) == container.fmap(f)` for any [`Functor`].
///
/// ```
/// use pointfree::combinator::fmap;
/// use pointfree::control::Maybe;
/// use pointfree::typeclass::Identity;
///
/// let increment = |n: i32| n + 1;
/// assert_eq!(fmap(increment)(Maybe::Just(2)), Maybe::Just(3));
/// assert_eq!(fmap(increment)(Identity(2)), Identity(3));
/// assert_eq!(fmap(increment)(vec![1, 2]), vec![2, 3]);
/// ```
pub fn fmap<T, B, F>(function: F) -> impl Fn(T) -> T::WithType<B> + Clone
where
    T: Functor,
    F: Fn(T::Inner) -> B + Clone + 'static,
    B: 'static,
{
    move |container| container.fmap(function.clone())
}

/// `chain(f)(container) == container.flat_map(f)` for any [`Monad`].
///
/// ```
/// use pointfree::combinator::chain;
/// use pointfree::control::Maybe;
///
/// let halve = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
/// assert_eq!(chain(halve)(Maybe::Just(8)), Maybe::Just(4));
/// assert_eq!(chain(halve)(Maybe::Just(3)), Maybe::Nothing);
/// ```
pub fn chain<T, B, F>(function: F) -> impl Fn(T) -> T::WithType<B> + Clone
where
    T: Monad,
    F: Fn(T::Inner) -> T::WithType<B> + Clone + 'static,
    B: 'static,
{
    move |container| container.flat_map(function.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    #[cfg(feature = "effect")]
    use crate::effect::IO;

    #[test]
    fn test_fmap_leaves_left_untouched() {
        let shout = fmap(|s: String| s.to_uppercase());
        let failed: Either<&str, String> = Either::Left("inactive");
        assert_eq!(shout(failed), Either::Left("inactive"));
    }

    #[cfg(feature = "effect")]
    #[test]
    fn test_fmap_over_io_is_deferred() {
        let doubled = fmap(|n: i32| n * 2)(IO::of(21));
        assert_eq!(doubled.run(), 42);
    }

    #[cfg(feature = "effect")]
    #[test]
    fn test_chain_sequences_io() {
        let read_twice = chain(|n: i32| IO::of(n + 1));
        assert_eq!(read_twice(IO::of(1)).run(), 2);
    }
}
