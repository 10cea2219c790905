//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value(s) inside a container while
//! keeping the container's shape. It is the one capability every container
//! in this crate shares.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Why `Fn` and not `FnOnce`
//!
//! `IO` and `Task` are descriptions that may be run many times, and `Vec`
//! applies the function once per element. The mapped function must therefore
//! be callable repeatedly, so `fmap` takes `Fn` for every container.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use pointfree::typeclass::Functor;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(numbers.fmap(|n| n * 2), vec![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// Containers in a failure or absent state return themselves (retyped)
    /// without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// ```rust
    /// use pointfree::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles_or_stays_none(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_skips_err() {
        let failed: Result<i32, String> = Err("nope".to_string());
        assert_eq!(failed.fmap(|n| n + 1), Err("nope".to_string()));
    }

    #[rstest]
    fn vec_fmap_preserves_order() {
        let words = vec!["b", "a", "c"];
        assert_eq!(words.fmap(str::to_uppercase), vec!["B", "A", "C"]);
    }

    #[rstest]
    fn void_keeps_shape() {
        assert_eq!(vec![1, 2].void(), vec![(), ()]);
        assert_eq!(None::<i32>.void(), None);
    }
}
