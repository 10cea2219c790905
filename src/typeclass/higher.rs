//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! A trait such as [`Functor`](super::Functor) needs to say "`fmap` turns an
//! `F<A>` into an `F<B>`". Rust cannot abstract over `F<_>` directly, so each
//! container names itself applied to another type through
//! [`TypeConstructor::WithType`].
//!
//! ```rust
//! use pointfree::typeclass::TypeConstructor;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = reshape(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A type constructor applied to its current inner type.
///
/// - `Inner`: the type the constructor is currently applied to
///   (`i32` for `Option<i32>`).
/// - `WithType<B>`: the same constructor applied to `B`
///   (`Option<B>` for `Option<i32>`).
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Vec<String> = transform(vec![1, 2, 3]);
        assert!(result.is_empty());

        fn assert_same<T>(_: T, _: T) {}
        let reshaped: <Result<i32, &str> as TypeConstructor>::WithType<bool> = Err("boom");
        assert_same(reshaped, Err::<bool, &str>("boom"));
    }
}
