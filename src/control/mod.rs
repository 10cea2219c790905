//! Containers for absent values and domain failures.
//!
//! - [`Maybe`]: `Just(value)` or `Nothing`
//! - [`Either`]: `Left(error)` or `Right(value)`
//!
//! Both short-circuit: once a chain reaches `Nothing` or `Left`, every later
//! `map`/`flat_map` is skipped until the value is folded.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::{Either, Maybe};
//!
//! let found: Maybe<i32> = Maybe::from_option("42".parse().ok());
//! let checked: Either<String, i32> = found.fold(|| Either::Left("not a number".to_string()), Either::of);
//! assert_eq!(checked, Either::Right(42));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
