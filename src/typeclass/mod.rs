//! Type class traits shared by every container in the crate.
//!
//! - [`Functor`]: Mapping over a contained value (the "mappable" contract)
//! - [`Applicative`]: Lifting plain values and combining two containers
//! - [`Monad`]: Sequencing computations whose next step depends on a result
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that a trait
//! can name "the same container holding a different type".
//!
//! The five containers of the crate ([`Identity`], `Maybe`, `Either`, `IO`
//! and `Task`) all implement these traits, as do `Option`, `Result` and `Vec`
//! for `Functor`.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let wrapped = <Identity<()>>::pure(20);
//! let result = wrapped.fmap(|n| n + 1).flat_map(|n| Identity(n * 2));
//! assert_eq!(result, Identity(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
