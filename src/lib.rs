//! # pointfree
//!
//! Function composition, currying and a small set of algebraic containers,
//! together with worked exercises that put them to use on plain data.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor), [`Applicative`](typeclass::Applicative),
//!   [`Monad`](typeclass::Monad) over a GAT-based type constructor emulation
//! - **Function Composition**: `compose!`, `pipe!`, `partial!`, `curry2!`..`curry4!`
//! - **Combinators**: namespaced `map`, `filter`, `reduce`, `prop`, `head`, `last`
//!   and string helpers for pointfree pipelines
//! - **Control**: [`Maybe`](control::Maybe) and [`Either`](control::Either)
//! - **Effects**: [`IO`](effect::IO) for deferred synchronous effects and
//!   [`Task`](effect::Task) for deferred asynchronous ones
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and [`Identity`](typeclass::Identity)
//! - `compose`: Composition and currying macros
//! - `combinator`: List, string and record combinators
//! - `control`: `Maybe` and `Either`
//! - `effect`: `IO`
//! - `async`: `Task` (pulls in `tokio` and `futures`)
//! - `exercises`: The worked exercises
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let shout = compose!(|s: String| format!("{s}!"), |s: String| s.to_uppercase());
//! let greeting = Maybe::of("hello".to_string()).map(shout);
//! assert_eq!(greeting, Maybe::Just("HELLO!".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "exercises")]
pub mod exercises;
