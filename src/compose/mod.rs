//! Function composition and partial application.
//!
//! - [`compose!`](crate::compose): right-to-left composition
//! - [`pipe!`](crate::pipe): left-to-right application
//! - [`curry2!`](crate::curry2), [`curry3!`](crate::curry3),
//!   [`curry4!`](crate::curry4): one argument per call
//! - [`partial!`](crate::partial): fix any arguments, leave `__` open
//! - [`compose_all`]: compose a runtime list of functions
//!
//! # Examples
//!
//! ```rust
//! use pointfree::{compose, curry2};
//!
//! let replace = curry2!(|from: char, text: String| text.replace(from, "_"));
//! let snake = compose!(replace(' '), |s: &str| s.to_lowercase());
//! assert_eq!(snake("Ferrari FF"), "ferrari_ff");
//! ```

mod compose_macro;
mod composition;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use composition::{CompositionError, Endo, compose_all};
pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
