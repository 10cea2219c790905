//! Pure helpers for building pipelines without naming intermediate values.
//!
//! Configuration comes first and data last: `take(2)` is a function that
//! waits for a list, so it composes with [`compose!`](crate::compose).
//!
//! - lists: [`map`], [`filter`], [`reduce`], [`head`], [`last`],
//!   [`sort_by`], [`take`], [`slice`], [`add`], [`average`]
//! - strings: [`split`], [`join`], [`replace`], [`matches`], [`to_lower`],
//!   [`to_upper`], [`concat`]
//! - records: [`prop`]
//! - containers: [`fmap`], [`chain`]
//!
//! # Examples
//!
//! ```rust
//! use pointfree::combinator::{filter, head, map};
//! use pointfree::compose;
//! use pointfree::control::Maybe;
//!
//! let first_long_word = compose!(
//!     head,
//!     filter(|word: &String| word.len() > 4),
//!     map(|word: &str| word.to_string()),
//! );
//! assert_eq!(first_long_word(vec!["to", "curry", "functions"]), Maybe::Just("curry".to_string()));
//! ```

mod container;
mod list;
mod record;
mod string;

pub use container::{chain, fmap};
pub use list::{add, average, filter, head, last, map, reduce, slice, sort_by, take};
pub use record::prop;
pub use string::{concat, join, matches, replace, split, to_lower, to_upper};
