//! Data-last list combinators.
//!
//! Each function that needs configuration takes it first and returns a
//! closure over the list, so it can sit directly inside
//! [`compose!`](crate::compose). Lists are taken by value and returned as
//! new vectors; element order is preserved unless the function sorts.

use std::ops::Add;

use crate::control::Maybe;

/// Applies `function` to every element, keeping order.
///
/// ```
/// use pointfree::combinator::map;
///
/// let lengths = map(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "abc"]), vec![1, 3]);
/// ```
pub fn map<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B> + Clone
where
    F: Fn(A) -> B + Clone,
{
    move |items| items.into_iter().map(&function).collect()
}

/// Keeps the elements satisfying `predicate`, keeping order.
pub fn filter<A, P>(predicate: P) -> impl Fn(Vec<A>) -> Vec<A> + Clone
where
    P: Fn(&A) -> bool + Clone,
{
    move |items| items.into_iter().filter(|item| predicate(item)).collect()
}

/// Folds the list from the left, starting from a clone of `initial`.
///
/// ```
/// use pointfree::combinator::{add, reduce};
///
/// let total = reduce(add, 0);
/// assert_eq!(total(vec![1, 2, 3]), 6);
/// assert_eq!(total(Vec::new()), 0);
/// ```
pub fn reduce<A, B, F>(function: F, initial: B) -> impl Fn(Vec<A>) -> B + Clone
where
    F: Fn(B, A) -> B + Clone,
    B: Clone,
{
    move |items| items.into_iter().fold(initial.clone(), &function)
}

/// The first element, or `Nothing` when empty.
///
/// Accepts anything iterable, so `head(name.chars())` yields the first
/// character of a string.
#[inline]
pub fn head<I: IntoIterator>(items: I) -> Maybe<I::Item> {
    items.into_iter().next().into()
}

/// The last element, or `Nothing` when empty.
#[inline]
pub fn last<I: IntoIterator>(items: I) -> Maybe<I::Item> {
    items.into_iter().last().into()
}

/// Sorts ascending by the key `key_of` extracts.
///
/// The sort is stable: elements with equal keys keep their relative order.
///
/// ```
/// use pointfree::combinator::sort_by;
///
/// let by_length = sort_by(|word: &&str| word.len());
/// assert_eq!(by_length(vec!["ccc", "a", "bb", "b"]), vec!["a", "b", "bb", "ccc"]);
/// ```
pub fn sort_by<A, K, F>(key_of: F) -> impl Fn(Vec<A>) -> Vec<A> + Clone
where
    F: Fn(&A) -> K + Clone,
    K: Ord,
{
    move |mut items| {
        items.sort_by_key(|item| key_of(item));
        items
    }
}

/// The first `count` elements, or all of them if there are fewer.
pub fn take<A>(count: usize) -> impl Fn(Vec<A>) -> Vec<A> + Clone {
    move |items| items.into_iter().take(count).collect()
}

/// The elements from index `start` up to, but excluding, `end`.
///
/// Out-of-range bounds are clamped to the list, and `start >= end` gives an
/// empty list.
///
/// ```
/// use pointfree::combinator::slice;
///
/// let middle = slice(1, 3);
/// assert_eq!(middle(vec!['a', 'b', 'c', 'd']), vec!['b', 'c']);
/// assert_eq!(middle(vec!['a', 'b']), vec!['b']);
/// ```
pub fn slice<A>(start: usize, end: usize) -> impl Fn(Vec<A>) -> Vec<A> + Clone {
    move |items| {
        items
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

/// Adds two values. Handy as a [`reduce`] step.
#[inline]
pub fn add<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}

/// The arithmetic mean, or `Nothing` for an empty list.
///
/// ```
/// use pointfree::combinator::average;
/// use pointfree::control::Maybe;
///
/// assert_eq!(average(vec![1.0, 2.0, 6.0]), Maybe::Just(3.0));
/// assert_eq!(average(Vec::new()), Maybe::Nothing);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(values: Vec<f64>) -> Maybe<f64> {
    let count = values.len();
    if count == 0 {
        return Maybe::Nothing;
    }
    let total = reduce(add, 0.0)(values);
    Maybe::Just(total / count as f64)
}
