//! Currying exercises on words and numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::combinator::{self, filter, map, reduce, split};

#[allow(clippy::expect_used)]
static LETTER_Q: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)q").expect("letter pattern is valid"));

/// Splits a sentence on single spaces.
///
/// ```
/// use pointfree::exercises::words;
///
/// assert_eq!(words("Jingle bells Batman smells"), vec!["Jingle", "bells", "Batman", "smells"]);
/// ```
pub fn words<S: AsRef<str>>(sentence: S) -> Vec<String> {
    split(" ")(sentence)
}

/// Applies [`words`] to every sentence.
pub fn sentences<S: AsRef<str>>(list: Vec<S>) -> Vec<Vec<String>> {
    map(words::<S>)(list)
}

/// Keeps the words that contain a `q`, in either case.
///
/// ```
/// use pointfree::exercises::filter_qs;
///
/// assert_eq!(filter_qs(vec!["quick", "camels", "quarry", "over", "quails"]), vec!["quick", "quarry", "quails"]);
/// ```
pub fn filter_qs<S: AsRef<str>>(words: Vec<S>) -> Vec<S> {
    filter(|word: &S| LETTER_Q.is_match(word.as_ref()))(words)
}

/// The larger of two values, preferring `left` on a tie.
#[inline]
pub fn keep_highest<T: PartialOrd>(left: T, right: T) -> T {
    if left >= right { left } else { right }
}

/// The largest number, folding from a seed of `0`.
///
/// The seed takes part in the comparison, so an empty list or a list of
/// negative numbers gives `0`.
pub fn max(numbers: Vec<i64>) -> i64 {
    reduce(keep_highest, 0)(numbers)
}

/// A list slicer curried one bound at a time: `slice(start)(end)(items)`
/// keeps the items from `start` up to, but excluding, `end`.
///
/// ```
/// use pointfree::exercises::slice;
///
/// let from_second = slice(1);
/// assert_eq!(from_second(3)(vec!['a', 'b', 'c']), vec!['b', 'c']);
/// assert_eq!(from_second(2)(vec!['a', 'b', 'c']), vec!['b']);
/// ```
pub fn slice<A: 'static>(start: usize) -> impl Fn(usize) -> Slicer<A> + Clone {
    move |end| -> Slicer<A> { Box::new(combinator::slice(start, end)) }
}

/// The slicer returned once both bounds of [`slice`] are known.
pub type Slicer<A> = Box<dyn Fn(Vec<A>) -> Vec<A>>;

/// The first `count` items: [`slice`] with its start fixed at `0`.
pub fn take<A: 'static>(count: usize) -> Slicer<A> {
    slice(0)(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sentences_splits_each_sentence() {
        assert_eq!(
            sentences(vec!["Jingle bells Batman smells", "Robin laid an egg"]),
            vec![
                vec!["Jingle", "bells", "Batman", "smells"],
                vec!["Robin", "laid", "an", "egg"],
            ]
        );
    }

    #[rstest]
    fn filter_qs_matches_uppercase() {
        assert_eq!(filter_qs(vec!["QUAY", "dock"]), vec!["QUAY"]);
    }

    #[rstest]
    #[case(vec![323, 523, 554, 123, 5234], 5234)]
    #[case(vec![-21, -3483, -2, -1], 0)]
    #[case(vec![], 0)]
    fn max_keeps_highest(#[case] numbers: Vec<i64>, #[case] expected: i64) {
        assert_eq!(max(numbers), expected);
    }

    #[rstest]
    fn keep_highest_prefers_left_on_tie() {
        assert_eq!(keep_highest((1, 'a'), (1, 'a')), (1, 'a'));
        assert_eq!(keep_highest(2.5, 3.5), 3.5);
    }

    #[rstest]
    #[case(0, 2, vec!["Yes", "No"])]
    #[case(1, 3, vec!["No", "Maybe"])]
    #[case(2, 1, vec![])]
    #[case(1, 10, vec!["No", "Maybe"])]
    fn slice_takes_one_bound_at_a_time(
        #[case] start: usize,
        #[case] end: usize,
        #[case] expected: Vec<&'static str>,
    ) {
        let from_start = slice(start);
        assert_eq!(from_start(end)(vec!["Yes", "No", "Maybe"]), expected);
    }

    #[rstest]
    fn take_two() {
        assert_eq!(take(2)(vec!["Yes", "No", "Maybe"]), vec!["Yes", "No"]);
    }
}
