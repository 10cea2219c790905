//! Data-last string combinators.
//!
//! Every helper accepts anything that borrows as `str`, so owned and
//! borrowed strings flow through the same pipeline. Pattern-based helpers
//! take a compiled [`Regex`]; compile it once and reuse the returned closure.

use regex::Regex;

/// Splits on every occurrence of `separator`.
///
/// ```
/// use pointfree::combinator::split;
///
/// let words = split(" ");
/// assert_eq!(words("Jingle bells Batman smells"), vec!["Jingle", "bells", "Batman", "smells"]);
/// ```
pub fn split<S: AsRef<str>>(separator: &str) -> impl Fn(S) -> Vec<String> + Clone + use<S> {
    let separator = separator.to_owned();
    move |text| {
        text.as_ref()
            .split(separator.as_str())
            .map(str::to_owned)
            .collect()
    }
}

/// Joins the parts with `separator` between each pair.
pub fn join<S: AsRef<str>>(separator: &str) -> impl Fn(Vec<S>) -> String + Clone + use<S> {
    let separator = separator.to_owned();
    move |parts| {
        parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(separator.as_str())
    }
}

/// Replaces every match of `pattern` with `replacement`.
///
/// `replacement` may refer to capture groups as `$1` or `$name`.
///
/// ```
/// use pointfree::combinator::replace;
/// use regex::Regex;
///
/// let underscore = replace(Regex::new(r"\W+")?, "_");
/// assert_eq!(underscore("Aston Martin One-77"), "Aston_Martin_One_77");
/// # Ok::<(), regex::Error>(())
/// ```
pub fn replace<S: AsRef<str>>(
    pattern: Regex,
    replacement: &str,
) -> impl Fn(S) -> String + Clone + use<S> {
    let replacement = replacement.to_owned();
    move |text| {
        pattern
            .replace_all(text.as_ref(), replacement.as_str())
            .into_owned()
    }
}

/// Returns every substring matching `pattern`, in order.
///
/// An empty result means no match.
pub fn matches<S: AsRef<str>>(pattern: Regex) -> impl Fn(S) -> Vec<String> + Clone {
    move |text| {
        pattern
            .find_iter(text.as_ref())
            .map(|found| found.as_str().to_owned())
            .collect()
    }
}

/// Lowercases `text`.
#[inline]
pub fn to_lower<S: AsRef<str>>(text: S) -> String {
    text.as_ref().to_lowercase()
}

/// Uppercases `text`.
#[inline]
pub fn to_upper<S: AsRef<str>>(text: S) -> String {
    text.as_ref().to_uppercase()
}

/// Appends `suffix` to whatever string it is given.
///
/// ```
/// use pointfree::combinator::concat;
///
/// let saved = concat("-saved");
/// assert_eq!(saved("gary".to_string()), "gary-saved");
/// ```
pub fn concat(suffix: &str) -> impl Fn(String) -> String + Clone + use<> {
    let suffix = suffix.to_owned();
    move |text| text + &suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn split_then_join_restores_text() {
        let text = "the quick brown fox";
        assert_eq!(join(" ")(split(" ")(text)), text);
    }

    #[rstest]
    fn join_of_nothing_is_empty() {
        assert_eq!(join::<&str>(", ")(Vec::new()), "");
    }

    #[rstest]
    #[case("quick queen", vec!["q", "q"])]
    #[case("QUIET", vec!["Q"])]
    #[case("brown fox", vec![])]
    fn matches_case_insensitive_q(#[case] text: &str, #[case] expected: Vec<&str>) {
        let qs = matches(Regex::new("(?i)q").unwrap());
        assert_eq!(qs(text), expected);
    }

    #[rstest]
    fn replace_every_occurrence() {
        let dashes = replace(Regex::new(r"\s+").unwrap(), "-");
        assert_eq!(dashes("a  b c"), "a-b-c");
    }

    #[rstest]
    #[case(vec!["solo"], "solo")]
    #[case(vec!["a", "b", "c"], "a, b, c")]
    fn join_puts_separator_between_pairs(#[case] parts: Vec<&str>, #[case] expected: &str) {
        assert_eq!(join(", ")(parts), expected);
    }

    #[rstest]
    fn case_helpers() {
        assert_eq!(to_lower("Ferrari FF"), "ferrari ff");
        assert_eq!(to_upper("love"), "LOVE");
    }
}
