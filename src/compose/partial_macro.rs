//! The `partial!` macro: fix any subset of a function's arguments.

/// Fixes some arguments of a two- or three-argument function.
///
/// Write `__` for each argument that stays open; the resulting closure takes
/// the open arguments in their original order. Fixed values are evaluated
/// once and cloned into every call, so they must implement [`Clone`].
/// Fixing every argument yields a zero-argument thunk.
///
/// `__` is matched as a literal token; it does not need to be imported.
///
/// # Examples
///
/// ```
/// use pointfree::partial;
///
/// fn replace(pattern: &str, replacement: &str, text: &str) -> String {
///     text.replace(pattern, replacement)
/// }
///
/// let underscore_spaces = partial!(replace, " ", "_", __);
/// assert_eq!(underscore_spaces("Ferrari FF"), "Ferrari_FF");
///
/// let strip = partial!(replace, __, "", __);
/// assert_eq!(strip("r", "Ferrari"), "Feai");
/// ```
///
/// Adapting a binary function for [`compose!`](crate::compose):
///
/// ```
/// use pointfree::{compose, partial};
///
/// fn add(left: i32, right: i32) -> i32 { left + right }
///
/// let add_ten_then_double = compose!(|n: i32| n * 2, partial!(add, 10, __));
/// assert_eq!(add_ten_then_double(1), 22);
/// ```
#[macro_export]
macro_rules! partial {
    // three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let (function, first) = ($function, $first);
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let (function, second) = ($function, $second);
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let (function, third) = ($function, $third);
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let (function, first, second) = ($function, $first, $second);
        move |third| function(::std::clone::Clone::clone(&first), ::std::clone::Clone::clone(&second), third)
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let (function, first, third) = ($function, $first, $third);
        move |second| function(::std::clone::Clone::clone(&first), second, ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let (function, second, third) = ($function, $second, $third);
        move |first| function(first, ::std::clone::Clone::clone(&second), ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let (function, first, second, third) = ($function, $first, $second, $third);
        move || function(::std::clone::Clone::clone(&first), ::std::clone::Clone::clone(&second), ::std::clone::Clone::clone(&third))
    }};

    // two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let (function, first) = ($function, $first);
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let (function, second) = ($function, $second);
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let (function, first, second) = ($function, $first, $second);
        move || function(::std::clone::Clone::clone(&first), ::std::clone::Clone::clone(&second))
    }};
}

#[cfg(test)]
mod tests {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    fn between(low: i32, high: i32, value: i32) -> bool {
        (low..=high).contains(&value)
    }

    #[test]
    fn test_partial_fixes_first_of_two() {
        let from_ten = partial!(subtract, 10, __);
        assert_eq!(from_ten(3), 7);
    }

    #[test]
    fn test_partial_fixes_second_of_two() {
        let minus_ten = partial!(subtract, __, 10);
        assert_eq!(minus_ten(3), -7);
    }

    #[test]
    fn test_partial_all_fixed_is_thunk() {
        let thunk = partial!(subtract, 5, 2);
        assert_eq!(thunk(), 3);
        assert_eq!(thunk(), 3);
    }

    #[test]
    fn test_partial_three_arguments() {
        let is_digit_value = partial!(between, 0, 9, __);
        assert!(is_digit_value(4));
        assert!(!is_digit_value(12));

        let at_least_zero = partial!(between, 0, __, __);
        assert!(at_least_zero(10, 3));
    }

    #[test]
    fn test_partial_clones_owned_arguments() {
        let prefix = |prefix: String, text: &str| format!("{prefix}{text}");
        let tagged = partial!(prefix, "[pf] ".to_string(), __);
        assert_eq!(tagged("one"), "[pf] one");
        assert_eq!(tagged("two"), "[pf] two");
    }
}
