//! The `pipe!` macro: left-to-right application.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the reading order of a data flow.
/// `pipe!(x, f, g)` equals `compose!(g, f)(x)`.
///
/// # Examples
///
/// ```
/// use pointfree::pipe;
///
/// let trimmed_length = pipe!("  hello ", str::trim, str::len);
/// assert_eq!(trimmed_length, 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($remaining_functions),+)
    };
}
