//! The `compose!` macro: right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
/// The composed function takes as many arguments as the innermost one. Name
/// them after a `;` when that is more than one: `compose!(f, g, h; a, b)` is
/// `move |a, b| f(g(h(a, b)))`. Every other function takes a single argument.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// let exclaim = |s: String| format!("{s}!");
/// let shout = |s: &str| s.to_uppercase();
///
/// let angry = compose!(exclaim, shout);
/// assert_eq!(angry("send in the clowns"), "SEND IN THE CLOWNS!");
/// ```
///
/// Types change as values flow leftwards:
///
/// ```
/// use pointfree::compose;
///
/// fn words(sentence: &str) -> Vec<&str> { sentence.split(' ').collect() }
/// fn count(words: Vec<&str>) -> usize { words.len() }
///
/// let word_count = compose!(count, words);
/// assert_eq!(word_count("to be or not"), 4);
/// ```
///
/// A binary innermost function makes a binary composition:
///
/// ```
/// use pointfree::compose;
///
/// let full_name = |first: &str, last: &str| format!("{first} {last}");
/// let initials = |name: String| name.split(' ').filter_map(|part| part.chars().next()).collect::<String>();
///
/// let monogram = compose!(initials, full_name; first, last);
/// assert_eq!(monogram("Ada", "Lovelace"), "AL");
/// ```
///
/// Composing nothing is rejected at compile time:
///
/// ```compile_fail
/// let nothing = pointfree::compose!();
/// ```
#[macro_export]
macro_rules! compose {
    ($innermost_function:expr ; $($argument:ident),+ $(,)?) => {{
        let innermost = $innermost_function;
        move |$($argument),+| innermost($($argument),+)
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ ; $($argument:ident),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+ ; $($argument),+);
        move |$($argument),+| outer(inner_composed($($argument),+))
    }};

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
