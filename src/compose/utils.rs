//! Small building blocks for composition.
//!
//! - [`identity`]: the unit of composition
//! - [`constant`]: ignores its input
//! - [`flip`]: swaps the arguments of a binary function

/// Returns its argument unchanged.
///
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
///
/// ```
/// use pointfree::compose;
/// use pointfree::compose::identity;
///
/// let to_len = |s: &str| s.len();
/// let same = compose!(identity, to_len);
/// assert_eq!(same("curry"), to_len("curry"));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns a clone of `value`.
///
/// ```
/// use pointfree::compose::constant;
///
/// let all_zero: Vec<i32> = ["a", "b"].into_iter().map(constant(0)).collect();
/// assert_eq!(all_zero, vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of `function`: `flip(f)(b, a) == f(a, b)`.
///
/// ```
/// use pointfree::compose::flip;
///
/// let append = |text: String, suffix: &str| text + suffix;
/// let prepend_to = flip(append);
/// assert_eq!(prepend_to("-saved", "gary".to_string()), "gary-saved");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_owned_values() {
        assert_eq!(identity(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn constant_clones_on_every_call() {
        let always = constant::<String, i32>("same".to_string());
        assert_eq!(always(1), "same");
        assert_eq!(always(2), "same");
    }

    #[rstest]
    #[case(10, 3)]
    #[case(-4, 9)]
    fn flip_twice_restores_order(#[case] left: i32, #[case] right: i32) {
        let subtract = |a: i32, b: i32| a - b;
        assert_eq!(flip(flip(subtract))(left, right), subtract(left, right));
        assert_eq!(flip(subtract)(left, right), subtract(right, left));
    }
}
