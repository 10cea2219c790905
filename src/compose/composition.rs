//! Composition of a list of functions built at runtime.

use thiserror::Error;

/// A boxed function from `A` to `A`.
pub type Endo<A> = Box<dyn Fn(A) -> A>;

/// Errors from composing functions at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// No functions were supplied.
    #[error("cannot compose an empty list of functions")]
    Empty,
}

/// Composes `functions` right to left, like [`compose!`](crate::compose).
///
/// The last function in the list is applied first.
///
/// # Errors
///
/// Returns [`CompositionError::Empty`] when `functions` is empty.
///
/// ```
/// use pointfree::compose::{CompositionError, Endo, compose_all};
///
/// let steps: Vec<Endo<i32>> = vec![Box::new(|n| n + 1), Box::new(|n| n * 10)];
/// let combined = compose_all(steps)?;
/// assert_eq!(combined(2), 21);
///
/// assert_eq!(compose_all::<i32>(Vec::new()).err(), Some(CompositionError::Empty));
/// # Ok::<(), CompositionError>(())
/// ```
pub fn compose_all<A: 'static>(functions: Vec<Endo<A>>) -> Result<Endo<A>, CompositionError> {
    if functions.is_empty() {
        return Err(CompositionError::Empty);
    }
    Ok(Box::new(move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_all_single_function() {
        let composed = compose_all(vec![Box::new(|s: String| s + "!") as Endo<String>]);
        assert_eq!(composed.map(|f| f("hi".to_string())), Ok("hi!".to_string()));
    }

    #[test]
    fn test_compose_all_applies_last_first() {
        let steps: Vec<Endo<String>> = vec![
            Box::new(|s| s + "a"),
            Box::new(|s| s + "b"),
            Box::new(|s| s + "c"),
        ];
        let composed = compose_all(steps).unwrap();
        assert_eq!(composed(String::new()), "cba");
    }

    #[test]
    fn test_compose_all_empty_is_error() {
        let error = compose_all::<u8>(Vec::new()).err();
        assert_eq!(error, Some(CompositionError::Empty));
        assert_eq!(
            CompositionError::Empty.to_string(),
            "cannot compose an empty list of functions"
        );
    }
}
