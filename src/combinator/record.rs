//! Field access by name.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::control::Maybe;

/// Reads the field `key` of any serializable record as a `T`.
///
/// The record is serialized to a JSON object and the field is deserialized
/// into `T`. A record that is not an object, a missing field, or a field of
/// another shape all give `Nothing`.
///
/// ```
/// use pointfree::combinator::prop;
/// use pointfree::control::Maybe;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { id: u32, name: String }
///
/// let user = User { id: 2, name: "Albert".to_string() };
/// assert_eq!(prop::<String, _>("name")(&user), Maybe::Just("Albert".to_string()));
/// assert_eq!(prop::<String, _>("email")(&user), Maybe::Nothing);
/// assert_eq!(prop::<String, _>("id")(&user), Maybe::Nothing);
/// ```
pub fn prop<T, R>(key: &str) -> impl Fn(R) -> Maybe<T> + Clone + use<T, R>
where
    T: DeserializeOwned,
    R: Serialize,
{
    let key = key.to_owned();
    move |record| {
        let field = serde_json::to_value(record)
            .ok()
            .and_then(|mut value| value.get_mut(&key).map(serde_json::Value::take))
            .and_then(|field| serde_json::from_value(field).ok());
        Maybe::from_option(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, Serialize)]
    struct Post {
        id: u32,
        title: String,
        draft: bool,
    }

    fn post() -> Post {
        Post {
            id: 1,
            title: "love".to_string(),
            draft: false,
        }
    }

    #[test]
    fn test_prop_reads_each_field_type() {
        assert_eq!(prop::<u32, Post>("id")(post()), Maybe::Just(1));
        assert_eq!(prop::<String, Post>("title")(post()), Maybe::Just("love".to_string()));
        assert_eq!(prop::<bool, Post>("draft")(post()), Maybe::Just(false));
    }

    #[test]
    fn test_prop_of_non_object_is_nothing() {
        assert_eq!(prop::<u32, i32>("id")(5), Maybe::Nothing);
    }

    #[test]
    fn test_prop_over_references() {
        let posts = vec![post(), post()];
        let titles: Vec<Maybe<String>> = posts.iter().map(prop("title")).collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.iter().all(Maybe::is_just));
    }
}
