//! Exercises that thread values through the containers.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combinator::{add, chain, concat, fmap, head, prop, to_upper};
use crate::compose;
use crate::control::{Either, Maybe};
use crate::effect::{IO, Task};
use crate::partial;
use crate::typeclass::{Functor, Identity};

#[allow(clippy::expect_used)]
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]?\d+").expect("integer pattern is valid"));

/// How long [`get_post`] takes to answer.
pub const POST_DELAY: Duration = Duration::from_millis(300);

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Whether the account may sign in.
    pub active: bool,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post id.
    pub id: u32,
    /// Headline.
    pub title: String,
}

/// Why a post could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    /// There is no post with this id. Post ids start at 1.
    #[error("post {0} not found")]
    NotFound(u32),
}

/// Adds one to the number inside any functor.
///
/// ```
/// use pointfree::control::Maybe;
/// use pointfree::exercises::increment;
/// use pointfree::typeclass::Identity;
///
/// assert_eq!(increment(Identity(2)), Identity(3));
/// assert_eq!(increment(Maybe::Just(2)), Maybe::Just(3));
/// assert_eq!(increment(vec![1, 2]), vec![2, 3]);
/// ```
pub fn increment<T>(container: T) -> T::WithType<i64>
where
    T: Functor<Inner = i64>,
{
    fmap(partial!(add, 1, __))(container)
}

/// The first element of the wrapped list.
pub fn first_element<A: 'static>(list: Identity<Vec<A>>) -> Identity<Maybe<A>> {
    fmap(head::<Vec<A>>)(list)
}

/// The first letter of the user's name. `Nothing` for an empty name.
pub fn initial_of_name(user: &User) -> Maybe<char> {
    compose!(
        chain(|name: String| head(name.chars())),
        prop::<String, &User>("name"),
    )(user)
}

/// Reads the integer at the start of `text`, ignoring leading whitespace
/// and anything after the digits.
///
/// ```
/// use pointfree::control::Maybe;
/// use pointfree::exercises::parse_maybe;
///
/// assert_eq!(parse_maybe("4"), Maybe::Just(4));
/// assert_eq!(parse_maybe("12px"), Maybe::Just(12));
/// assert_eq!(parse_maybe(""), Maybe::Nothing);
/// ```
pub fn parse_maybe(text: &str) -> Maybe<i64> {
    Maybe::from_option(LEADING_INTEGER.find(text))
        .flat_map(|found| Maybe::from_option(found.as_str().trim_start().parse::<i64>().ok()))
}

/// Fetches the post with `id` after [`POST_DELAY`].
///
/// Rejects with [`PostError::NotFound`] for id 0.
pub fn get_post(id: u32) -> Task<PostError, Post> {
    if id == 0 {
        return Task::rejected(PostError::NotFound(id));
    }
    Task::after(
        POST_DELAY,
        Post {
            id,
            title: "Love them futures".to_owned(),
        },
    )
}

fn with_upper_title(post: Post) -> Post {
    Post {
        title: to_upper(&post.title),
        ..post
    }
}

/// Uppercases the title of the post inside any functor.
pub fn uppercase_title<T>(container: T) -> T::WithType<Post>
where
    T: Functor<Inner = Post>,
{
    fmap(with_upper_title)(container)
}

/// The post with `id`, its title uppercased.
pub fn post_with_upper_title(id: u32) -> Task<PostError, Post> {
    uppercase_title(get_post(id))
}

/// Greets the user by name.
pub fn show_welcome(user: &User) -> String {
    "Welcome ".to_owned() + &user.name
}

/// `Right(user)` for an active account, otherwise a `Left` explaining why not.
pub fn check_active(user: User) -> Either<String, User> {
    Either::from_predicate(
        user,
        |user| user.active,
        |_| "Your account is not active".to_owned(),
    )
}

/// Welcomes active users.
///
/// ```
/// use pointfree::control::Either;
/// use pointfree::exercises::{User, welcome_if_active};
///
/// let gary = User { id: 1, name: "Gary".to_string(), active: true };
/// assert_eq!(welcome_if_active(gary), Either::Right("Welcome Gary".to_string()));
/// ```
pub fn welcome_if_active(user: User) -> Either<String, String> {
    compose!(fmap(|user: User| show_welcome(&user)), check_active)(user)
}

/// `Right(name)` when `name` is longer than three characters.
pub fn validate_name_length(name: &str) -> Either<String, String> {
    if name.chars().count() > 3 {
        Either::Right(name.to_owned())
    } else {
        Either::Left("You need > 3".to_owned())
    }
}

/// Persists `name`, logging `SAVED USER!` when run.
pub fn save(name: String) -> IO<String> {
    let saved = concat("-saved")(name);
    IO::log("SAVED USER!").map(move |()| saved.clone())
}

/// Saves a valid name. An invalid one becomes the validation message,
/// and nothing is saved or logged.
///
/// ```
/// use pointfree::exercises::save_if_valid;
///
/// assert_eq!(save_if_valid("fpguy99").run(), "fpguy99-saved");
/// assert_eq!(save_if_valid("...").run(), "You need > 3");
/// ```
pub fn save_if_valid(name: &str) -> IO<String> {
    validate_name_length(name).either(IO::of, save)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn albert() -> User {
        User {
            id: 2,
            name: "Albert".to_owned(),
            active: false,
        }
    }

    #[rstest]
    fn first_element_of_solfege() {
        let notes = Identity(vec!["do", "ray", "me", "fa", "so", "la", "ti", "do"]);
        assert_eq!(first_element(notes), Identity(Maybe::Just("do")));
    }

    #[rstest]
    fn initial_of_albert() {
        assert_eq!(initial_of_name(&albert()), Maybe::Just('A'));
    }

    #[rstest]
    fn initial_of_empty_name() {
        let nameless = User {
            name: String::new(),
            ..albert()
        };
        assert_eq!(initial_of_name(&nameless), Maybe::Nothing);
    }

    #[rstest]
    #[case("4", Maybe::Just(4))]
    #[case("  -7 apples", Maybe::Just(-7))]
    #[case("abc", Maybe::Nothing)]
    #[case("99999999999999999999", Maybe::Nothing)]
    fn parse_maybe_cases(#[case] text: &str, #[case] expected: Maybe<i64>) {
        assert_eq!(parse_maybe(text), expected);
    }

    #[rstest]
    fn inactive_user_is_turned_away() {
        assert_eq!(
            welcome_if_active(albert()),
            Either::Left("Your account is not active".to_owned())
        );
    }

    #[rstest]
    #[case("fpguy99", Either::Right("fpguy99".to_owned()))]
    #[case("abcd", Either::Right("abcd".to_owned()))]
    #[case("abc", Either::Left("You need > 3".to_owned()))]
    #[case("", Either::Left("You need > 3".to_owned()))]
    fn name_length_rule(#[case] name: &str, #[case] expected: Either<String, String>) {
        assert_eq!(validate_name_length(name), expected);
    }

    #[rstest]
    fn uppercase_title_works_on_plain_functors() {
        let post = Post {
            id: 1,
            title: "love".to_owned(),
        };
        assert_eq!(
            uppercase_title(Maybe::Just(post)).map(|post| post.title),
            Maybe::Just("LOVE".to_owned())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn post_with_upper_title_waits_then_shouts() {
        let post = post_with_upper_title(1).run().await;
        assert_eq!(
            post,
            Ok(Post {
                id: 1,
                title: "LOVE THEM FUTURES".to_owned(),
            })
        );
    }

    #[tokio::test]
    async fn missing_post_is_rejected() {
        assert_eq!(
            post_with_upper_title(0).run().await,
            Err(PostError::NotFound(0))
        );
    }
}
