//! Worked exercises built from the library.
//!
//! - cars: composition over the six sample [`Car`]s
//! - words: currying on strings and numbers
//! - functors: `Identity`, `Maybe`, `Either`, `IO` and `Task` in use

mod cars;
mod functors;
mod money;
mod words;

pub use cars::{
    Car, available_prices, average_dollar_value, cars, fastest_car, is_last_in_stock,
    name_of_first_car, sanitize_names,
};
pub use functors::{
    POST_DELAY, Post, PostError, User, check_active, first_element, get_post, increment,
    initial_of_name, parse_maybe, post_with_upper_title, save, save_if_valid, show_welcome,
    uppercase_title, validate_name_length, welcome_if_active,
};
pub use money::format_money;
pub use words::{Slicer, filter_qs, keep_highest, max, sentences, slice, take, words};
