//! Composition exercises over a fixed list of cars.
//!
//! Every function here is a pipeline assembled with [`compose!`] from the
//! combinators; none of them names an intermediate value.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::combinator::{
    average, chain, filter, fmap, head, join, last, map, prop, replace, sort_by, to_lower,
};
use crate::compose;
use crate::control::Maybe;

use super::money::format_money;

#[allow(clippy::expect_used)]
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// A car on the lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Make and model.
    pub name: String,
    /// Engine power.
    pub horsepower: u32,
    /// Price in US dollars.
    pub dollar_value: f64,
    /// Whether the car can be bought today.
    pub in_stock: bool,
}

impl Car {
    fn new(name: &str, horsepower: u32, dollar_value: f64, in_stock: bool) -> Self {
        Self {
            name: name.to_owned(),
            horsepower,
            dollar_value,
            in_stock,
        }
    }
}

/// The six sample cars, in catalogue order.
pub fn cars() -> Vec<Car> {
    vec![
        Car::new("Ferrari FF", 660, 700_000.0, true),
        Car::new("Spyker C12 Zagato", 650, 648_000.0, false),
        Car::new("Jaguar XKR-S", 550, 132_000.0, false),
        Car::new("Audi R8", 525, 114_200.0, false),
        Car::new("Aston Martin One-77", 750, 1_850_000.0, true),
        Car::new("Pagani Huayra", 700, 1_300_000.0, false),
    ]
}

/// Whether the last car of the list is in stock. `Nothing` for no cars.
///
/// ```
/// use pointfree::control::Maybe;
/// use pointfree::exercises::{cars, is_last_in_stock};
///
/// assert_eq!(is_last_in_stock(cars()), Maybe::Just(false));
/// ```
pub fn is_last_in_stock(cars: Vec<Car>) -> Maybe<bool> {
    compose!(chain(prop::<bool, Car>("in_stock")), last::<Vec<Car>>)(cars)
}

/// The name of the first car. `Nothing` for no cars.
pub fn name_of_first_car(cars: Vec<Car>) -> Maybe<String> {
    compose!(chain(prop::<String, Car>("name")), head::<Vec<Car>>)(cars)
}

/// The mean price of the cars. `Nothing` for no cars.
pub fn average_dollar_value(cars: Vec<Car>) -> Maybe<f64> {
    compose!(average, map(|car: Car| car.dollar_value))(cars)
}

/// Car names lowercased, with every run of non-word characters turned into
/// a single `_`.
///
/// ```
/// use pointfree::exercises::{cars, sanitize_names};
///
/// assert_eq!(sanitize_names(cars())[4], "aston_martin_one_77");
/// ```
pub fn sanitize_names(cars: Vec<Car>) -> Vec<String> {
    let underscore = replace::<String>(NON_WORD.clone(), "_");
    map(compose!(underscore, to_lower::<String>, |car: Car| car.name))(cars)
}

/// The formatted prices of the cars in stock, separated by `", "`.
pub fn available_prices(cars: Vec<Car>) -> String {
    compose!(
        join::<String>(", "),
        map(compose!(format_money, |car: Car| car.dollar_value)),
        filter(|car: &Car| car.in_stock),
    )(cars)
}

/// Announces the car with the most horsepower. `Nothing` for no cars.
///
/// When several cars share the top horsepower the one listed last wins.
pub fn fastest_car(cars: Vec<Car>) -> Maybe<String> {
    compose!(
        fmap(|name: String| name + " is the fastest"),
        chain(prop::<String, Car>("name")),
        last::<Vec<Car>>,
        sort_by(|car: &Car| car.horsepower),
    )(cars)
}
