//! Fixed-arity currying: `curry2!`, `curry3!` and `curry4!`.
//!
//! A curried function takes its arguments one call at a time. Every closure
//! in the chain is `Fn`, so a partially applied function can be stored and
//! called again with different remaining arguments. Arguments supplied early
//! are cloned on each later call, which means they must implement [`Clone`].

/// Curries a two-argument function.
///
/// ```
/// use pointfree::curry2;
///
/// let split = curry2!(|separator: char, text: &'static str| {
///     text.split(separator).collect::<Vec<_>>()
/// });
/// let words = split(' ');
/// assert_eq!(words("Jingle bells"), vec!["Jingle", "bells"]);
/// assert_eq!(words("Batman smells"), vec!["Batman", "smells"]);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// ```
/// use pointfree::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// let percent = clamp(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// assert_eq!(clamp(0)(100)(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// ```
/// use pointfree::curry4;
///
/// let sum = curry4!(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
/// assert_eq!(sum(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
