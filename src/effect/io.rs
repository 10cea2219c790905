//! IO - deferred synchronous side effects.
//!
//! An `IO<A>` describes a computation producing an `A`. Building or mapping
//! an `IO` performs no work; only [`IO::run`] does. Every call to `run`
//! executes the whole chain again, side effects included: nothing is cached.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::effect::IO;
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use pointfree::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let ticks = Rc::clone(&counter);
//!
//! let tick = IO::new(move || {
//!     ticks.set(ticks.get() + 1);
//!     ticks.get()
//! });
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(tick.run(), 1);
//! assert_eq!(tick.run(), 2);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;
use std::time::Duration;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A description of a synchronous computation that may perform side effects.
///
/// Cloning an `IO` shares the description; each clone re-executes it when run.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::of(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::of) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Rc<dyn Fn() -> A>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a closure.
    ///
    /// The closure is not called until [`IO::run`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value. Running it hands out a clone of `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the computation chain and returns its result.
    ///
    /// Side effects embedded in the chain happen once per call.
    pub fn run(&self) -> A {
        (self.run_io)()
    }

    /// Returns a new IO that runs this one and then applies `function`.
    ///
    /// ```rust
    /// use pointfree::effect::IO;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()).run())
    }

    /// Sequences `next` after this action, keeping only the result of `next`.
    ///
    /// ```rust
    /// use pointfree::effect::IO;
    ///
    /// let io = IO::of(10).then(IO::of(20));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both actions, left first, and combines their results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run();
            function(first, other.run())
        })
    }

    /// Recovers from a panic raised while running `io`.
    ///
    /// `handler` receives the panic message and supplies the value instead.
    ///
    /// ```rust
    /// use pointfree::effect::IO;
    ///
    /// let panicking: IO<String> = IO::new(|| panic!("oops"));
    /// let recovered = IO::catch(panicking, |message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run(), "recovered from oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        IO::new(move || match catch_unwind(AssertUnwindSafe(|| io.run())) {
            Ok(value) => value,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|message| (*message).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                handler(message)
            }
        })
    }
}

impl IO<()> {
    /// An action that emits `message` as an `info` tracing event when run.
    pub fn log<S>(message: S) -> Self
    where
        S: fmt::Display + 'static,
    {
        IO::new(move || tracing::info!("{message}"))
    }

    /// An action that blocks the current thread for `duration` when run.
    pub fn delay(duration: Duration) -> Self {
        IO::new(move || std::thread::sleep(duration))
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<IO>")
    }
}

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: 'static> Applicative for IO<A> {
    fn pure<B>(value: B) -> IO<B>
    where
        B: Clone + 'static,
    {
        IO::of(value)
    }

    fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::map2(self, other, function)
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
