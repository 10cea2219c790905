//! Task - deferred asynchronous computations that succeed or fail.
//!
//! A `Task<E, A>` describes work that eventually settles with a success value
//! `A` or a failure `E`. Constructing or mapping a task schedules nothing.
//! [`Task::fork`] starts it in the background on the current
//! [`LocalSet`](tokio::task::LocalSet), and [`Task::run`] gives an awaitable
//! result for callers already running on that timeline.
//!
//! Tasks live on a single cooperative timeline: they are `!Send`, share their
//! description through `Rc`, and are spawned with
//! [`spawn_local`](tokio::task::spawn_local). Each fork or run starts the
//! underlying computation afresh, so side effects repeat; nothing is memoized.
//!
//! # Settling exactly once
//!
//! The general constructor hands the computation a [`Settle`] handle. Its
//! `resolve` and `reject` methods consume it and return the [`Settled`]
//! token the computation's future must produce, so a computation can neither
//! settle twice nor finish without settling.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::effect::Task;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let task: Task<String, &str> = Task::new(|settle| async move {
//!             tokio::time::sleep(Duration::from_millis(5)).await;
//!             settle.resolve("love")
//!         });
//!         let shouting = task.map(str::to_uppercase);
//!         assert_eq!(shouting.run().await, Ok("LOVE".to_string()));
//!     })
//!     .await;
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, FutureExt, LocalBoxFuture};
use static_assertions::assert_not_impl_any;
use tokio::task::JoinHandle;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

type Computation<E, A> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<A, E>>>;

/// The one-shot resolver handed to [`Task::new`].
pub struct Settle<E, A> {
    marker: PhantomData<fn(E, A)>,
}

impl<E, A> Settle<E, A> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Settles the task successfully with `value`.
    pub fn resolve(self, value: A) -> Settled<E, A> {
        Settled { outcome: Ok(value) }
    }

    /// Settles the task as failed with `error`.
    pub fn reject(self, error: E) -> Settled<E, A> {
        Settled {
            outcome: Err(error),
        }
    }
}

/// Proof that a [`Settle`] handle was used. Only `Settle` can build one.
#[must_use = "a task computation must return the value produced by `resolve` or `reject`"]
pub struct Settled<E, A> {
    outcome: Result<A, E>,
}

/// A deferred asynchronous computation with a failure type `E` and a success
/// type `A`.
pub struct Task<E, A> {
    computation: Computation<E, A>,
}

assert_not_impl_any!(Task<String, i32>: Send, Sync);

impl<E, A> Clone for Task<E, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<E: 'static, A: 'static> Task<E, A> {
    /// Creates a task from a computation that settles through `Settle`.
    ///
    /// The computation is invoked once per fork or run, never at construction.
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn(Settle<E, A>) -> Fut + 'static,
        Fut: Future<Output = Settled<E, A>> + 'static,
    {
        Self {
            computation: Rc::new(move || {
                computation(Settle::new())
                    .map(|settled| settled.outcome)
                    .boxed_local()
            }),
        }
    }

    /// Creates a task from a factory of `Result`-producing futures.
    pub fn from_fn<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<A, E>> + 'static,
    {
        Self {
            computation: Rc::new(move || action().boxed_local()),
        }
    }

    /// A task that resolves with `value` as soon as it is started.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_fn(move || future::ready(Ok(value.clone())))
    }

    /// A task that rejects with `error` as soon as it is started.
    pub fn rejected(error: E) -> Self
    where
        E: Clone,
    {
        Self::from_fn(move || future::ready(Err(error.clone())))
    }

    /// A task that resolves with `value` once `duration` has elapsed.
    ///
    /// The timer starts when the task is started, not when it is built.
    pub fn after(duration: Duration, value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |settle| {
            let value = value.clone();
            async move {
                tokio::time::sleep(duration).await;
                settle.resolve(value)
            }
        })
    }

    /// Transforms the eventual success value. Rejections pass through.
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::from_fn(move || {
            let running = (self.computation)();
            let function = Rc::clone(&function);
            async move { running.await.map(|value| function(value)) }
        })
    }

    /// Transforms the eventual failure. Successes pass through.
    pub fn map_rejected<G, F>(self, function: F) -> Task<G, A>
    where
        F: Fn(E) -> G + 'static,
        G: 'static,
    {
        let function = Rc::new(function);
        Task::from_fn(move || {
            let running = (self.computation)();
            let function = Rc::clone(&function);
            async move { running.await.map_err(|error| function(error)) }
        })
    }

    /// Starts the task produced by `function` once this one resolves.
    pub fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::from_fn(move || {
            let running = (self.computation)();
            let function = Rc::clone(&function);
            async move {
                match running.await {
                    Ok(value) => function(value).run().await,
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Runs both tasks one after the other and combines their values.
    ///
    /// The first rejection wins; `other` is not started if `self` rejects.
    pub fn map2<B, C, F>(self, other: Task<E, B>, function: F) -> Task<E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let function = Rc::new(function);
        Task::from_fn(move || {
            let first = (self.computation)();
            let second = other.run();
            let function = Rc::clone(&function);
            async move {
                let first = first.await?;
                let second = second.await?;
                Ok::<C, E>(function(first, second))
            }
        })
    }

    /// Returns a future that starts the task when first polled and yields
    /// its outcome.
    pub fn run(&self) -> impl Future<Output = Result<A, E>> + use<E, A> {
        let computation = Rc::clone(&self.computation);
        async move { computation().await }
    }

    /// Starts the task in the background and routes its outcome to exactly
    /// one of the two handlers.
    ///
    /// The work is scheduled, not executed inline: neither handler has run
    /// when `fork` returns. Each call starts the computation again.
    ///
    /// # Panics
    ///
    /// Panics if called outside a [`LocalSet`](tokio::task::LocalSet).
    pub fn fork<R, S>(&self, on_reject: R, on_resolve: S) -> JoinHandle<()>
    where
        R: FnOnce(E) + 'static,
        S: FnOnce(A) + 'static,
    {
        let running = self.run();
        tracing::trace!("task forked");
        tokio::task::spawn_local(async move {
            match running.await {
                Ok(value) => {
                    tracing::trace!("task resolved");
                    on_resolve(value);
                }
                Err(error) => {
                    tracing::trace!("task rejected");
                    on_reject(error);
                }
            }
        })
    }
}

impl<E, A> fmt::Display for Task<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<E, A> TypeConstructor for Task<E, A> {
    type Inner = A;
    type WithType<B> = Task<E, B>;
}

impl<E: 'static, A: 'static> Functor for Task<E, A> {
    fn fmap<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<E: 'static, A: 'static> Applicative for Task<E, A> {
    fn pure<B>(value: B) -> Task<E, B>
    where
        B: Clone + 'static,
    {
        Task::of(value)
    }

    fn map2<B, C, F>(self, other: Task<E, B>, function: F) -> Task<E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::map2(self, other, function)
    }
}

impl<E: 'static, A: 'static> Monad for Task<E, A> {
    fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_task_of_resolves() {
        let task: Task<String, i32> = Task::of(7);
        assert_eq!(task.run().await, Ok(7));
    }

    #[tokio::test]
    async fn test_task_rejected_skips_map() {
        let task: Task<String, i32> = Task::rejected("boom".to_string());
        let mapped = task.map(|n| n * 2).map(|n| n + 1);
        assert_eq!(mapped.run().await, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_task_construction_is_lazy() {
        let started = Rc::new(Cell::new(false));
        let flag = Rc::clone(&started);
        let task: Task<String, i32> = Task::new(move |settle| {
            flag.set(true);
            async move { settle.resolve(1) }
        });
        let mapped = task.map(|n| n + 1);
        assert!(!started.get());
        assert_eq!(mapped.run().await, Ok(2));
        assert!(started.get());
    }

    #[tokio::test]
    async fn test_task_flat_map_sequences() {
        let task: Task<String, i32> = Task::of(2);
        let chained = task.flat_map(|n| Task::of(n * 10));
        assert_eq!(chained.run().await, Ok(20));
    }

    #[tokio::test]
    async fn test_task_map_rejected_changes_error() {
        let task: Task<&str, i32> = Task::rejected("short");
        let mapped = task.map_rejected(str::len);
        assert_eq!(mapped.run().await, Err(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fork_is_scheduled_not_inline() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let seen = Rc::new(RefCell::new(Vec::new()));
                let resolved = Rc::clone(&seen);
                let task: Task<String, i32> = Task::of(3);

                let handle = task.fork(|_| {}, move |value| resolved.borrow_mut().push(value));
                assert!(seen.borrow().is_empty());

                handle.await.unwrap();
                assert_eq!(*seen.borrow(), vec![3]);
            })
            .await;
    }

    #[test]
    fn test_task_display() {
        let task: Task<String, i32> = Task::of(1);
        assert_eq!(task.to_string(), "<Task>");
    }
}
