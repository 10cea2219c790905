//! Integration tests for Task on a single-threaded `LocalSet`.

#![cfg(feature = "async")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use pointfree::effect::Task;
use pointfree::typeclass::{Applicative, Functor};
use tokio::task::LocalSet;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Post {
    id: u32,
    title: String,
}

fn delayed_post() -> Task<String, Post> {
    Task::new(|settle| async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        settle.resolve(Post {
            id: 1,
            title: "love".to_string(),
        })
    })
}

#[tokio::test(start_paused = true)]
async fn forked_post_reaches_resolve_handler_uppercased() {
    LocalSet::new()
        .run_until(async {
            let resolved = Rc::new(RefCell::new(None));
            let rejected = Rc::new(Cell::new(false));
            let on_resolve = Rc::clone(&resolved);
            let on_reject = Rc::clone(&rejected);

            let shouting = delayed_post().map(|post| Post {
                title: post.title.to_uppercase(),
                ..post
            });
            let handle = shouting.fork(
                move |_: String| on_reject.set(true),
                move |post| *on_resolve.borrow_mut() = Some(post),
            );
            handle.await.unwrap();

            assert_eq!(
                *resolved.borrow(),
                Some(Post {
                    id: 1,
                    title: "LOVE".to_string(),
                })
            );
            assert!(!rejected.get());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn rejection_skips_maps_and_resolve_handler() {
    LocalSet::new()
        .run_until(async {
            let mapped = Rc::new(Cell::new(false));
            let was_mapped = Rc::clone(&mapped);
            let errors = Rc::new(RefCell::new(Vec::new()));
            let on_reject = Rc::clone(&errors);

            let task: Task<String, i32> = Task::new(|settle| async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                settle.reject("timeout".to_string())
            });
            let handle = task
                .map(move |n| {
                    was_mapped.set(true);
                    n + 1
                })
                .fork(
                    move |error| on_reject.borrow_mut().push(error),
                    |_| panic!("resolve handler must not run"),
                );
            handle.await.unwrap();

            assert!(!mapped.get());
            assert_eq!(*errors.borrow(), vec!["timeout".to_string()]);
        })
        .await;
}

#[tokio::test]
async fn forking_twice_runs_the_computation_twice() {
    LocalSet::new()
        .run_until(async {
            let starts = Rc::new(Cell::new(0));
            let counted = Rc::clone(&starts);
            let task: Task<String, u32> = Task::new(move |settle| {
                counted.set(counted.get() + 1);
                let value = counted.get();
                async move { settle.resolve(value) }
            });
            assert_eq!(starts.get(), 0);

            let seen = Rc::new(RefCell::new(Vec::new()));
            let first_seen = Rc::clone(&seen);
            let second_seen = Rc::clone(&seen);
            let first = task.fork(|_| {}, move |n| first_seen.borrow_mut().push(n));
            let second = task.fork(|_| {}, move |n| second_seen.borrow_mut().push(n));
            first.await.unwrap();
            second.await.unwrap();

            assert_eq!(starts.get(), 2);
            assert_eq!(*seen.borrow(), vec![1, 2]);
        })
        .await;
}

#[tokio::test]
async fn maps_run_in_order_before_the_handler() {
    LocalSet::new()
        .run_until(async {
            let trail = Rc::new(RefCell::new(Vec::new()));
            let (first, second, handler) = (Rc::clone(&trail), Rc::clone(&trail), Rc::clone(&trail));

            let task: Task<String, i32> = Task::of(1);
            task.map(move |n| {
                first.borrow_mut().push("first map");
                n + 1
            })
            .map(move |n| {
                second.borrow_mut().push("second map");
                n * 10
            })
            .fork(|_| {}, move |n| handler.borrow_mut().push(if n == 20 { "resolved 20" } else { "wrong" }))
            .await
            .unwrap();

            assert_eq!(*trail.borrow(), vec!["first map", "second map", "resolved 20"]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn after_waits_for_the_timer() {
    let started = tokio::time::Instant::now();
    let task: Task<String, &str> = Task::after(Duration::from_secs(2), "ready");
    assert_eq!(task.run().await, Ok("ready"));
    assert!(started.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn applicative_and_functor_through_traits() {
    let pure: Task<String, i32> = <Task<String, ()>>::pure(4);
    let sum = pure.map2(Task::of(5), |a, b| a + b).fmap(|n| n * 2);
    assert_eq!(sum.run().await, Ok(18));
}

#[tokio::test]
async fn map2_stops_at_first_rejection() {
    let second_started = Rc::new(Cell::new(false));
    let flag = Rc::clone(&second_started);
    let failing: Task<&str, i32> = Task::rejected("first");
    let second: Task<&str, i32> = Task::from_fn(move || {
        flag.set(true);
        async { Ok(1) }
    });
    assert_eq!(failing.map2(second, |a, b| a + b).run().await, Err("first"));
    assert!(!second_started.get());
}
