//! Tests for the tracing events emitted by IO and the save exercise.

#![cfg(feature = "effect")]

use std::fmt;
use std::sync::{Arc, Mutex};

use pointfree::effect::IO;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct MessageRecorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageRecorder {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for MessageRecorder {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages.lock().unwrap().push(message);
        }
    }
}

fn recording<T>(body: impl FnOnce() -> T) -> (T, Vec<String>) {
    let recorder = MessageRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, recorder.messages())
}

#[test]
fn log_is_deferred_until_run() {
    let ((), before_run) = recording(|| {
        let _unused = IO::log("hello");
    });
    assert!(before_run.is_empty());

    let ((), messages) = recording(|| {
        let io = IO::log("hello");
        io.run();
        io.run();
    });
    assert_eq!(messages, vec!["hello", "hello"]);
}

#[cfg(feature = "exercises")]
#[test]
fn save_logs_only_on_the_valid_path() {
    use pointfree::exercises::save_if_valid;

    let (saved, messages) = recording(|| save_if_valid("fpguy99").run());
    assert_eq!(saved, "fpguy99-saved");
    assert_eq!(messages, vec!["SAVED USER!"]);

    let (rejected, messages) = recording(|| save_if_valid("abc").run());
    assert_eq!(rejected, "You need > 3");
    assert!(messages.is_empty());
}

#[cfg(feature = "exercises")]
#[test]
fn building_the_save_action_logs_nothing() {
    use pointfree::exercises::save_if_valid;

    let (_io, messages) = recording(|| save_if_valid("fpguy99"));
    assert!(messages.is_empty());
}
