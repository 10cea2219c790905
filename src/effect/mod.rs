//! Deferred computations.
//!
//! - [`IO`]: a synchronous computation that runs on every [`IO::run`]
//! - [`Task`]: an asynchronous computation that settles with a success or a
//!   failure once forked (requires the `async` feature)
//!
//! Neither type does any work when it is built or mapped. Both re-execute
//! their computation each time they are started.
//!
//! ```rust
//! use pointfree::effect::IO;
//!
//! let io = IO::of(10).map(|x| x * 2).flat_map(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//! ```

mod io;
#[cfg(feature = "async")]
mod task;

pub use io::IO;
#[cfg(feature = "async")]
pub use task::{Settle, Settled, Task};
