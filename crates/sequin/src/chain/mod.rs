//! The callback sequencer.
//!
//! A [`Sequence`] is an explicit state machine that, each time it is
//! advanced, either yields the next [`Step`] (a closure accepting a
//! [`Continuation`]) or terminates with a final value. The driver in this
//! module pulls steps one at a time and hands every step the same
//! continuation, so a chain of host callbacks reads as straight-line code
//! instead of a nested-callback pyramid.
//!
//! Exactly one step is in flight at any time: the next step is only pulled
//! after the previous step's continuation fires. The continuation can resume
//! the sequence plainly ([`Continuation::resume`]) or thread a value back to
//! the resume point ([`Continuation::resume_with`]).
//!
//! Three ways to drive a sequence:
//!
//! - [`spawn`]: fire-and-forget, the terminal value is discarded
//! - [`run`] / [`run_for`]: park the caller until the terminal value arrives
//! - `run_future`: await the terminal value (`futures` feature)
//!
//! ```
//! use sequin::chain::{self, Continuation, Flow, Resume};
//!
//! // A sequence whose single step completes from another thread.
//! let mut opened = false;
//! let value = chain::run(move |resume: Resume<String>| -> Flow<String, String> {
//!     if !opened {
//!         opened = true;
//!         Flow::step(|cb: Continuation<String, String>| {
//!             std::thread::spawn(move || {
//!                 let _ = cb.resume_with("ready".to_owned());
//!             });
//!         })
//!     } else {
//!         match resume {
//!             Resume::Value(text) => Flow::Done(text),
//!             Resume::Empty => unreachable!(),
//!         }
//!     }
//! });
//! assert_eq!(value.as_deref(), Ok("ready"));
//! ```

mod driver;
mod flow;
mod sequence;

#[cfg(feature = "futures")]
mod future;
#[cfg(test)]
mod tests;

pub use driver::*;
pub use flow::*;
#[cfg(feature = "futures")]
pub use future::*;
pub use sequence::*;
