//! # Sequin: Callback Sequencing and Masked Input
//!
//! Write a pipeline of callback-accepting operations as straight-line
//! sequential code, and collect password-style input from a host whose input
//! surface echoes everything typed into it.
//!
//! ## Core Modules
//!
//! - **[`chain`]**: the sequencer. Drives an explicit state machine
//!   ([`chain::Sequence`]) one step at a time through a single re-entrant
//!   continuation, with fire-and-forget, blocking, and (behind the `futures`
//!   feature) future-based ways of waiting for the terminal value.
//! - **[`panel`]**: a masked input controller built on two host callbacks
//!   (on-submit, on-change) plus a mask-render command that overwrites the
//!   visible text with mask characters.
//!
//! ## Key Features
//!
//! - **Straight-line pipelines**: each step receives a continuation and the
//!   next step only begins once that continuation fires
//! - **Value threading**: a continuation can resume the sequence plainly or
//!   with a result for the step that requested it
//! - **Sync/async bridging**: [`chain::run`] parks the caller until the
//!   terminal value arrives, no matter which thread produces it
//!
//! ## Example
//!
//! ```
//! use sequin::chain::{self, Continuation, Flow, Resume};
//!
//! # fn main() -> sequin::Result<()> {
//! // Two steps: the first completes synchronously with a value, the body
//! // then terminates with it.
//! let mut stage = 0;
//! let value = chain::run(move |resume: Resume<i32>| -> Flow<i32, i32> {
//!     match (stage, resume) {
//!         (0, Resume::Empty) => {
//!             stage = 1;
//!             Flow::step(|cb: Continuation<i32, i32>| {
//!                 let _ = cb.resume_with(41);
//!             })
//!         }
//!         (_, Resume::Value(n)) => Flow::Done(n + 1),
//!         (_, Resume::Empty) => unreachable!(),
//!     }
//! })?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

mod error;
mod mutex;

pub mod chain;
pub mod panel;

pub use crate::error::*;
