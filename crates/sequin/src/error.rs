//! Error types for the callback sequencer.
//!
//! The sequencer's failure surface is deliberately small: a step that panics
//! propagates at the point of invocation and nothing here catches it, while a
//! step that never fires its continuation is not an error at all (the
//! pipeline simply stalls). The cases below are the ones a caller can
//! actually observe and act on.

/// Result type alias for sequencer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// All possible errors the sequencer can produce.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A continuation fired after the sequence already terminated.
    ///
    /// Each continuation is expected to fire at most once per step; a second
    /// invocation after the terminal value was produced lands here.
    #[error("sequence already exhausted")]
    SequenceExhausted,

    /// Every live continuation was dropped before the sequence terminated.
    ///
    /// A step that discards its continuation without firing it can never
    /// complete the pipeline, so the blocked caller is released with this
    /// error instead of parking forever. A pipeline whose continuation is
    /// still held somewhere blocks indefinitely, as documented on
    /// [`crate::chain::run`].
    #[error("all continuations dropped before the sequence terminated")]
    Stalled,

    /// The deadline passed before the terminal value arrived.
    ///
    /// Only produced by [`crate::chain::run_for`].
    #[error("timed out waiting for the terminal value")]
    WaitTimeout,
}
