use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender};
use std::time::Duration;

#[cfg(feature = "futures")]
use futures::channel::oneshot;
#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{Flow, Resume, Sequence};
use crate::mutex::{Mutex, lock};
use crate::{Error, Result};

/// The single-write result slot a pipeline delivers its terminal value into.
///
/// `Sync` backs the blocking variants (capacity-one channel, so a value
/// produced before the caller starts waiting is simply buffered); `Oneshot`
/// backs the future variant; `Discard` is fire-and-forget. The sender is
/// consumed on delivery, which is what guarantees the at-most-one write.
pub(super) enum Slot<V> {
    Sync(SyncSender<V>),
    #[cfg(feature = "futures")]
    Oneshot(oneshot::Sender<V>),
    Discard,
}

struct Driver<I, V> {
    /// `None` once the sequence is exhausted; a continuation that fires
    /// afterwards observes [`Error::SequenceExhausted`].
    seq: Option<Box<dyn Sequence<I, V> + Send>>,
    slot: Slot<V>,
}

impl<I, V> Driver<I, V> {
    fn deliver(&mut self, value: V) {
        match std::mem::replace(&mut self.slot, Slot::Discard) {
            // One send into a capacity-one channel: never blocks. A receiver
            // that already gave up just drops the value.
            Slot::Sync(tx) => {
                let _ = tx.send(value);
            }
            #[cfg(feature = "futures")]
            Slot::Oneshot(tx) => {
                let _ = tx.send(value);
            }
            Slot::Discard => drop(value),
        }
    }
}

/// The callback passed to every step of a pipeline; firing it resumes the
/// sequence.
///
/// The same continuation is reused across the whole pipeline: when it fires,
/// the sequence advances, and the next step (if any) is invoked with a clone
/// of this same handle. Cloning is cheap and the handle is `Send` whenever
/// the terminal value is, so a step may hand it to a host callback or another
/// thread.
pub struct Continuation<I, V> {
    driver: Arc<Mutex<Driver<I, V>>>,
}

impl<I, V> Clone for Continuation<I, V> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
        }
    }
}

impl<I, V> Continuation<I, V> {
    /// Resumes the sequence plainly, without injecting a result.
    ///
    /// The resume point observes [`Resume::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] if the sequence already
    /// terminated.
    pub fn resume(&self) -> Result<()> {
        self.advance(Resume::Empty)
    }

    /// Resumes the sequence with a result for the step that requested
    /// continuation.
    ///
    /// The resume point observes [`Resume::Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] if the sequence already
    /// terminated.
    pub fn resume_with(&self, value: I) -> Result<()> {
        self.advance(Resume::Value(value))
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, resume)))]
    fn advance(&self, resume: Resume<I>) -> Result<()> {
        let step = {
            let mut driver = lock(&self.driver);
            let seq = driver.seq.as_mut().ok_or(Error::SequenceExhausted)?;
            match seq.advance(resume) {
                Flow::Step(step) => Some(step),
                Flow::Done(value) => {
                    driver.seq = None;
                    driver.deliver(value);
                    None
                }
            }
        };
        // The step runs outside the lock so a synchronously-completing step
        // can re-enter the driver through this same continuation. Stack
        // growth is linear only in the synchronous prefix of the pipeline.
        if let Some(step) = step {
            step(self.clone());
        }
        Ok(())
    }
}

/// Kicks a pipeline off: pulls the first flow and, if it is a step, invokes
/// it with a fresh continuation. The local continuation is dropped on return
/// so that slot receivers can detect a pipeline whose every handle is gone.
pub(super) fn launch<I, V, S>(seq: S, slot: Slot<V>)
where
    S: Sequence<I, V> + Send + 'static,
    I: 'static,
    V: Send + 'static,
{
    let driver = Arc::new(Mutex::new(Driver {
        seq: Some(Box::new(seq)),
        slot,
    }));
    let first = Continuation { driver };
    // The sequence is present, so the first advance cannot observe
    // exhaustion.
    let _ = first.advance(Resume::Empty);
}

/// Drives a sequence without waiting for its terminal value.
///
/// The first step is pulled and invoked before this returns; everything
/// after that happens whenever continuations fire. The terminal value, if
/// the sequence ever produces one, is discarded.
///
/// # Example
///
/// ```
/// use sequin::chain::{self, Continuation, Flow, Resume};
///
/// chain::spawn(|_: Resume<()>| -> Flow<(), &'static str> {
///     Flow::Done("nobody is listening")
/// });
/// ```
pub fn spawn<I, V, S>(seq: S)
where
    S: Sequence<I, V> + Send + 'static,
    I: 'static,
    V: Send + 'static,
{
    launch(seq, Slot::Discard);
}

/// Drives a sequence and parks the caller until the terminal value arrives.
///
/// The value may be produced synchronously (before this function starts
/// waiting) or asynchronously from a continuation fired on another thread;
/// both reach the caller without a lost wakeup. A sequence whose live
/// continuation never fires parks the caller indefinitely; use [`run_for`]
/// when that is unacceptable.
///
/// # Errors
///
/// Returns [`Error::Stalled`] if every continuation was dropped before the
/// sequence terminated.
///
/// # Example
///
/// ```
/// use sequin::chain::{self, Flow, Resume};
///
/// let value = chain::run(|_: Resume<()>| -> Flow<(), i32> { Flow::Done(7) });
/// assert_eq!(value, Ok(7));
/// ```
pub fn run<I, V, S>(seq: S) -> Result<V>
where
    S: Sequence<I, V> + Send + 'static,
    I: 'static,
    V: Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    launch(seq, Slot::Sync(tx));
    rx.recv().map_err(|_| Error::Stalled)
}

/// Like [`run`], but gives up once `timeout` passes.
///
/// # Errors
///
/// Returns [`Error::WaitTimeout`] when the deadline passes with the pipeline
/// still pending, or [`Error::Stalled`] if every continuation was dropped
/// before the sequence terminated.
pub fn run_for<I, V, S>(seq: S, timeout: Duration) -> Result<V>
where
    S: Sequence<I, V> + Send + 'static,
    I: 'static,
    V: Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    launch(seq, Slot::Sync(tx));
    match rx.recv_timeout(timeout) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => Err(Error::WaitTimeout),
        Err(RecvTimeoutError::Disconnected) => Err(Error::Stalled),
    }
}
