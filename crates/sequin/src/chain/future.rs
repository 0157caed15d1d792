use core::pin::Pin;
use core::task::{Context, Poll};

use futures::channel::oneshot;
use pin_project_lite::pin_project;

use super::driver::{Slot, launch};
use super::Sequence;
use crate::{Error, Result};

pin_project! {
    /// A future that resolves with a pipeline's terminal value.
    ///
    /// Created by [`run_future`]. The pipeline itself is already running;
    /// this future only observes the result slot, so dropping it does not
    /// cancel any in-flight step.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ValueFuture<V> {
        #[pin]
        slot: oneshot::Receiver<V>,
    }
}

impl<V> Future for ValueFuture<V> {
    type Output = Result<V>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.slot.poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(Error::Stalled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Drives a sequence and returns a future for its terminal value.
///
/// The first step is pulled and invoked before this returns, exactly as in
/// [`run`](super::run); only the wait is rendered as a future instead of a
/// parked thread, so the caller can await the value from any async runtime.
///
/// The future resolves to [`Error::Stalled`] if every continuation is
/// dropped before the sequence terminates, and never resolves while a live
/// continuation has yet to fire.
pub fn run_future<I, V, S>(seq: S) -> ValueFuture<V>
where
    S: Sequence<I, V> + Send + 'static,
    I: 'static,
    V: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    launch(seq, Slot::Oneshot(tx));
    ValueFuture { slot: rx }
}
