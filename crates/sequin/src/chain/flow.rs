use super::driver::Continuation;

/// The payload a continuation feeds back into a [`Sequence`].
///
/// Distinguishes "resume plainly" from "resume with a result": a step that
/// fires [`Continuation::resume`] produces [`Resume::Empty`] at the next
/// resume point, while [`Continuation::resume_with`] produces
/// [`Resume::Value`]. The very first advance of a sequence always receives
/// [`Resume::Empty`], since no step has run yet.
///
/// [`Sequence`]: super::Sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resume<I> {
    /// The previous step resumed without injecting a result.
    Empty,
    /// The previous step resumed with a result for the sequence.
    Value(I),
}

impl<I> Resume<I> {
    /// Returns the threaded value, if any.
    pub fn into_value(self) -> Option<I> {
        match self {
            Resume::Empty => None,
            Resume::Value(value) => Some(value),
        }
    }

    /// Returns `true` when the sequence was resumed plainly.
    pub fn is_empty(&self) -> bool {
        matches!(self, Resume::Empty)
    }
}

/// A single callback-accepting unit of work in a chained sequence.
///
/// A step takes exactly one argument, the [`Continuation`], performs some
/// possibly-asynchronous action, and eventually fires the continuation zero
/// or one time. A step that never fires it stalls the pipeline; no timeout
/// is imposed here.
pub type Step<I, V> = Box<dyn FnOnce(Continuation<I, V>)>;

/// The outcome of advancing a [`Sequence`]: either the next step to run, or
/// normal termination with the terminal value.
///
/// Exhaustion is a termination signal, not an error; [`Flow::Done`] is how a
/// sequence declares its result.
///
/// [`Sequence`]: super::Sequence
pub enum Flow<I, V> {
    /// More steps remain; run this one next.
    Step(Step<I, V>),
    /// The sequence is exhausted; this is its terminal value.
    Done(V),
}

impl<I, V> Flow<I, V> {
    /// Boxes a closure into [`Flow::Step`].
    pub fn step(f: impl FnOnce(Continuation<I, V>) + 'static) -> Self {
        Flow::Step(Box::new(f))
    }
}
