use super::{Flow, Resume};

/// An ordered, lazily-produced sequence of steps plus an eventual terminal
/// value.
///
/// This is the explicit state-machine rendering of a generator paused at
/// yield points: the driver advances the sequence from outside, feeding in
/// the payload of the continuation that just fired, and the sequence answers
/// with either the next step or its terminal value.
///
/// `I` is the type a continuation can thread back into the sequence; `V` is
/// the terminal value type.
///
/// Any `FnMut(Resume<I>) -> Flow<I, V>` closure is a sequence, which keeps
/// simple bodies free of boilerplate: capture a stage counter, match on it,
/// and return the next [`Flow`].
pub trait Sequence<I, V> {
    /// Advances the sequence past its current resume point.
    ///
    /// The first call always receives [`Resume::Empty`]. Every later call
    /// carries whatever the step's continuation was fired with. A panic from
    /// inside the sequence body propagates to whoever fired the
    /// continuation; the driver neither catches nor retries.
    fn advance(&mut self, resume: Resume<I>) -> Flow<I, V>;
}

impl<I, V, F> Sequence<I, V> for F
where
    F: FnMut(Resume<I>) -> Flow<I, V>,
{
    fn advance(&mut self, resume: Resume<I>) -> Flow<I, V> {
        self(resume)
    }
}
