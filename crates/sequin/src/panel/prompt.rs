use std::sync::Arc;

use super::host::{InputHost, InputSurface, PanelEvents};
use super::mask::{MaskRuns, render_masked};
use crate::chain::{self, Continuation, Flow, Resume};
use crate::mutex::{Mutex, lock};
use crate::Result;

/// Per-invocation state of a masked input panel.
///
/// `hidden` is the true text the user has typed; the surface only ever shows
/// mask characters. `surface` is written once, after the host returns the
/// handle, and may be observed empty by change events the host fires before
/// then.
struct Session<S> {
    hidden: Vec<char>,
    surface: Option<S>,
}

impl<S: InputSurface> Session<S> {
    fn on_change(&mut self, visible: &str) {
        match MaskRuns::parse(visible) {
            Some(runs) => {
                self.splice(&runs);
                // Restore the all-mask display at the new true length. With
                // no surface handle yet the re-mask is deferred to the next
                // event; the buffer update above already happened.
                if let Some(surface) = &self.surface {
                    render_masked(surface, self.hidden.len());
                }
            }
            None => {
                // Fully-masked text carries no information about what was
                // deleted, so infer a trailing truncation from the cursor.
                // The surface handle is missing on the very first change
                // event, which makes that event a no-op.
                let Some(surface) = &self.surface else { return };
                let pos = surface.selection_start();
                self.truncate(pos, visible.chars().count());
            }
        }
    }

    /// Splices the middle run into the hidden buffer at the position implied
    /// by the leading/trailing run lengths:
    /// `hidden[..pre] ++ middle ++ hidden[len - post..]`, with both mask
    /// runs clamped to the buffer.
    fn splice(&mut self, runs: &MaskRuns<'_>) {
        let len = self.hidden.len();
        let pre = runs.leading.min(len);
        let tail_start = len.saturating_sub(runs.trailing);

        let mut next = Vec::with_capacity(pre + runs.middle.len() + (len - tail_start));
        next.extend_from_slice(&self.hidden[..pre]);
        next.extend(runs.middle.chars());
        next.extend_from_slice(&self.hidden[tail_start..]);
        self.hidden = next;
    }

    /// Applies the deletion approximation
    /// `hidden[..pos] ++ hidden[pos..visible_len]`: a trailing truncation to
    /// the visible length when the cursor sits inside it, and to the cursor
    /// position when the cursor sits past it. A re-mask echo (all-mask text
    /// of the current length, cursor at the end) is a no-op here.
    fn truncate(&mut self, pos: usize, visible_len: usize) {
        let keep = pos.max(visible_len).min(self.hidden.len());
        self.hidden.truncate(keep);
    }
}

/// Opens a masked input panel on `host`.
///
/// The panel opens with empty visible text. Every change event re-derives
/// the hidden buffer from the visible text and overwrites the surface with
/// mask characters, so the real input never stays on screen. On submit,
/// `on_done` receives the accumulated hidden text; on dismissal `on_cancel`
/// fires instead. Each fires at most once, and never both.
///
/// The deletion recovery in the fully-masked case is an approximation by
/// cursor position: a deletion that is not a simple trailing truncation can
/// silently produce an incorrect hidden buffer.
pub fn show_masked_input<H, D, C>(host: &H, prompt: &str, on_done: D, on_cancel: C)
where
    H: InputHost,
    D: FnOnce(String) + Send + 'static,
    C: FnOnce() + Send + 'static,
{
    let session: Arc<Mutex<Session<H::Surface>>> = Arc::new(Mutex::new(Session {
        hidden: Vec::new(),
        surface: None,
    }));

    let done_session = Arc::clone(&session);
    let change_session = Arc::clone(&session);
    let mut on_done = Some(on_done);
    let mut on_cancel = Some(on_cancel);

    let events = PanelEvents {
        // The visible text at submit time is all masks; the hidden buffer
        // is the real input.
        on_done: Box::new(move |_visible: &str| {
            if let Some(done) = on_done.take() {
                let hidden: String = lock(&done_session).hidden.iter().collect();
                done(hidden);
            }
        }),
        on_change: Box::new(move |visible: &str| {
            lock(&change_session).on_change(visible);
        }),
        on_cancel: Box::new(move || {
            if let Some(cancel) = on_cancel.take() {
                cancel();
            }
        }),
    };

    let surface = host.show_input_panel(prompt, "", events);
    lock(&session).surface = Some(surface);
}

/// Opens a masked input panel and parks the caller until the user submits
/// or cancels.
///
/// Returns `Ok(Some(hidden))` on submit and `Ok(None)` on cancel. This is a
/// one-step [`chain`] pipeline: the step opens the panel, the host's submit
/// and cancel hooks fire the continuation, and the threaded value becomes
/// the terminal value the caller is parked on.
///
/// # Errors
///
/// Returns [`crate::Error::Stalled`] if the host drops its panel hooks
/// without ever firing one.
pub fn read_masked<H>(host: H, prompt: &str) -> Result<Option<String>>
where
    H: InputHost + Send + 'static,
{
    let prompt = prompt.to_owned();
    let mut host = Some(host);

    chain::run(
        move |resume: Resume<Option<String>>| -> Flow<Option<String>, Option<String>> {
            match resume {
                Resume::Empty => {
                    let host = host.take();
                    let prompt = prompt.clone();
                    Flow::step(
                        move |cb: Continuation<Option<String>, Option<String>>| {
                            let Some(host) = host else { return };
                            let submit = cb.clone();
                            show_masked_input(
                                &host,
                                &prompt,
                                move |hidden| {
                                    let _ = submit.resume_with(Some(hidden));
                                },
                                move || {
                                    let _ = cb.resume_with(None);
                                },
                            );
                        },
                    )
                }
                Resume::Value(value) => Flow::Done(value),
            }
        },
    )
}
