/// The hooks a host must wire to its input panel UI.
///
/// The host owns these for the lifetime of the panel and invokes them from
/// whatever thread its event loop runs on:
///
/// - `on_done(text)` fires on submit, with the visible text
/// - `on_change(text)` fires on every edit, with the new visible text
/// - `on_cancel()` fires on dismissal without submission
pub struct PanelEvents {
    pub on_done: Box<dyn FnMut(&str) + Send>,
    pub on_change: Box<dyn FnMut(&str) + Send>,
    pub on_cancel: Box<dyn FnMut() + Send>,
}

/// A handle to the visible text of an open input panel.
pub trait InputSurface {
    /// Overwrites the entire visible content of the surface.
    ///
    /// A replacement issued from inside a change hook must surface as a
    /// later change event, not a synchronous re-entry of the hook.
    fn replace_all(&self, text: &str);

    /// Start offset of the current selection, in characters.
    ///
    /// Used to approximate the cursor position when recovering a deletion
    /// that left only mask characters visible.
    fn selection_start(&self) -> usize;
}

/// An editor host capable of opening a one-line input panel.
///
/// The surface handle is returned only after the panel is open, so a host
/// may fire `on_change` before the caller holds the handle; consumers of
/// this trait must tolerate that window.
pub trait InputHost {
    type Surface: InputSurface + Send + 'static;

    /// Opens a one-line input UI showing `initial`, wired to `events`.
    fn show_input_panel(&self, prompt: &str, initial: &str, events: PanelEvents) -> Self::Surface;
}
