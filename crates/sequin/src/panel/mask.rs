use super::host::InputSurface;

/// The character every masked position renders as.
pub const MASK_CHAR: char = '*';

/// Returns exactly `len` mask characters.
pub fn mask_string(len: usize) -> String {
    (0..len).map(|_| MASK_CHAR).collect()
}

/// The mask-render command: overwrites the entire surface with `len` mask
/// characters.
pub fn render_masked<S: InputSurface>(surface: &S, len: usize) {
    surface.replace_all(&mask_string(len));
}

/// Decomposition of visible panel text into a leading mask run, a non-mask
/// middle run, and a trailing mask run.
///
/// Run lengths are counted in characters. Parsing is anchored at the start
/// of the text and stops after the trailing run, mirroring the pattern
/// `^(\**)([^*]+)(\**)`: anything past the trailing run is ignored, and
/// text that is empty or fully masked does not parse at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRuns<'a> {
    /// Characters of leading mask.
    pub leading: usize,
    /// The maximal run of real (non-mask) characters after the leading run.
    pub middle: &'a str,
    /// Characters of mask immediately following the middle run.
    pub trailing: usize,
}

impl<'a> MaskRuns<'a> {
    /// Splits `text` into its three runs, or `None` when no non-mask
    /// character exists.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mid_start = text
            .char_indices()
            .find(|&(_, c)| c != MASK_CHAR)
            .map(|(i, _)| i)?;
        let leading = text[..mid_start].chars().count();

        let after_mid = &text[mid_start..];
        let mid_len = after_mid
            .char_indices()
            .find(|&(_, c)| c == MASK_CHAR)
            .map(|(i, _)| i)
            .unwrap_or(after_mid.len());
        let middle = &after_mid[..mid_len];

        let trailing = after_mid[mid_len..]
            .chars()
            .take_while(|&c| c == MASK_CHAR)
            .count();

        Some(Self {
            leading,
            middle,
            trailing,
        })
    }
}
