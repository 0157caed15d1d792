//! Masked input on top of an echoing host input panel.
//!
//! Hosts in scope here expose exactly one single-line input surface, and
//! that surface echoes every character typed into it. Password-style entry
//! therefore has to be reconstructed from the outside: after every change
//! event the controller diffs the visible text against the mask, splices the
//! real characters into a private hidden buffer, and immediately overwrites
//! the surface with mask characters again.
//!
//! - [`InputHost`] / [`InputSurface`]: the two host capabilities consumed
//! - [`show_masked_input`]: callback-style masked entry
//! - [`read_masked`]: blocking masked entry, built on [`crate::chain`]
//! - [`mask_string`] / [`render_masked`]: the mask-render command

mod host;
mod mask;
mod prompt;


pub use host::*;
pub use mask::*;
pub use prompt::*;
