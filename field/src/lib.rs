//! Masked input state for editor integrations.
//!
//! [`MaskedField`] holds what a text widget shows (formatted text and
//! selection) and routes every edit through `formatter`. Widgets forward
//! their edit requests here and render the result.

mod field;
mod selector;

pub use field::MaskedField;
pub use formatter::{CaretAnchor, EditOptions, EditOutcome, EditRequest, EditVeto, Mask};
pub use selector::MaskSelector;

#[cfg(test)]
mod tests;
