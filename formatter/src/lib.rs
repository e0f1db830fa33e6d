//! Mask-based text formatting for input fields.
//!
//! A [`Mask`] such as `"+7 (×××) ××× ×× ××"` turns the raw value
//! `"9170741111"` into `"+7 (917) 074 11 11"` and back. Every transform also
//! translates a range, so carets and selections stay on the same raw
//! characters while the displayed text changes.
//!
//! Pipeline for one keystroke: UTF-16 range → `char` range → unformat →
//! raw replacement → format → caret. See [`apply_edit`].
//!
//! Internal offsets count `char`s. UTF-16 conversion for host widgets lives
//! in [`offsets`].

mod config;
mod edit;
mod format;
mod mask;
pub mod offsets;
mod range;
mod text_edit;

pub use config::MaskConfig;
pub use edit::{
    AppliedEdit, CaretAnchor, EditOptions, EditOutcome, EditRequest, EditVeto, Rejection,
    apply_edit, apply_edit_with, remask,
};
pub use format::{Formatted, Passthrough, TextFormatter, format, unformat};
pub use mask::{DEFAULT_PLACEHOLDER, Mask, MaskError, MaskToken};
pub use offsets::{MidCharPolicy, OffsetError};
pub use range::{TextRange, Utf16Range};
pub use text_edit::TextEdit;

#[cfg(test)]
mod tests;
