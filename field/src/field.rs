//! Editable state of one masked input.
//! Selections are `char` offsets into the formatted text; host widgets talk
//! UTF-16 through the `*_utf16` accessors.

use formatter::offsets::{text_range_to_utf16_range, utf16_range_to_text_range};
use formatter::{
    EditOptions, EditOutcome, EditRequest, EditVeto, Mask, OffsetError, Passthrough,
    TextFormatter, TextRange, Utf16Range, apply_edit_with, remask,
};
use tracing::debug;

use crate::selector::MaskSelector;

/// The text, selection and mask of a masked input.
///
/// Only the formatted text is stored. The raw value is derived from it on
/// demand, so it always reflects the mask that is installed right now.
#[derive(Debug, Clone, Default)]
pub struct MaskedField {
    text: String,
    selection: TextRange,
    mask: Option<Mask>,
    options: EditOptions,
}

impl MaskedField {
    pub fn new(mask: Option<Mask>) -> Self {
        Self {
            mask,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: EditOptions) -> Self {
        self.options = options;
        self
    }

    /// The formatted text as displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }

    pub fn selection_utf16(&self) -> Utf16Range {
        text_range_to_utf16_range(&self.text, self.selection)
    }

    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    pub fn options(&self) -> EditOptions {
        self.options
    }

    /// The raw value behind the displayed text.
    pub fn raw(&self) -> String {
        self.formatter().unformat_text(&self.text)
    }

    /// Replaces the value and puts the caret at the end.
    pub fn set_raw(&mut self, raw: &str) {
        self.text = self.formatter().format_text(raw);
        self.selection = TextRange::caret(self.text.chars().count());
    }

    /// Empties the field, including any literal prefix of the mask.
    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = TextRange::default();
    }

    /// Sets the selection from a host range. The selection is left untouched
    /// when the range does not map onto the text.
    pub fn select_utf16(&mut self, range: Utf16Range) -> Result<(), OffsetError> {
        self.selection = utf16_range_to_text_range(&self.text, range, self.options.mid_char)?;
        Ok(())
    }

    /// Installs `mask` and re-renders the current value under it.
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        if self.mask == mask {
            return;
        }

        let new: &dyn TextFormatter = match &mask {
            Some(mask) => mask,
            None => &Passthrough,
        };
        let out = remask(
            &self.text,
            self.selection,
            self.formatter(),
            new,
            self.options.caret,
        );
        debug!(
            pattern = ?mask.as_ref().map(Mask::pattern),
            text = %out.text,
            "mask changed"
        );

        self.text = out.text;
        self.selection = out.range;
        self.mask = mask;
    }

    /// Switches to the mask `selector` picks for the current raw value.
    /// Returns whether the mask changed.
    pub fn refresh_mask(&mut self, selector: &MaskSelector) -> bool {
        let wanted = selector.select(&self.raw());
        if self.mask.as_ref() == Some(wanted) {
            return false;
        }
        self.set_mask(Some(wanted.clone()));
        true
    }

    /// Runs one edit from the host widget. When accepted, the new text and
    /// caret replace the current ones; the host must display them instead of
    /// applying the edit itself.
    pub fn handle_edit(
        &mut self,
        request: &EditRequest,
        veto: Option<&dyn EditVeto>,
    ) -> EditOutcome {
        let outcome = apply_edit_with(&self.text, self.formatter(), request, veto, self.options);
        if let EditOutcome::Accepted(edit) = &outcome {
            self.text = edit.text.clone();
            self.selection = TextRange::caret(edit.cursor);
        }
        outcome
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The part of the mask still to be filled, for a placeholder hint.
    pub fn hint(&self) -> &str {
        match &self.mask {
            Some(mask) => mask.remainder(self.text.chars().count()),
            None => "",
        }
    }

    fn formatter(&self) -> &dyn TextFormatter {
        match &self.mask {
            Some(mask) => mask,
            None => &Passthrough,
        }
    }
}
