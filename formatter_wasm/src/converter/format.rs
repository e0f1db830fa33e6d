use formatter::{CaretAnchor, Formatted, Mask, OffsetError, TextFormatter, remask};

use crate::converter::Converter;
use crate::converter::shared::{range_to_span, span_to_range};
use crate::dto::v1::{FormatResult, Span};

fn format_result(formatted: Formatted) -> FormatResult {
    FormatResult {
        span: range_to_span(&formatted.text, formatted.range),
        text: formatted.text,
    }
}

impl Converter {
    /// Formats `raw`; `span` is a selection over `raw`.
    pub fn format(raw: &str, mask: &Mask, span: Span) -> Result<FormatResult, OffsetError> {
        let range = span_to_range(raw, span)?;
        Ok(format_result(mask.format(raw, range)))
    }

    /// Strips `formatted` back to raw; `span` is a selection over `formatted`.
    pub fn unformat(formatted: &str, mask: &Mask, span: Span) -> Result<FormatResult, OffsetError> {
        let range = span_to_range(formatted, span)?;
        Ok(format_result(mask.unformat(formatted, range)))
    }

    /// Re-renders `current` after switching from `old` to `new`.
    pub fn remask(
        current: &str,
        span: Span,
        old: Option<&Mask>,
        new: Option<&Mask>,
    ) -> Result<FormatResult, OffsetError> {
        let selection = span_to_range(current, span)?;
        let out = remask(
            current,
            selection,
            Self::formatter(old),
            Self::formatter(new),
            CaretAnchor::default(),
        );
        Ok(format_result(out))
    }

    /// The part of `mask` not yet covered by `formatted`.
    pub fn hint(formatted: &str, mask: &Mask) -> String {
        mask.remainder(formatted.chars().count()).to_string()
    }
}
