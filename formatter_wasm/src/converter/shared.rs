use formatter::offsets::{text_range_to_utf16_range, utf16_range_to_text_range};
use formatter::{MidCharPolicy, OffsetError, TextRange, Utf16Range};

use crate::dto::v1::Span;

pub(super) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Maps a JS span over `text` to a `char` range, widening spans that split
/// a surrogate pair.
pub(super) fn span_to_range(text: &str, span: Span) -> Result<TextRange, OffsetError> {
    utf16_range_to_text_range(text, span_to_utf16(span)?, MidCharPolicy::Widen)
}

pub(super) fn span_to_utf16(span: Span) -> Result<Utf16Range, OffsetError> {
    if span.end < span.start {
        return Err(OffsetError::OutOfBounds);
    }
    Ok(Utf16Range::new(
        span.start as usize,
        (span.end - span.start) as usize,
    ))
}

pub(super) fn range_to_span(text: &str, range: TextRange) -> Span {
    let utf16 = text_range_to_utf16_range(text, range);
    Span {
        start: to_u32(utf16.start),
        end: to_u32(utf16.end()),
    }
}

#[cfg(test)]
mod tests {
    use formatter::{OffsetError, TextRange};

    use super::{range_to_span, span_to_range};
    use crate::dto::v1::Span;

    #[test]
    fn spans_count_utf16_units() {
        let text = "🐶1🦄";
        assert_eq!(
            range_to_span(text, TextRange::new(1, 2)),
            Span { start: 2, end: 5 }
        );
        assert_eq!(
            span_to_range(text, Span { start: 2, end: 5 }),
            Ok(TextRange::new(1, 2))
        );
    }

    #[test]
    fn reversed_span_is_out_of_bounds() {
        assert_eq!(
            span_to_range("abc", Span { start: 2, end: 1 }),
            Err(OffsetError::OutOfBounds)
        );
    }
}
