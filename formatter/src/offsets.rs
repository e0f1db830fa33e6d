//! Offset bridging between host text widgets and the formatter.
//!
//! Host widgets address text in UTF-16 code units. Everything inside this
//! crate addresses text in `char`s (Unicode scalar values). A UTF-16 offset
//! that points between the two halves of a surrogate pair has no `char`
//! equivalent and is reported as [`OffsetError::InsideCharacter`].

use crate::range::{TextRange, Utf16Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetError {
    /// The offset lies past the end of the text.
    OutOfBounds,
    /// The offset splits a character encoded with more than one unit.
    InsideCharacter,
}

impl OffsetError {
    pub fn message(self) -> &'static str {
        match self {
            OffsetError::OutOfBounds => "Offset out of bounds",
            OffsetError::InsideCharacter => "Offset inside a character",
        }
    }
}

impl std::fmt::Display for OffsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for OffsetError {}

/// What to do when a UTF-16 range boundary splits a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidCharPolicy {
    /// Move the failing boundary outwards by one unit and retry, so the
    /// range covers the whole character.
    #[default]
    Widen,
    /// Fail the conversion.
    Reject,
}

/// Converts a UTF-16 offset to a `char` offset.
pub fn utf16_to_char_offset(text: &str, utf16: usize) -> Result<usize, OffsetError> {
    let mut units = 0usize;
    for (index, ch) in text.chars().enumerate() {
        if units == utf16 {
            return Ok(index);
        }
        if units > utf16 {
            return Err(OffsetError::InsideCharacter);
        }
        units += ch.len_utf16();
    }

    if units == utf16 {
        Ok(text.chars().count())
    } else if units > utf16 {
        Err(OffsetError::InsideCharacter)
    } else {
        Err(OffsetError::OutOfBounds)
    }
}

/// Converts a `char` offset to a UTF-16 offset. Offsets past the end clamp
/// to the UTF-16 length of `text`.
pub fn char_to_utf16_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).map(char::len_utf16).sum()
}

/// Converts a `char` offset to a byte offset. Offsets past the end clamp to
/// `text.len()`.
pub fn char_to_byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Converts a UTF-16 range to a `char` range over `text`.
///
/// With [`MidCharPolicy::Widen`] a boundary that splits a surrogate pair is
/// moved one unit outwards (start backwards, end forwards) and the
/// conversion is retried. Ranges that end past the text always fail.
pub fn utf16_range_to_text_range(
    text: &str,
    range: Utf16Range,
    policy: MidCharPolicy,
) -> Result<TextRange, OffsetError> {
    let mut range = range;
    if range.start.checked_add(range.len).is_none() {
        return Err(OffsetError::OutOfBounds);
    }

    // A boundary can only be off by one unit, so each side is retried at most once.
    for _ in 0..3 {
        let start = match utf16_to_char_offset(text, range.start) {
            Ok(start) => start,
            Err(OffsetError::InsideCharacter) if policy == MidCharPolicy::Widen => {
                let len = range.len.checked_add(1).ok_or(OffsetError::OutOfBounds)?;
                range = Utf16Range::new(range.start - 1, len);
                continue;
            }
            Err(err) => return Err(err),
        };
        let end = match utf16_to_char_offset(text, range.end()) {
            Ok(end) => end,
            Err(OffsetError::InsideCharacter) if policy == MidCharPolicy::Widen => {
                let len = range.len.checked_add(1).ok_or(OffsetError::OutOfBounds)?;
                range = Utf16Range::new(range.start, len);
                continue;
            }
            Err(err) => return Err(err),
        };
        return Ok(TextRange::between(start, end));
    }

    Err(OffsetError::InsideCharacter)
}

/// Converts a `char` range over `text` to a UTF-16 range.
pub fn text_range_to_utf16_range(text: &str, range: TextRange) -> Utf16Range {
    let start = char_to_utf16_offset(text, range.start);
    let end = char_to_utf16_offset(text, range.end());
    Utf16Range::new(start, end - start)
}

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}
