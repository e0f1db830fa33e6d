/// A range of characters in a text: `[start, start + len)`.
///
/// Offsets count Unicode scalar values (`char`s), not bytes and not UTF-16
/// code units. A range always belongs to one specific text, either raw or
/// formatted; the two spaces are never mixed without going through a
/// [`TextFormatter`](crate::TextFormatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: usize,
    pub len: usize,
}

impl TextRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// An empty range (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            len: 0,
        }
    }

    /// Builds a range from two offsets in any order.
    pub fn between(a: usize, b: usize) -> Self {
        let start = a.min(b);
        Self {
            start,
            len: a.max(b) - start,
        }
    }

    /// Exclusive end offset.
    pub fn end(self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Shrinks the range so that it lies within a text of `text_len` chars.
    pub fn clamp(self, text_len: usize) -> Self {
        let start = self.start.min(text_len);
        let end = self.end().min(text_len);
        Self {
            start,
            len: end - start,
        }
    }
}

/// A range in UTF-16 code units, the offset unit of host text widgets
/// (browser inputs, platform text-range APIs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utf16Range {
    pub start: usize,
    pub len: usize,
}

impl Utf16Range {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(self) -> usize {
        self.start.saturating_add(self.len)
    }
}
