use crate::offsets::char_to_byte_offset;
use crate::range::TextRange;

/// A single replacement in `char` offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Applies the edit to `source`. Offsets past the end clamp to the end.
    pub fn apply(&self, source: &str) -> String {
        let start = char_to_byte_offset(source, self.range.start);
        let end = char_to_byte_offset(source, self.range.end());

        let mut next = String::with_capacity(source.len() - (end - start) + self.new_text.len());
        next.push_str(&source[..start]);
        next.push_str(&self.new_text);
        next.push_str(&source[end..]);
        next
    }

    /// Offset right after the inserted text, in the edited text.
    pub fn cursor_after(&self) -> usize {
        self.range.start + self.new_text.chars().count()
    }
}
