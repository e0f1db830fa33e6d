//! Raw ⇄ formatted text transform.
//!
//! Both directions walk the mask once and translate a selection range
//! alongside the text, so a caret or selection survives the round trip.

use crate::mask::{Mask, MaskToken};
use crate::range::TextRange;

/// A text together with a range over that same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub range: TextRange,
}

/// A bidirectional text transform with range translation.
///
/// `format` maps raw text and a raw range to formatted text and a formatted
/// range; `unformat` goes the other way. Implementations are stateless.
pub trait TextFormatter {
    fn format(&self, raw: &str, selection: TextRange) -> Formatted;

    fn unformat(&self, formatted: &str, selection: TextRange) -> Formatted;

    fn format_text(&self, raw: &str) -> String {
        self.format(raw, TextRange::default()).text
    }

    fn unformat_text(&self, formatted: &str) -> String {
        self.unformat(formatted, TextRange::default()).text
    }
}

impl TextFormatter for Mask {
    fn format(&self, raw: &str, selection: TextRange) -> Formatted {
        format(raw, self, selection)
    }

    fn unformat(&self, formatted: &str, selection: TextRange) -> Formatted {
        unformat(formatted, self, selection)
    }
}

impl<T: TextFormatter + ?Sized> TextFormatter for &T {
    fn format(&self, raw: &str, selection: TextRange) -> Formatted {
        (**self).format(raw, selection)
    }

    fn unformat(&self, formatted: &str, selection: TextRange) -> Formatted {
        (**self).unformat(formatted, selection)
    }
}

/// The identity transform, used when no mask is installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl TextFormatter for Passthrough {
    fn format(&self, raw: &str, selection: TextRange) -> Formatted {
        identity(raw, selection)
    }

    fn unformat(&self, formatted: &str, selection: TextRange) -> Formatted {
        identity(formatted, selection)
    }
}

fn identity(text: &str, selection: TextRange) -> Formatted {
    Formatted {
        text: text.to_string(),
        range: selection.clamp(text.chars().count()),
    }
}

/// Renders `raw` through `mask`, translating `selection` from raw offsets to
/// formatted offsets.
///
/// Literals are emitted as they are reached. The walk stops at the first
/// placeholder with no raw character left, so the output ends right after
/// the last raw character plus any literals that immediately follow it.
/// Raw characters beyond [`Mask::capacity`] are dropped.
///
/// A literal reached exactly at the selection end is folded into the
/// mapped range, so a boundary that lands before a run of separators ends
/// up after them in the range end.
///
/// A mask without placeholders formats to its pattern with an empty range.
pub fn format(raw: &str, mask: &Mask, selection: TextRange) -> Formatted {
    let prefix_len = mask.prefix_len();
    if mask.capacity() == 0 {
        return Formatted {
            text: mask.pattern().to_string(),
            range: TextRange::default(),
        };
    }

    let tokens = mask.tokens();
    let mut text: String = tokens[..prefix_len]
        .iter()
        .filter_map(|token| match token {
            MaskToken::Literal(ch) => Some(*ch),
            MaskToken::Placeholder => None,
        })
        .collect();
    let mut range = TextRange::caret(prefix_len);

    let mut raw_chars = raw.chars();
    let mut raw_index = 0usize;

    for token in &tokens[prefix_len..] {
        if raw_index < selection.start {
            range.start += 1;
        } else if raw_index < selection.end() {
            range.len += 1;
        }

        match *token {
            MaskToken::Placeholder => {
                let Some(ch) = raw_chars.next() else {
                    break;
                };
                text.push(ch);
                raw_index += 1;
            }
            MaskToken::Literal(ch) => {
                if raw_index == selection.end() {
                    range.len += 1;
                }
                text.push(ch);
            }
        }
    }

    let len = text.chars().count();
    Formatted {
        text,
        range: range.clamp(len),
    }
}

/// Extracts the raw characters of `formatted`, translating `selection` from
/// formatted offsets to raw offsets.
///
/// Position `i` of `formatted` contributes to the raw text only when token
/// `i` of the mask is a placeholder. Positions past the end of either the
/// mask or the text are ignored.
pub fn unformat(formatted: &str, mask: &Mask, selection: TextRange) -> Formatted {
    let mut text = String::new();
    let mut range = TextRange::default();

    for (index, (token, ch)) in mask.tokens().iter().zip(formatted.chars()).enumerate() {
        if !token.is_placeholder() {
            continue;
        }

        text.push(ch);
        if index < selection.start {
            range.start += 1;
        } else if index < selection.end() {
            range.len += 1;
        }
    }

    Formatted { text, range }
}
