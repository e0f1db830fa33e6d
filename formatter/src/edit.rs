//! One user edit on a formatted text, resolved in raw space.
//!
//! The host widget reports an edit as a UTF-16 range over the formatted text
//! plus replacement text. [`apply_edit`] maps the range into raw space,
//! applies the replacement there and reformats. The host must then show the
//! returned text and caret instead of performing its own edit.

use tracing::{debug, trace};

use crate::format::{Formatted, TextFormatter};
use crate::offsets::{MidCharPolicy, OffsetError, char_to_utf16_offset, utf16_range_to_text_range};
use crate::range::{TextRange, Utf16Range};
use crate::text_edit::TextEdit;

/// An edit as reported by the host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// Range over the current formatted text, in UTF-16 code units.
    pub range: Utf16Range,
    pub replacement: String,
}

impl EditRequest {
    pub fn new(range: Utf16Range, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Typing or pasting `text` at a caret.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(Utf16Range::new(at, 0), text)
    }

    /// Deleting the units in `range` with nothing inserted.
    pub fn delete(range: Utf16Range) -> Self {
        Self::new(range, String::new())
    }
}

/// External hook that may refuse an edit before it is applied.
///
/// Receives the current raw text, the raw range about to be replaced and the
/// replacement. Returning `false` rejects the edit.
pub trait EditVeto {
    fn allow(&self, raw: &str, range: TextRange, replacement: &str) -> bool;
}

impl<F> EditVeto for F
where
    F: Fn(&str, TextRange, &str) -> bool,
{
    fn allow(&self, raw: &str, range: TextRange, replacement: &str) -> bool {
        self(raw, range, replacement)
    }
}

/// Which end of a mapped caret range the caret lands on.
///
/// A caret mapped through a mask can pick up literals that directly follow
/// it (`"+7|"` becomes the range over `" "` in `"+7 "`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaretAnchor {
    /// Before the folded literals.
    #[default]
    BeforeLiterals,
    /// After the folded literals.
    AfterLiterals,
}

impl CaretAnchor {
    pub fn resolve(self, range: TextRange) -> usize {
        match self {
            CaretAnchor::BeforeLiterals => range.start,
            CaretAnchor::AfterLiterals => range.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOptions {
    pub mid_char: MidCharPolicy,
    pub caret: CaretAnchor,
}

/// Result of an accepted edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdit {
    /// The new formatted text.
    pub text: String,
    /// Caret offset in `text`, in `char`s.
    pub cursor: usize,
}

impl AppliedEdit {
    /// Caret offset in `text`, in UTF-16 code units.
    pub fn cursor_utf16(&self) -> usize {
        char_to_utf16_offset(&self.text, self.cursor)
    }
}

/// Why an edit was not applied. Neither case mutates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The requested range does not map onto the current text.
    InvalidRange(OffsetError),
    /// The veto hook refused the edit.
    Vetoed,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::InvalidRange(err) => err.message(),
            Rejection::Vetoed => "Edit vetoed",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted(AppliedEdit),
    Rejected(Rejection),
}

impl EditOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EditOutcome::Accepted(_))
    }

    pub fn accepted(&self) -> Option<&AppliedEdit> {
        match self {
            EditOutcome::Accepted(applied) => Some(applied),
            EditOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EditOutcome::Accepted(_) => None,
            EditOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Applies `request` to `current` with default [`EditOptions`].
pub fn apply_edit<F>(
    current: &str,
    formatter: &F,
    request: &EditRequest,
    veto: Option<&dyn EditVeto>,
) -> EditOutcome
where
    F: TextFormatter + ?Sized,
{
    apply_edit_with(current, formatter, request, veto, EditOptions::default())
}

/// Applies `request` to the formatted text `current`.
///
/// Steps:
/// 1. map the UTF-16 range to a `char` range over `current`;
/// 2. unformat, mapping the range into raw space;
/// 3. a deletion that maps to an empty raw range (only separators were hit)
///    is extended backwards to the previous raw character;
/// 4. consult `veto`;
/// 5. replace the raw range and reformat, mapping the caret that follows
///    the inserted text.
///
/// Replacement characters beyond the formatter's capacity are dropped.
pub fn apply_edit_with<F>(
    current: &str,
    formatter: &F,
    request: &EditRequest,
    veto: Option<&dyn EditVeto>,
    options: EditOptions,
) -> EditOutcome
where
    F: TextFormatter + ?Sized,
{
    let range = match utf16_range_to_text_range(current, request.range, options.mid_char) {
        Ok(range) => range,
        Err(err) => {
            debug!(?err, range = ?request.range, "edit rejected: invalid range");
            return EditOutcome::Rejected(Rejection::InvalidRange(err));
        }
    };

    let Formatted {
        text: raw,
        range: mut raw_range,
    } = formatter.unformat(current, range);

    let is_backspace = request.replacement.is_empty() && raw_range.is_empty();
    if is_backspace && raw_range.start > 0 {
        raw_range = TextRange::new(raw_range.start - 1, 1);
    }
    trace!(?range, ?raw_range, "edit mapped to raw space");

    if let Some(veto) = veto
        && !veto.allow(&raw, raw_range, &request.replacement)
    {
        debug!(?raw_range, "edit rejected: vetoed");
        return EditOutcome::Rejected(Rejection::Vetoed);
    }

    let edit = TextEdit::new(raw_range, request.replacement.as_str());
    let new_raw = edit.apply(&raw);
    let raw_cursor = edit.cursor_after();

    let Formatted { text, range } = formatter.format(&new_raw, TextRange::caret(raw_cursor));
    let cursor = options.caret.resolve(range).min(text.chars().count());
    debug!(raw_cursor, cursor, "edit applied");

    EditOutcome::Accepted(AppliedEdit { text, cursor })
}

/// Re-renders `current` after the formatter changed from `old` to `new`.
///
/// The raw text is recovered under `old` and rendered under `new`;
/// `selection` travels along. A caret stays a caret, placed by `caret`.
pub fn remask(
    current: &str,
    selection: TextRange,
    old: &dyn TextFormatter,
    new: &dyn TextFormatter,
    caret: CaretAnchor,
) -> Formatted {
    let raw = old.unformat(current, selection);
    let Formatted { text, range } = new.format(&raw.text, raw.range);

    let range = if selection.is_empty() {
        TextRange::caret(caret.resolve(range).min(text.chars().count()))
    } else {
        range
    };
    Formatted { text, range }
}
