use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// TypeScript shape of the mask JSON accepted by the exports, e.g.
/// `{"pattern": "+7 (×××) ×××"}`. Parsing goes through
/// [`formatter::MaskConfig`].
#[derive(TS, Clone, Debug, PartialEq, Eq)]
pub struct MaskConfig {
    pub pattern: String,
    /// Defaults to `×`.
    #[ts(optional)]
    pub placeholder: Option<char>,
}

/// Text with a span in it: a formatted value and its selection, or a raw
/// value and its selection.
#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct FormatResult {
    pub text: String,
    pub span: Span,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RejectionKind {
    InvalidRange,
    Vetoed,
}

/// Outcome of one edit. When `accepted` is false the field must stay as it
/// was; `text` and `cursor` are absent. `None` crosses to JS as `undefined`.
#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct EditResult {
    pub accepted: bool,
    #[ts(optional)]
    pub text: Option<String>,
    /// Caret position in UTF-16 code units.
    #[ts(optional)]
    pub cursor: Option<u32>,
    #[ts(optional)]
    pub rejection: Option<RejectionKind>,
    #[ts(optional)]
    pub message: Option<String>,
}
