use formatter::{EditOutcome, EditRequest, EditVeto, Rejection, TextFormatter, apply_edit};

use crate::converter::Converter;
use crate::converter::shared::{span_to_utf16, to_u32};
use crate::dto::v1::{EditResult, RejectionKind, Span};

fn rejected(rejection: Rejection) -> EditResult {
    let kind = match rejection {
        Rejection::InvalidRange(_) => RejectionKind::InvalidRange,
        Rejection::Vetoed => RejectionKind::Vetoed,
    };
    EditResult {
        accepted: false,
        text: None,
        cursor: None,
        rejection: Some(kind),
        message: Some(rejection.message().to_string()),
    }
}

impl Converter {
    /// Applies one widget edit: replace `span` of the formatted `current`
    /// with `replacement`.
    pub fn edit(
        current: &str,
        formatter: &dyn TextFormatter,
        span: Span,
        replacement: &str,
        veto: Option<&dyn EditVeto>,
    ) -> EditResult {
        let range = match span_to_utf16(span) {
            Ok(range) => range,
            Err(err) => return rejected(Rejection::InvalidRange(err)),
        };

        let request = EditRequest::new(range, replacement);
        match apply_edit(current, formatter, &request, veto) {
            EditOutcome::Accepted(edit) => EditResult {
                accepted: true,
                cursor: Some(to_u32(edit.cursor_utf16())),
                text: Some(edit.text),
                rejection: None,
                message: None,
            },
            EditOutcome::Rejected(rejection) => rejected(rejection),
        }
    }
}
