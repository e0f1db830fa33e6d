use formatter::{OffsetError, TextRange, Utf16Range};

use crate::{EditOutcome, EditRequest, Mask, MaskSelector, MaskedField};

fn phone() -> Mask {
    Mask::with_default_placeholder("+7 (×××) ××× ×× ××").unwrap()
}

fn phone_selector() -> MaskSelector {
    MaskSelector::from_json(
        r#"{
            "placeholder": "_",
            "fallback": "+_ ___ ___ ________",
            "masks": [
                {"prefix": "1", "pattern": "+_ (___) ___ ____"},
                {"prefix": "7", "pattern": "+_ (___) ___ ____"},
                {"prefix": "44", "pattern": "+__ (___) ____ ____"},
                {"prefix": "49", "pattern": "+__ (_____) ___-____"},
                {"prefix": "358", "pattern": "+___ _ ___ ___"}
            ]
        }"#,
    )
    .expect("valid selector")
}

#[test]
fn field_starts_empty() {
    let field = MaskedField::new(Some(phone()));
    assert!(field.is_empty());
    assert_eq!(field.raw(), "");
    assert_eq!(field.hint(), "+7 (×××) ××× ×× ××");
}

#[test]
fn field_first_keystroke_adds_prefix() {
    let mut field = MaskedField::new(Some(phone()));
    let out = field.handle_edit(&EditRequest::insert(0, "9"), None);

    assert!(out.is_accepted());
    assert_eq!(field.text(), "+7 (9");
    assert_eq!(field.selection(), TextRange::caret(5));
    assert_eq!(field.raw(), "9");
    assert_eq!(field.hint(), "××) ××× ×× ××");
}

#[test]
fn field_set_raw_moves_caret_to_end() {
    let mut field = MaskedField::new(Some(phone()));
    field.set_raw("9170741111");

    assert_eq!(field.text(), "+7 (917) 074 11 11");
    assert_eq!(field.selection_utf16(), Utf16Range::new(18, 0));
    assert_eq!(field.hint(), "");
}

#[test]
fn field_rejected_edit_leaves_state() {
    let mut field = MaskedField::new(Some(phone()));
    field.set_raw("917");
    let before = field.clone();

    let digits_only =
        |_raw: &str, _range: TextRange, text: &str| text.chars().all(|c| c.is_ascii_digit());
    let out = field.handle_edit(&EditRequest::insert(9, "x"), Some(&digits_only));

    assert!(matches!(out, EditOutcome::Rejected(_)));
    assert_eq!(field.text(), before.text());
    assert_eq!(field.selection(), before.selection());
}

#[test]
fn field_invalid_selection_is_ignored() {
    let mut field = MaskedField::new(Some(phone()));
    field.set_raw("917");

    assert_eq!(
        field.select_utf16(Utf16Range::new(4, 40)),
        Err(OffsetError::OutOfBounds)
    );
    assert_eq!(field.selection(), TextRange::caret(9));

    assert_eq!(field.select_utf16(Utf16Range::new(4, 3)), Ok(()));
    assert_eq!(field.selection(), TextRange::new(4, 3));
}

#[test]
fn field_removing_mask_keeps_raw_value() {
    let mut field = MaskedField::new(Some(phone()));
    field.set_raw("9170741111");
    field.set_mask(None);

    assert_eq!(field.mask(), None);
    assert_eq!(field.text(), "9170741111");
    assert_eq!(field.selection(), TextRange::caret(10));
    assert_eq!(field.raw(), "9170741111");
}

#[test]
fn field_clear() {
    let mut field = MaskedField::new(Some(phone()));
    field.set_raw("917");
    field.clear();

    assert!(field.is_empty());
    assert_eq!(field.selection(), TextRange::default());
}

#[test]
fn field_switches_mask_by_prefix() {
    let selector = phone_selector();
    let mut field = MaskedField::new(Some(selector.fallback().clone()));

    field.handle_edit(&EditRequest::insert(0, "4"), None);
    assert_eq!(field.text(), "+4 ");
    assert_eq!(field.selection(), TextRange::caret(2));
    assert!(!field.refresh_mask(&selector));

    field.handle_edit(&EditRequest::insert(2, "4"), None);
    assert_eq!(field.text(), "+4 4");
    assert!(field.refresh_mask(&selector));

    assert_eq!(field.mask().map(Mask::pattern), Some("+__ (___) ____ ____"));
    assert_eq!(field.text(), "+44 (");
    assert_eq!(field.selection(), TextRange::caret(3));
    assert_eq!(field.hint(), "___) ____ ____");
    assert_eq!(field.raw(), "44");
}
