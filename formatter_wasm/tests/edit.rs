#![cfg(target_arch = "wasm32")]

use js_sys::Function;
use serde::Deserialize;
use wasm_bindgen_test::wasm_bindgen_test;

const PHONE: &str = r#"{"pattern": "+7 (×××) ××× ×× ××"}"#;

#[derive(Deserialize)]
struct Span {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct FormatResult {
    text: String,
    span: Span,
}

#[derive(Deserialize)]
struct EditResult {
    accepted: bool,
    text: Option<String>,
    cursor: Option<u32>,
    rejection: Option<String>,
}

fn edit(
    current: &str,
    start: u32,
    end: u32,
    replacement: &str,
    veto: Option<Function>,
) -> EditResult {
    let value = formatter_wasm::apply_edit(
        current.to_string(),
        Some(PHONE.to_string()),
        start,
        end,
        replacement.to_string(),
        veto,
    )
    .expect("expected EditResult");
    serde_wasm_bindgen::from_value(value).expect("expected EditResult")
}

#[wasm_bindgen_test]
fn format_and_unformat_spans() {
    let value = formatter_wasm::format("9170".to_string(), PHONE.to_string(), 4, 4)
        .expect("expected FormatResult");
    let result: FormatResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(result.text, "+7 (917) 0");
    assert_eq!((result.span.start, result.span.end), (10, 10));

    let value = formatter_wasm::unformat(result.text, PHONE.to_string(), 4, 10)
        .expect("expected FormatResult");
    let result: FormatResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(result.text, "9170");
    assert_eq!((result.span.start, result.span.end), (0, 4));
}

#[wasm_bindgen_test]
fn typing_and_backspace() {
    let result = edit("+7 (91", 6, 6, "7", None);
    assert!(result.accepted);
    assert_eq!(result.text.as_deref(), Some("+7 (917) "));
    assert_eq!(result.cursor, Some(7));

    let result = edit("+7 (917) ", 8, 9, "", None);
    assert_eq!(result.text.as_deref(), Some("+7 (91"));
    assert_eq!(result.cursor, Some(6));
}

#[wasm_bindgen_test]
fn js_veto_rejects_letters() {
    let digits_only = Function::new_with_args(
        "raw, start, end, replacement",
        "return /^[0-9]*$/.test(replacement);",
    );

    let result = edit("+7 (9", 5, 5, "a", Some(digits_only.clone()));
    assert!(!result.accepted);
    assert_eq!(result.rejection.as_deref(), Some("vetoed"));
    assert_eq!(result.text, None);

    let result = edit("+7 (9", 5, 5, "1", Some(digits_only));
    assert_eq!(result.text.as_deref(), Some("+7 (91"));
}

#[wasm_bindgen_test]
fn throwing_veto_rejects() {
    let throws = Function::new_no_args("throw new Error('boom');");
    let result = edit("+7 (9", 5, 5, "1", Some(throws));
    assert!(!result.accepted);
}

#[wasm_bindgen_test]
fn invalid_mask_json_is_an_error() {
    assert!(formatter_wasm::format("1".to_string(), "{".to_string(), 0, 0).is_err());
    assert!(formatter_wasm::mask_hint(String::new(), r#"{"pattern": ""}"#.to_string()).is_err());
}

#[wasm_bindgen_test]
fn mask_hint_and_remask() {
    let hint = formatter_wasm::mask_hint("+7 (917".to_string(), PHONE.to_string()).unwrap();
    assert_eq!(hint, ") ××× ×× ××");

    let value = formatter_wasm::remask(
        "+7 (917) ".to_string(),
        Some(PHONE.to_string()),
        None,
        9,
        9,
    )
    .unwrap();
    let result: FormatResult = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(result.text, "917");
    assert_eq!((result.span.start, result.span.end), (3, 3));
}
