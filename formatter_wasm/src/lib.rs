//! WASM bindings for `formatter`.
//!
//! Every offset crossing this boundary is in UTF-16 code units. Masks are
//! passed as JSON (`{"pattern": "...", "placeholder": "×"}`); an absent or
//! blank mask where one is optional means plain text.

pub mod converter;
pub mod dto;

use formatter::{EditVeto, MaskError, OffsetError, TextRange};
use js_sys::{Array, Error as JsError, Function};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::converter::Converter;
use crate::dto::v1::Span;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from(JsError::new(&err.to_string())))
}

fn mask_error(err: MaskError) -> JsValue {
    JsValue::from(JsError::new(err.message()))
}

fn offset_error(err: OffsetError) -> JsValue {
    JsValue::from(JsError::new(err.message()))
}

/// A veto backed by a JS callback
/// `(raw: string, start: number, end: number, replacement: string) => boolean`.
/// Offsets are UTF-16 over `raw`. A callback that throws vetoes the edit.
struct JsVeto(Function);

impl EditVeto for JsVeto {
    fn allow(&self, raw: &str, range: TextRange, replacement: &str) -> bool {
        let utf16 = formatter::offsets::text_range_to_utf16_range(raw, range);
        let args = Array::of4(
            &JsValue::from_str(raw),
            &JsValue::from(utf16.start as u32),
            &JsValue::from(utf16.end() as u32),
            &JsValue::from_str(replacement),
        );
        self.0
            .apply(&JsValue::NULL, &args)
            .map(|result| result.is_truthy())
            .unwrap_or(false)
    }
}

/// Formats `raw` and maps the selection `[start, end)` over it.
#[wasm_bindgen]
pub fn format(raw: String, mask_json: String, start: u32, end: u32) -> Result<JsValue, JsValue> {
    let mask = Converter::parse_mask(&mask_json).map_err(mask_error)?;
    let result = Converter::format(&raw, &mask, Span { start, end }).map_err(offset_error)?;
    to_js(&result)
}

/// Strips the literals from `formatted` and maps the selection `[start, end)`.
#[wasm_bindgen]
pub fn unformat(
    formatted: String,
    mask_json: String,
    start: u32,
    end: u32,
) -> Result<JsValue, JsValue> {
    let mask = Converter::parse_mask(&mask_json).map_err(mask_error)?;
    let result =
        Converter::unformat(&formatted, &mask, Span { start, end }).map_err(offset_error)?;
    to_js(&result)
}

/// Replaces `[start, end)` of the displayed text with `replacement`.
///
/// Returns an `EditResult`. A rejected edit is not an error: the result has
/// `accepted: false` and the widget keeps its text.
#[wasm_bindgen]
pub fn apply_edit(
    current: String,
    mask_json: Option<String>,
    start: u32,
    end: u32,
    replacement: String,
    veto: Option<Function>,
) -> Result<JsValue, JsValue> {
    let mask = Converter::parse_optional_mask(mask_json.as_deref()).map_err(mask_error)?;
    let veto = veto.map(JsVeto);
    let result = Converter::edit(
        &current,
        Converter::formatter(mask.as_ref()),
        Span { start, end },
        &replacement,
        veto.as_ref().map(|veto| veto as &dyn EditVeto),
    );
    to_js(&result)
}

/// Re-renders `current` after the mask changed from `old_mask_json` to
/// `new_mask_json`, carrying the selection `[start, end)` along.
#[wasm_bindgen]
pub fn remask(
    current: String,
    old_mask_json: Option<String>,
    new_mask_json: Option<String>,
    start: u32,
    end: u32,
) -> Result<JsValue, JsValue> {
    let old = Converter::parse_optional_mask(old_mask_json.as_deref()).map_err(mask_error)?;
    let new = Converter::parse_optional_mask(new_mask_json.as_deref()).map_err(mask_error)?;
    let result = Converter::remask(&current, Span { start, end }, old.as_ref(), new.as_ref())
        .map_err(offset_error)?;
    to_js(&result)
}

/// The unfilled rest of the mask, for rendering a placeholder hint after
/// the text.
#[wasm_bindgen]
pub fn mask_hint(formatted: String, mask_json: String) -> Result<String, JsValue> {
    let mask = Converter::parse_mask(&mask_json).map_err(mask_error)?;
    Ok(Converter::hint(&formatted, &mask))
}
