//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless; covers:
//! - input conversion (mask JSON → [`Mask`]);
//! - UTF-16 ↔ `char` offset bridging for editor-facing positions;
//! - DTO conversion (formatter results → `dto::v1::*`).

mod edit;
mod format;
mod shared;

use formatter::{Mask, MaskConfig, MaskError, Passthrough, TextFormatter};

pub struct Converter;

impl Converter {
    /// Parses the JS-provided mask JSON.
    pub fn parse_mask(mask_json: &str) -> Result<Mask, MaskError> {
        MaskConfig::from_json(mask_json)
    }

    /// Like [`Converter::parse_mask`], but a missing or blank input means
    /// "no mask".
    pub fn parse_optional_mask(mask_json: Option<&str>) -> Result<Option<Mask>, MaskError> {
        match mask_json.map(str::trim) {
            None | Some("") => Ok(None),
            Some(json) => Self::parse_mask(json).map(Some),
        }
    }

    pub fn formatter(mask: Option<&Mask>) -> &dyn TextFormatter {
        match mask {
            Some(mask) => mask,
            None => &Passthrough,
        }
    }
}
