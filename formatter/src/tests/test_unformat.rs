use super::common::{all, mask, phone};
use crate::{TextFormatter, TextRange, unformat};

#[test]
fn test_unformat_simple() {
    let out = unformat("123 456", &mask("××× ×××"), all("123 456"));
    assert_eq!(out.text, "123456");
    assert_eq!(out.range, TextRange::new(0, 6));
}

#[test]
fn test_unformat_partial_text() {
    let out = unformat("123 4", &mask("××× ×××"), all("123 4"));
    assert_eq!(out.text, "1234");
    assert_eq!(out.range, TextRange::new(0, 4));
}

#[test]
fn test_unformat_first_half() {
    let out = unformat("123 456", &mask("××× ×××"), TextRange::new(0, 3));
    assert_eq!(out.range, TextRange::new(0, 3));
}

#[test]
fn test_unformat_second_half() {
    let out = unformat("123 456", &mask("××× ×××"), TextRange::new(3, 4));
    assert_eq!(out.range, TextRange::new(3, 3));
}

#[test]
fn test_unformat_with_prefix() {
    let text = "+7 (917) 074 11 11";
    let out = unformat(text, &phone(), all(text));
    assert_eq!(out.text, "9170741111");
    assert_eq!(out.range, TextRange::new(0, 10));

    let tail = unformat(text, &phone(), TextRange::new(4, 14));
    assert_eq!(tail.range, TextRange::new(0, 10));
}

#[test]
fn test_unformat_multi_unit_text_chars() {
    let out = unformat("🐶🦄🐱 🐣🐧", &mask("××× ×××"), TextRange::new(1, 4));
    assert_eq!(out.text, "🐶🦄🐱🐣🐧");
    assert_eq!(out.range, TextRange::new(1, 3));
}

#[test]
fn test_unformat_multi_unit_mask_chars() {
    let out = unformat("🐶1🦄2🐱3🐧4🐤5", &mask("🐶×🦄×🐱×🐧×🐤×"), TextRange::new(1, 8));
    assert_eq!(out.text, "12345");
    assert_eq!(out.range, TextRange::new(0, 4));
}

#[test]
fn test_unformat_mask_without_placeholder() {
    let out = unformat("empty", &mask("empty"), all("empty"));
    assert_eq!(out.text, "");
    assert_eq!(out.range, TextRange::default());
}

#[test]
fn test_unformat_ignores_text_past_mask() {
    assert_eq!(mask("××").unformat_text("1234"), "12");
}

#[test]
fn test_unformat_caret_on_separator_maps_to_empty_range() {
    let out = unformat("+7 (917) ", &phone(), TextRange::new(8, 1));
    assert_eq!(out.text, "917");
    assert_eq!(out.range, TextRange::caret(3));
}
