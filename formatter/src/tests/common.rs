use crate::{Mask, TextRange};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn mask(pattern: &str) -> Mask {
    Mask::with_default_placeholder(pattern).expect("valid mask")
}

pub fn phone() -> Mask {
    mask("+7 (×××) ××× ×× ××")
}

/// Full-text range over `text`, in chars.
pub fn all(text: &str) -> TextRange {
    TextRange::new(0, text.chars().count())
}

#[test]
fn test_all_counts_chars() {
    assert_eq!(all("🐶1"), TextRange::new(0, 2));
}
