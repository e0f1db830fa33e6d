use formatter::{DEFAULT_PLACEHOLDER, Mask, MaskError};
use serde::Deserialize;

/// Picks a mask from the beginning of the raw value, e.g. a phone layout
/// per country code.
///
/// Entries are checked in order; the first whose prefix starts the raw
/// value wins. Without a match the fallback is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSelector {
    entries: Vec<(String, Mask)>,
    fallback: Mask,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrefixInput {
    prefix: String,
    pattern: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SelectorInput {
    #[serde(default)]
    placeholder: Option<char>,
    fallback: String,
    #[serde(default)]
    masks: Vec<PrefixInput>,
}

impl MaskSelector {
    pub fn new(fallback: Mask) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, mask: Mask) -> Self {
        self.entries.push((prefix.into(), mask));
        self
    }

    pub fn select(&self, raw: &str) -> &Mask {
        self.entries
            .iter()
            .find(|(prefix, _)| raw.starts_with(prefix.as_str()))
            .map_or(&self.fallback, |(_, mask)| mask)
    }

    pub fn fallback(&self) -> &Mask {
        &self.fallback
    }

    /// Parses `{"placeholder": "_", "fallback": "...", "masks": [{"prefix": "7", "pattern": "..."}]}`.
    pub fn from_json(json: &str) -> Result<Self, MaskError> {
        let input: SelectorInput =
            serde_json::from_str(json.trim()).map_err(|_| MaskError::InvalidConfig)?;

        let placeholder = input.placeholder.unwrap_or(DEFAULT_PLACEHOLDER);
        let mut selector = Self::new(Mask::new(&input.fallback, placeholder)?);
        for entry in input.masks {
            let mask = Mask::new(&entry.pattern, placeholder)?;
            selector = selector.with_prefix(entry.prefix, mask);
        }
        Ok(selector)
    }
}
