use serde::{Deserialize, Serialize};

use crate::mask::{DEFAULT_PLACEHOLDER, Mask, MaskError};

/// Serializable mask settings: `{"pattern": "××× ×××", "placeholder": "×"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskConfig {
    pub pattern: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl MaskConfig {
    pub fn new(pattern: impl Into<String>, placeholder: char) -> Self {
        Self {
            pattern: pattern.into(),
            placeholder,
        }
    }

    pub fn build(&self) -> Result<Mask, MaskError> {
        Mask::new(&self.pattern, self.placeholder)
    }

    /// Parses a JSON configuration and builds the mask.
    pub fn from_json(json: &str) -> Result<Mask, MaskError> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Err(MaskError::InvalidConfig);
        }

        let config: MaskConfig =
            serde_json::from_str(trimmed).map_err(|_| MaskError::InvalidConfig)?;
        config.build()
    }
}

impl From<&Mask> for MaskConfig {
    fn from(mask: &Mask) -> Self {
        Self::new(mask.pattern(), mask.placeholder())
    }
}
