/// Placeholder symbol used when a configuration does not name one.
pub const DEFAULT_PLACEHOLDER: char = '×';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskToken {
    /// A fixed character emitted as-is.
    Literal(char),
    /// A slot for one raw character.
    Placeholder,
}

impl MaskToken {
    pub fn is_placeholder(self) -> bool {
        matches!(self, MaskToken::Placeholder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    EmptyPattern,
    InvalidConfig,
}

impl MaskError {
    pub fn message(self) -> &'static str {
        match self {
            MaskError::EmptyPattern => "Mask pattern is empty",
            MaskError::InvalidConfig => "Invalid mask configuration",
        }
    }
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for MaskError {}

/// A parsed mask pattern such as `"+7 (×××) ××× ×× ××"`.
///
/// Every `char` of the pattern becomes one token: the placeholder symbol
/// becomes [`MaskToken::Placeholder`], anything else a literal. A mask is
/// immutable; build a new one when the pattern or symbol changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    placeholder: char,
    tokens: Vec<MaskToken>,
    capacity: usize,
}

impl Mask {
    pub fn new(pattern: &str, placeholder: char) -> Result<Self, MaskError> {
        if pattern.is_empty() {
            return Err(MaskError::EmptyPattern);
        }

        let tokens: Vec<MaskToken> = pattern
            .chars()
            .map(|ch| {
                if ch == placeholder {
                    MaskToken::Placeholder
                } else {
                    MaskToken::Literal(ch)
                }
            })
            .collect();
        let capacity = tokens.iter().filter(|t| t.is_placeholder()).count();

        Ok(Self {
            pattern: pattern.to_string(),
            placeholder,
            tokens,
            capacity,
        })
    }

    /// Builds a mask using [`DEFAULT_PLACEHOLDER`].
    pub fn with_default_placeholder(pattern: &str) -> Result<Self, MaskError> {
        Self::new(pattern, DEFAULT_PLACEHOLDER)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of placeholder slots, i.e. the longest raw text that fits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the pattern in `char`s.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of literal tokens before the first placeholder. Equals
    /// [`Mask::len`] when the mask has no placeholder.
    pub fn prefix_len(&self) -> usize {
        self.tokens
            .iter()
            .position(|t| t.is_placeholder())
            .unwrap_or(self.tokens.len())
    }

    /// The part of the pattern not covered by a formatted text that is
    /// `formatted_len` chars long.
    ///
    /// Input widgets show this after the typed text as a hint of what is
    /// still expected.
    pub fn remainder(&self, formatted_len: usize) -> &str {
        let byte = self
            .pattern
            .char_indices()
            .nth(formatted_len)
            .map_or(self.pattern.len(), |(byte, _)| byte);
        &self.pattern[byte..]
    }
}
