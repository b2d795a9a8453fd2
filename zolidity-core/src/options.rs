//! Recognizer configuration.

/// Options carried by a [`Cursor`](crate::Cursor) and consulted by rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// When set, word-shaped literals (`true`, `false`) only match if the
    /// next character cannot continue an identifier, so `truely` is not
    /// read as `true` followed by `ly`.
    pub word_boundaries: bool,
}

impl Options {
    /// Options that leave identifier boundaries to the caller.
    pub const fn unchecked() -> Self {
        Self {
            word_boundaries: false,
        }
    }

    pub const fn with_word_boundaries(mut self, enabled: bool) -> Self {
        self.word_boundaries = enabled;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            word_boundaries: true,
        }
    }
}
