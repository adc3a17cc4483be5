//! Reader configuration.

/// Which revision of the JSONH grammar a [`crate::Tokenizer`] should accept.
///
/// `V1` is the March-2025 baseline: quoted/multi-quoted/quoteless strings,
/// comments (`#`, `//`, non-nestable `/* */`), braceless objects, and the
/// numeric grammar. `V2` (November 2025) adds verbatim strings (`@"..."`),
/// the `@` reserved rune, and nestable block comments (`/==* ... *==/`).
///
/// # Default
///
/// [`ReaderVersion::Latest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReaderVersion {
    /// The March-2025 baseline grammar.
    V1,
    /// The November-2025 grammar: adds verbatim strings, `@`, and nestable
    /// block comments.
    V2,
    /// An alias for the highest grammar version this crate implements.
    /// Currently equivalent to [`ReaderVersion::V2`].
    #[default]
    Latest,
}

impl ReaderVersion {
    /// Resolves [`ReaderVersion::Latest`] to the concrete version it
    /// currently aliases.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Latest => Self::V2,
            other => other,
        }
    }

    /// Returns `true` if this version supports everything `min` does.
    ///
    /// ```rust
    /// use jsonh::ReaderVersion;
    ///
    /// assert!(ReaderVersion::V2.supports_version(ReaderVersion::V1));
    /// assert!(!ReaderVersion::V1.supports_version(ReaderVersion::V2));
    /// assert!(ReaderVersion::Latest.supports_version(ReaderVersion::V2));
    /// ```
    #[must_use]
    pub fn supports_version(self, min: Self) -> bool {
        self.resolve() >= min.resolve()
    }
}

impl PartialOrd for ReaderVersion {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReaderVersion {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        fn rank(v: ReaderVersion) -> u8 {
            match v.resolve() {
                ReaderVersion::V1 => 1,
                ReaderVersion::V2 | ReaderVersion::Latest => 2,
            }
        }
        rank(*self).cmp(&rank(*other))
    }
}

/// Configuration options for a [`crate::Tokenizer`] or
/// [`crate::parse_element`].
///
/// # Default
///
/// `version` defaults to [`ReaderVersion::Latest`]; `incomplete_inputs` and
/// `parse_single_element` default to `false`; `max_depth` defaults to `64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Which grammar revision to accept. See [`ReaderVersion`].
    pub version: ReaderVersion,

    /// Whether a premature end-of-input inside an object or array is
    /// tolerated.
    ///
    /// When `true`, the tokenizer synthesizes the missing `EndObject` or
    /// `EndArray` token instead of failing with
    /// [`crate::SyntaxError::ExpectedEndOfObject`] or
    /// [`crate::SyntaxError::ExpectedEndOfArray`]. Useful for parsing
    /// partial output from a token-by-token generator (e.g. an LLM).
    ///
    /// # Default
    ///
    /// `false`
    pub incomplete_inputs: bool,

    /// Whether [`crate::build_value`] requires the input to contain exactly
    /// one element.
    ///
    /// When `true`, any non-whitespace, non-comment content following the
    /// root element is an error
    /// ([`crate::SyntaxError::ExpectedEndOfElements`]). When `false`,
    /// trailing content is silently ignored.
    ///
    /// # Default
    ///
    /// `false`
    pub parse_single_element: bool,

    /// Hard limit on container nesting depth.
    ///
    /// Exceeding this limit fails the token stream with
    /// [`crate::SyntaxError::ExceededMaxDepth`] rather than recursing
    /// further. Defends against resource-exhaustion inputs (deeply nested
    /// `[[[[[...`).
    ///
    /// # Default
    ///
    /// `64`
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            version: ReaderVersion::Latest,
            incomplete_inputs: false,
            parse_single_element: false,
            max_depth: 64,
        }
    }
}
