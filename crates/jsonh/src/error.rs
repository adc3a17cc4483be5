//! Error types returned by the rune reader, tokenizer, and tree builder.

use alloc::string::String;

use thiserror::Error;

/// The lexical, structural, semantic, and configuration errors the
/// tokenizer and tree builder can report.
///
/// Every variant corresponds to a named failure in the JSONH grammar. There
/// is no recovery: once a [`SyntaxError`] is produced, the token stream that
/// produced it is terminated (see [`crate::Tokenizer`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A quoteless string scan produced no characters at all.
    #[error("empty quoteless string")]
    EmptyQuotelessString,
    /// A numeric literal's mantissa or exponent had no digits.
    #[error("empty number")]
    EmptyNumber,
    /// A digit separator (`_`) appeared at the start of a digit run.
    #[error("number cannot start with a digit separator")]
    LeadingDigitSeparator,
    /// A digit separator (`_`) appeared at the end of a digit run.
    #[error("number cannot end with a digit separator")]
    TrailingDigitSeparator,
    /// A numeric literal contained more than one `.`.
    #[error("number cannot have more than one decimal point")]
    DuplicateDecimalPoint,
    /// A `\u`, `\x`, or `\U` escape was not followed by the expected number
    /// of hex digits.
    #[error("expected {expected} hex digits after escape, found {found}")]
    WrongHexDigitCount {
        /// Number of hex digits the escape introducer requires.
        expected: u8,
        /// Number of valid hex digits actually found.
        found: u8,
    },
    /// A quoted string (single- or multi-quoted) was not terminated before
    /// the input ended.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `/* ... */` or `/==* ... *==/` block comment was not terminated
    /// before the input ended.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// A `/` was not followed by `/` or `*`.
    #[error("unexpected character after '/'")]
    UnexpectedCharacterAfterSlash,
    /// The input ended where a token was still expected.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A property name was not followed by `:`.
    #[error("expected ':' after property name")]
    ExpectedColonAfterPropertyName,
    /// An object was opened but never closed before the input ended (and
    /// [`crate::ReaderOptions::incomplete_inputs`] was not set).
    #[error("expected '}}' to close object")]
    ExpectedEndOfObject,
    /// An array was opened but never closed before the input ended (and
    /// [`crate::ReaderOptions::incomplete_inputs`] was not set).
    #[error("expected ']' to close array")]
    ExpectedEndOfArray,
    /// A braceless object was found nested inside another braceless object.
    #[error("nested braceless object")]
    NestedBracelessObject,
    /// A braceless object was found where only a full `{...}` or a
    /// primitive is legal: inside an array, or as a property's value.
    #[error("braceless object is not allowed here")]
    BracelessObjectNotAllowedHere,
    /// A `\u` escape produced a surrogate half (`U+D800..=U+DFFF`) that was
    /// never paired with a matching half.
    #[error("unpaired surrogate half U+{0:04X}")]
    UnpairedSurrogateHalf(u32),
    /// A digit outside the declared base's alphabet appeared in a numeric
    /// literal.
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigitForBase {
        /// The offending character.
        digit: char,
        /// The declared numeric base (2, 8, 10, or 16).
        base: u8,
    },
    /// Container nesting exceeded [`crate::ReaderOptions::max_depth`].
    #[error("exceeded max depth")]
    ExceededMaxDepth,
    /// [`crate::ReaderOptions::parse_single_element`] was set and trailing
    /// non-whitespace, non-comment content followed the root element.
    #[error("expected end of elements")]
    ExpectedEndOfElements,
    /// A verbatim-string prefix (`@`) was not immediately followed by a
    /// quote or quoteless text.
    #[error("expected string to immediately follow verbatim symbol")]
    ExpectedStringAfterVerbatimSymbol,
    /// The tree builder encountered a primitive or container-end token with
    /// no open container to receive it.
    #[error("unexpected token outside any container")]
    UnexpectedTokenOutsideContainer,
    /// A lexical text handed to the number parser did not form a valid
    /// numeric literal under its own grammar (should not occur for
    /// tokenizer-produced `Number` tokens; reserved for direct callers of
    /// [`crate::parse_number`]).
    #[error("malformed numeric literal: {0}")]
    MalformedNumber(String),
}

/// A [`SyntaxError`] together with the byte offset at which it was raised.
///
/// The offset is always a valid UTF-8 rune boundary, per
/// [`crate::RuneReader::position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} at byte {position}")]
pub struct ReaderError {
    /// The underlying syntax error.
    pub error: SyntaxError,
    /// Byte offset into the input at which the error was detected.
    pub position: usize,
}

impl ReaderError {
    /// Pairs a [`SyntaxError`] with the byte offset it was raised at.
    #[must_use]
    pub fn new(error: SyntaxError, position: usize) -> Self {
        Self { error, position }
    }
}

/// Convenience alias used throughout this crate.
pub type ReaderResult<T> = Result<T, ReaderError>;
