//! Character classification used by the tokenizer's grammar.

use crate::options::ReaderVersion;

/// Returns `true` if `c` is a JSONH whitespace rune.
///
/// This is a fixed list, not `char::is_whitespace`: it includes `U+00A0`
/// (non-breaking space), which Rust's Unicode `White_Space` property
/// excludes, because the design explicitly calls it out as whitespace here.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{0085}' | '\u{00A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    ) || is_newline(c)
}

/// Returns `true` if `c` is one of the four newline runes.
#[must_use]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` if `c` is a reserved rune for `version`: a character that
/// terminates a quoteless string and cannot appear unescaped outside of a
/// quoted string.
#[must_use]
pub fn is_reserved(c: char, version: ReaderVersion) -> bool {
    matches!(c, '\\' | ',' | ':' | '[' | ']' | '{' | '}' | '/' | '#' | '"' | '\'')
        || (version.supports_version(ReaderVersion::V2) && c == '@')
}
