//! A byte-accurate reader for JSONH ("JSON for Humans"): JSON extended with
//! quoteless and multi-quoted strings, braceless top-level objects, trailing
//! commas, and `#`/`//`/block comments.
//!
//! Three layers, from the bytes up:
//!
//! - [`RuneReader`]: a random-access, bidirectional UTF-8 decoder over a
//!   byte slice.
//! - [`Tokenizer`]: a pull parser over a [`RuneReader`] producing a flat
//!   [`Token`] stream, with inline lexical/structural errors.
//! - [`build_value`]: folds a [`Tokenizer`]'s stream into a generic
//!   [`Value`] tree.
//!
//! [`parse_element`] and [`parse_element_bytes`] wrap all three for the
//! common case of "I have some bytes, give me a `Value`".
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[cfg(feature = "values")]
mod builder;
mod chars;
mod dedent;
mod error;
mod number;
mod options;
mod rune_reader;
mod token;
mod tokenizer;
#[cfg(feature = "values")]
mod value;

#[cfg(feature = "values")]
pub use builder::build_value;
pub use error::{ReaderError, ReaderResult, SyntaxError};
pub use number::parse_number;
pub use options::{ReaderOptions, ReaderVersion};
pub use rune_reader::{RuneReader, SeekFrom};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
#[cfg(feature = "values")]
pub use value::{Array, Map, Value};

/// Parses `bytes` as a single JSONH document under `options`.
///
/// Requires the `values` feature (on by default); without it, only the
/// [`Tokenizer`] token stream is available.
///
/// # Errors
///
/// Returns a [`ReaderError`] at the first lexical, structural, or semantic
/// failure; see [`SyntaxError`] for the full taxonomy.
#[cfg(feature = "values")]
pub fn parse_element_bytes(bytes: &[u8], options: ReaderOptions) -> ReaderResult<Value> {
    let mut tokenizer = Tokenizer::new(bytes, options);
    build_value(&mut tokenizer, &options)
}

/// Parses `s` as a single JSONH document under `options`.
///
/// # Errors
///
/// See [`parse_element_bytes`].
#[cfg(feature = "values")]
pub fn parse_element(s: &str, options: ReaderOptions) -> ReaderResult<Value> {
    parse_element_bytes(s.as_bytes(), options)
}

/// Parses `bytes` as a single JSONH document under the default options.
///
/// # Errors
///
/// See [`parse_element_bytes`].
#[cfg(feature = "values")]
pub fn parse(bytes: &[u8]) -> ReaderResult<Value> {
    parse_element_bytes(bytes, ReaderOptions::default())
}

#[cfg(all(test, feature = "values"))]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn end_to_end_object() {
        let v = parse_element(
            r#"{
                name: "JSONH",
                version: 2,
                features: ["quoteless", "multiline"],
                stable: true,
                deprecated: null,
            }"#,
            ReaderOptions::default(),
        )
        .unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("name").unwrap().as_str(), Some("JSONH"));
        assert_eq!(obj.get("version").unwrap().as_f64(), Some(2.0));
        assert!(obj.get("stable").unwrap().as_bool().unwrap());
        assert!(obj.get("deprecated").unwrap().is_null());
    }

    #[test]
    fn end_to_end_braceless_top_level() {
        let v = parse("a: 1\nb: [2, 3]\n# trailing comment\n").unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("a").unwrap().as_f64(), Some(1.0));
        assert_eq!(obj.get("b").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn end_to_end_quoteless_array_items_reject_braceless() {
        let err = parse(b"[\n  a: 1\n]").unwrap_err();
        assert_eq!(err.error, SyntaxError::BracelessObjectNotAllowedHere);
    }

    #[test]
    fn end_to_end_malformed_escape_reports_position() {
        let err = parse(br#""\uZZZZ""#).unwrap_err();
        assert!(matches!(err.error, SyntaxError::WrongHexDigitCount { .. }));
    }
}
