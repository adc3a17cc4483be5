#![allow(missing_docs)]

mod common;

use jsonh::parse;
use quickcheck::{Arbitrary, Gen, QuickCheck};
use serde_json::{Map, Value as JsonValue};

/// An integer-valued `f64` within `i32` range.
///
/// `parse_number` accumulates digits as `acc * base + digit` rather than
/// using a correctly-rounded decimal-to-binary algorithm, so it only
/// promises exact round-tripping for magnitudes this small (see
/// `parse_uint` in `number.rs`); generating the full `f64` range here would
/// make this property flaky on values `serde_json` prints with more
/// significant digits than the accumulator preserves.
#[derive(Debug, Clone, Copy)]
struct FiniteNumber(f64);

impl Arbitrary for FiniteNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(f64::from(i32::arbitrary(g)))
    }
}

/// A bounded-depth `serde_json::Value`, generated the way `quickcheck`
/// grows any other recursive type: depth-limited so large documents don't
/// blow the stack, width-limited so documents stay small enough to shrink
/// usefully on failure.
#[derive(Debug, Clone)]
struct JsonDoc(JsonValue);

impl Arbitrary for JsonDoc {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> JsonValue {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => JsonValue::Null,
                    1 => JsonValue::Bool(bool::arbitrary(g)),
                    2 => JsonValue::Number(
                        serde_json::Number::from_f64(FiniteNumber::arbitrary(g).0).unwrap(),
                    ),
                    _ => JsonValue::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => JsonValue::Null,
                    1 => JsonValue::Bool(bool::arbitrary(g)),
                    2 => JsonValue::Number(
                        serde_json::Number::from_f64(FiniteNumber::arbitrary(g).0).unwrap(),
                    ),
                    3 => JsonValue::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 3;
                        JsonValue::Array((0..len).map(|_| gen_val(g, depth - 1)).collect())
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 3;
                        let mut map = Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                        }
                        JsonValue::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        Self(gen_val(g, depth))
    }
}

fn quickcheck_tests() -> usize {
    if cfg!(any(miri, feature = "test-fast")) {
        20
    } else if is_ci::cached() {
        5_000
    } else {
        500
    }
}

/// Property: any tree `serde_json` can print is a tree this reader parses
/// back to the same value, since JSON is a strict subset of JSONH.
#[test]
fn json_text_parses_to_the_same_tree_it_was_printed_from() {
    fn prop(doc: JsonDoc) -> bool {
        let text = doc.0.to_string();
        let expected = common::from_serde_json(&doc.0);
        parse(text.as_bytes()).as_ref() == Ok(&expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests() as u64)
        .quickcheck(prop as fn(JsonDoc) -> bool);
}

/// Property: a line comment inserted between two tokens never changes the
/// parsed shape of a document, since comments are transparent to the tree
/// builder.
#[test]
fn line_comments_between_tokens_do_not_change_the_parsed_value() {
    fn prop(doc: JsonDoc) -> bool {
        let plain = doc.0.to_string();
        let expected = common::from_serde_json(&doc.0);

        let mut commented = String::new();
        let mut in_string = false;
        let mut escaped = false;
        for ch in plain.chars() {
            commented.push(ch);
            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
                continue;
            }
            if ch == '"' {
                in_string = true;
            } else if matches!(ch, ',' | '{' | '[') {
                commented.push_str(" # inline note\n");
            }
        }

        parse(commented.as_bytes()).as_ref() == Ok(&expected)
    }

    QuickCheck::new()
        .tests(quickcheck_tests() as u64)
        .quickcheck(prop as fn(JsonDoc) -> bool);
}
