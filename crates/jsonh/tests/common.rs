#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use jsonh::{Map, Value};
use serde_json::Value as JsonValue;

/// A JSON document (valid under RFC 8259) used to check that this crate's
/// quoted/braced subset round-trips against an independent JSON parser.
pub const JSON_SAMPLE: &str = r#"{
    "name": "JSONH",
    "version": 2,
    "features": ["quoteless", "multiline", "comments"],
    "stable": true,
    "deprecated": null,
    "limits": {
        "max_depth": 64,
        "ratio": -0.5
    },
    "aliases": []
}"#;

/// Converts a `serde_json::Value` into this crate's `Value`, so the two
/// trees can be compared directly without stringifying either one.
pub fn from_serde_json(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap()),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(from_serde_json).collect()),
        JsonValue::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(k.clone(), from_serde_json(v));
            }
            Value::Object(out)
        }
    }
}
