#![allow(missing_docs)]

mod common;

use jsonh::{Value, parse};

#[test]
fn valid_json_parses_to_the_equivalent_value_tree() {
    let expected = common::from_serde_json(&serde_json::from_str(common::JSON_SAMPLE).unwrap());
    let actual = parse(common::JSON_SAMPLE.as_bytes()).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn quoted_json_object_keys_keep_their_source_order() {
    let v = parse(br#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let obj = v.as_object().unwrap();
    let keys: Vec<&str> = obj.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn every_rfc8259_scalar_kind_round_trips() {
    for (src, expected) in [
        ("null", Value::Null),
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("0", Value::Number(0.0)),
        ("-12.5", Value::Number(-12.5)),
        ("\"hi\"", Value::String("hi".into())),
    ] {
        assert_eq!(parse(src.as_bytes()).unwrap(), expected, "input: {src}");
    }
}
