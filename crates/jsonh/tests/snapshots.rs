#![allow(missing_docs)]

use jsonh::parse;

#[test]
fn snapshot_small_object_value() {
    let v = parse(br#"{"a": 1, "b": [true, null]}"#).unwrap();
    insta::assert_debug_snapshot!(v, @r#"
    Object(
        Map {
            entries: [
                (
                    "a",
                    Number(
                        1.0,
                    ),
                ),
                (
                    "b",
                    Array(
                        [
                            Boolean(
                                true,
                            ),
                            Null,
                        ],
                    ),
                ),
            ],
        },
    )
    "#);
}
