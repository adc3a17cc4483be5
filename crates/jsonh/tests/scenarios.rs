#![allow(missing_docs)]

use jsonh::{ReaderOptions, SyntaxError, Token, TokenKind, Tokenizer, Value, parse};

fn token_kinds(src: &str) -> Vec<TokenKind> {
    Tokenizer::from_str(src, ReaderOptions::default())
        .map(|r| r.unwrap().kind)
        .collect()
}

#[test]
fn basic_object_tokens() {
    let tokens: Vec<Token> = Tokenizer::from_str("{\n    \"a\": \"b\"\n}", ReaderOptions::default())
        .map(Result::unwrap)
        .collect();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::String,
            TokenKind::EndObject,
        ]
    );
    assert_eq!(tokens[1].value, "a");
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn array_with_optional_commas_and_quoteless_item() {
    let v = parse(b"[ 1, 2,\n    3\n    4 5, 6 ]").unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0].as_f64(), Some(1.0));
    assert_eq!(arr[1].as_f64(), Some(2.0));
    assert_eq!(arr[2].as_f64(), Some(3.0));
    assert_eq!(arr[3].as_str(), Some("4 5"));
    assert_eq!(arr[4].as_f64(), Some(6.0));
}

#[test]
fn unicode_escape_and_surrogate_pairing_agree() {
    let src = "\"\\U0001F47D and \\uD83D\\uDC7D\"";
    let v = parse(src.as_bytes()).unwrap();
    assert_eq!(v.as_str(), Some("\u{1F47D} and \u{1F47D}"));
}

#[test]
fn multi_quoted_dedent_end_to_end() {
    let src = "\"\"\"\"\n  Hello! Here's a quote: \". Now a double quote: \"\". And a triple quote! \"\"\". Escape: \\\\\\U0001F47D.\n \"\"\"\"";
    let expected = " Hello! Here's a quote: \". Now a double quote: \"\". And a triple quote! \"\"\". Escape: \\\u{1F47D}.";
    let v = parse(src.as_bytes()).unwrap();
    assert_eq!(v.as_str(), Some(expected));
}

#[test]
fn quoteless_text_vs_named_literal() {
    let v = parse(b"[nulla, null b, null]").unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr[0].as_str(), Some("nulla"));
    assert_eq!(arr[1].as_str(), Some("null b"));
    assert!(arr[2].is_null());
}

#[test]
fn numbers_with_base_prefixes_and_separators() {
    let v = parse(b"[0xDEADCAFE, 0b_100, 100__000, 0x5e3, 0x5e+3]").unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr[0].as_f64(), Some(3_735_931_646.0));
    assert_eq!(arr[1].as_f64(), Some(4.0));
    assert_eq!(arr[2].as_f64(), Some(100_000.0));
    assert_eq!(arr[3].as_f64(), Some(1507.0));
    assert_eq!(arr[4].as_f64(), Some(5000.0));

    let fractional_exponent = parse(b"1.2e3.4").unwrap();
    assert_eq!(fractional_exponent.as_f64().unwrap().trunc(), 3014.0);
}

#[test]
fn braceless_object_with_spaces_in_keys() {
    let v = parse(b"a b: c d").unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("a b").unwrap().as_str(), Some("c d"));
}

#[test]
fn comment_mix_inside_array() {
    let v = parse(b"[1 # hash\n 2 // line\n 3 /* block */, 4]").unwrap();
    let arr = v.as_array().unwrap();
    let nums: Vec<f64> = arr.iter().map(|n| n.as_f64().unwrap()).collect();
    assert_eq!(nums, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn unterminated_braceless_property_value_is_an_error() {
    assert!(parse(b"a: {").is_err());
}

#[test]
fn braceless_object_inside_array_is_rejected() {
    let err = parse(b"[\n a: b\n c: d\n]").unwrap_err();
    assert_eq!(err.error, SyntaxError::BracelessObjectNotAllowedHere);
}

#[test]
fn number_followed_by_text_is_one_quoteless_string() {
    let v = parse(b"6 ab a").unwrap();
    assert_eq!(v, Value::String("6 ab a".into()));
}

#[test]
fn comment_tokens_do_not_change_the_structural_shape() {
    let with_comments = token_kinds("{ # leading\n a: 1 // trailing\n}");
    let without: Vec<TokenKind> = with_comments
        .iter()
        .copied()
        .filter(|k| *k != TokenKind::Comment)
        .collect();
    assert_eq!(
        without,
        [
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::Number,
            TokenKind::EndObject,
        ]
    );
}
