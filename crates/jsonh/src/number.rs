//! Converts a lexed JSONH numeric literal into a 64-bit real.
//!
//! The numeric grammar (§4.2.4 of the design) supports decimal, hexadecimal
//! (`0x`), binary (`0b`), and octal (`0o`) mantissas, `_` digit separators,
//! and a fractional exponent (`1.2e3.4`). This module implements the
//! normalisation algorithm: strip separators, split sign/base/exponent, parse
//! mantissa and exponent as fractional numbers in their declared base, then
//! combine as `mantissa * 10^exponent`.
//!
//! Precision loss for very large magnitudes is accepted, per the design:
//! the target representation is `f64`, not an arbitrary-precision type.

use alloc::string::String;

use crate::error::SyntaxError;

/// The digit alphabet a numeric literal's mantissa and exponent are parsed
/// in, selected by an optional `0x`/`0b`/`0o` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Base {
    fn radix(self) -> f64 {
        match self {
            Base::Binary => 2.0,
            Base::Octal => 8.0,
            Base::Decimal => 10.0,
            Base::Hex => 16.0,
        }
    }

    fn display(self) -> u8 {
        self.radix() as u8
    }

    fn digit_value(self, c: char) -> Option<u32> {
        let v = c.to_digit(16)?;
        let max = match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hex => 16,
        };
        if v < max { Some(v) } else { None }
    }
}

/// Parses the lexical text of a JSONH `Number` token into an `f64`.
///
/// `text` is the token's raw consumed text, including any digit separators,
/// base prefix, sign, and exponent — exactly what [`crate::Tokenizer`]
/// records in a `Number` token's value.
///
/// # Errors
///
/// Returns [`SyntaxError::EmptyNumber`] if the mantissa has no digits, or
/// [`SyntaxError::InvalidDigitForBase`] if a character outside the declared
/// base's alphabet appears in the mantissa or exponent.
pub fn parse_number(text: &str) -> Result<f64, SyntaxError> {
    let stripped: String = text.chars().filter(|&c| c != '_').collect();
    if stripped.is_empty() {
        return Err(SyntaxError::EmptyNumber);
    }

    let (negative, rest) = match stripped.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, stripped.strip_prefix('+').unwrap_or(&stripped)),
    };

    let (base, rest) = detect_base(rest);
    let (mantissa_text, exponent_text) = split_exponent(rest, base);

    if mantissa_text.is_empty() {
        return Err(SyntaxError::EmptyNumber);
    }
    let mantissa = parse_fractional(mantissa_text, base)?;

    let exponent = match exponent_text {
        Some(exp) => {
            let (exp_negative, exp_digits) = match exp.strip_prefix('-') {
                Some(d) => (true, d),
                None => (false, exp.strip_prefix('+').unwrap_or(exp)),
            };
            if exp_digits.is_empty() {
                return Err(SyntaxError::EmptyNumber);
            }
            let value = parse_fractional(exp_digits, base)?;
            if exp_negative { -value } else { value }
        }
        None => 0.0,
    };

    let magnitude = mantissa * 10f64.powf(exponent);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Strips a `0x`/`0X`, `0b`/`0B`, or `0o`/`0O` prefix and returns the
/// selected base and the remaining text.
fn detect_base(rest: &str) -> (Base, &str) {
    if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (Base::Hex, r)
    } else if let Some(r) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (Base::Binary, r)
    } else if let Some(r) = rest.strip_prefix("0o").or_else(|| rest.strip_prefix("0O")) {
        (Base::Octal, r)
    } else {
        (Base::Decimal, rest)
    }
}

/// Splits `rest` into `(mantissa, exponent)` on the exponent marker.
///
/// In hex mode, `e`/`E` are valid mantissa digits, so only an `e`/`E`
/// immediately followed by `+` or `-` counts as the exponent marker
/// (`0xe3` is a three-digit hex number; `0xe+3` is an exponent). In every
/// other base, the first `e`/`E` is always the splitter.
fn split_exponent(rest: &str, base: Base) -> (&str, Option<&str>) {
    if base == Base::Hex {
        let bytes = rest.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if matches!(b, b'e' | b'E') && matches!(bytes.get(i + 1), Some(b'+' | b'-')) {
                return (&rest[..i], Some(&rest[i + 1..]));
            }
        }
        (rest, None)
    } else {
        match rest.find(['e', 'E']) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        }
    }
}

/// Parses `text` as a fractional number in `base`: splits on `.`, parses
/// each side as an unsigned integer in the alphabet, and combines as
/// `whole + fraction / base^fraction_digits`. Leading zeros in the
/// fractional part are significant (they shift the value), which falls out
/// naturally from dividing by `base^len` rather than normalising first.
fn parse_fractional(text: &str, base: Base) -> Result<f64, SyntaxError> {
    let mut parts = text.splitn(2, '.');
    let whole_text = parts.next().unwrap_or("");
    let frac_text = parts.next();

    if whole_text.is_empty() && frac_text.is_none_or(str::is_empty) {
        return Err(SyntaxError::EmptyNumber);
    }

    let whole = parse_uint(whole_text, base)?;
    let fraction = match frac_text {
        Some(f) if !f.is_empty() => {
            let value = parse_uint(f, base)?;
            value / base.radix().powi(f.chars().count() as i32)
        }
        _ => 0.0,
    };
    Ok(whole + fraction)
}

/// Parses `text` as an unsigned integer in `base`, accumulating in `f64` so
/// arbitrarily long digit runs degrade gracefully to limited precision
/// instead of overflowing, matching the design's accepted precision loss.
fn parse_uint(text: &str, base: Base) -> Result<f64, SyntaxError> {
    let mut acc = 0.0_f64;
    for c in text.chars() {
        let digit = base.digit_value(c).ok_or(SyntaxError::InvalidDigitForBase {
            digit: c,
            base: base.display(),
        })?;
        acc = acc * base.radix() + f64::from(digit);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_number;

    #[rstest]
    #[case("0", 0.0)]
    #[case("100000", 100000.0)]
    #[case("100__000", 100000.0)]
    #[case("0xDEADCAFE", 3_735_931_646.0)]
    #[case("0b_100", 4.0)]
    #[case("0x5e3", 1507.0)]
    #[case("0x5e+3", 5000.0)]
    #[case("0o17", 15.0)]
    #[case("-5", -5.0)]
    #[case("+5", 5.0)]
    #[case("1.5", 1.5)]
    #[case("1.50", 1.5)]
    #[case("0.05", 0.05)]
    fn parses_expected_value(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_number(text).unwrap(), expected);
    }

    #[test]
    fn fractional_exponent() {
        let value = parse_number("1.2e3.4").unwrap();
        assert!((value - 3014.0).abs() < 1.0, "got {value}");
        assert_eq!(value.trunc(), 3014.0);
    }

    #[test]
    fn sign_respecting() {
        for text in ["5", "1.5", "0x5e3", "1.2e3.4", "0b101"] {
            let positive = parse_number(text).unwrap();
            let negative = parse_number(&alloc::format!("-{text}")).unwrap();
            assert_eq!(negative, -positive);
        }
    }

    #[test]
    fn rejects_empty_mantissa() {
        assert!(parse_number("").is_err());
        assert!(parse_number("0x").is_err());
    }

    #[test]
    fn rejects_invalid_digit() {
        assert!(parse_number("0b2").is_err());
        assert!(parse_number("0o8").is_err());
    }
}
