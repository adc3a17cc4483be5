//! Folds a [`Tokenizer`]'s token stream into a generic [`Value`] tree.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{ReaderError, ReaderResult, SyntaxError};
use crate::number::parse_number;
use crate::options::ReaderOptions;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;
use crate::value::{Map, Value};

/// A container still being assembled, held on the builder's stack.
enum Building {
    Array(Vec<Value>),
    /// The pending property name, once a `PropertyName` token has been seen
    /// but its value has not yet arrived.
    Object(Map, Option<String>),
}

/// Drains `tokenizer` and assembles its token stream into a single [`Value`].
///
/// Discards `Comment` tokens. If `options.parse_single_element` is set,
/// fails with [`SyntaxError::ExpectedEndOfElements`] when non-whitespace,
/// non-comment content follows the root value.
///
/// # Errors
///
/// Propagates any [`ReaderError`] the tokenizer raises, and raises its own
/// [`SyntaxError::UnexpectedTokenOutsideContainer`] if the token stream is
/// structurally inconsistent (should not occur for tokens produced by
/// [`Tokenizer`] itself).
pub fn build_value(tokenizer: &mut Tokenizer<'_>, options: &ReaderOptions) -> ReaderResult<Value> {
    let mut stack: Vec<Building> = Vec::new();
    let mut root: Option<Value> = None;

    while let Some(tok) = tokenizer.next_token() {
        let tok = tok?;
        match tok.kind {
            TokenKind::Comment => {}
            TokenKind::StartObject => stack.push(Building::Object(Map::new(), None)),
            TokenKind::StartArray => stack.push(Building::Array(Vec::new())),
            TokenKind::PropertyName => match stack.last_mut() {
                Some(Building::Object(_, pending)) => *pending = Some(tok.value),
                _ => {
                    return Err(ReaderError::new(
                        SyntaxError::UnexpectedTokenOutsideContainer,
                        tokenizer.position(),
                    ));
                }
            },
            TokenKind::EndObject => match stack.pop() {
                Some(Building::Object(map, _)) => {
                    attach(&mut stack, &mut root, Value::Object(map), tokenizer)?;
                }
                _ => {
                    return Err(ReaderError::new(
                        SyntaxError::UnexpectedTokenOutsideContainer,
                        tokenizer.position(),
                    ));
                }
            },
            TokenKind::EndArray => match stack.pop() {
                Some(Building::Array(items)) => {
                    attach(&mut stack, &mut root, Value::Array(items), tokenizer)?;
                }
                _ => {
                    return Err(ReaderError::new(
                        SyntaxError::UnexpectedTokenOutsideContainer,
                        tokenizer.position(),
                    ));
                }
            },
            TokenKind::String => {
                attach(&mut stack, &mut root, Value::String(tok.value), tokenizer)?;
            }
            TokenKind::Number => {
                let n = parse_number(&tok.value)
                    .map_err(|e| ReaderError::new(e, tokenizer.position()))?;
                attach(&mut stack, &mut root, Value::Number(n), tokenizer)?;
            }
            TokenKind::TrueBool => {
                attach(&mut stack, &mut root, Value::Boolean(true), tokenizer)?;
            }
            TokenKind::FalseBool => {
                attach(&mut stack, &mut root, Value::Boolean(false), tokenizer)?;
            }
            TokenKind::Null => {
                attach(&mut stack, &mut root, Value::Null, tokenizer)?;
            }
            TokenKind::None => {
                return Err(ReaderError::new(
                    SyntaxError::UnexpectedTokenOutsideContainer,
                    tokenizer.position(),
                ));
            }
        }
    }

    let value = root.ok_or_else(|| {
        ReaderError::new(SyntaxError::UnexpectedEndOfInput, tokenizer.position())
    })?;

    if options.parse_single_element && tokenizer.has_trailing_content() {
        return Err(ReaderError::new(
            SyntaxError::ExpectedEndOfElements,
            tokenizer.position(),
        ));
    }

    Ok(value)
}

fn attach(
    stack: &mut Vec<Building>,
    root: &mut Option<Value>,
    value: Value,
    tokenizer: &Tokenizer<'_>,
) -> ReaderResult<()> {
    match stack.last_mut() {
        Some(Building::Array(items)) => {
            items.push(value);
            Ok(())
        }
        Some(Building::Object(map, pending)) => match pending.take() {
            Some(name) => {
                map.insert(name, value);
                Ok(())
            }
            None => Err(ReaderError::new(
                SyntaxError::UnexpectedTokenOutsideContainer,
                tokenizer.position(),
            )),
        },
        None => {
            if root.is_some() {
                Err(ReaderError::new(
                    SyntaxError::UnexpectedTokenOutsideContainer,
                    tokenizer.position(),
                ))
            } else {
                *root = Some(value);
                Ok(())
            }
        }
    }
}
