//! The JSONH lexical/structural grammar: bytes in, a flat token stream out.
//!
//! [`Tokenizer`] is a pull parser: each call to [`Tokenizer::next_token`] (or
//! the [`Iterator`] adapter) advances the cursor just far enough to produce
//! one [`Token`], interleaving structural tokens (`StartObject`, `PropertyName`,
//! ...) with any `Comment` tokens encountered along the way, in strict
//! source-text order. Once an error is produced the stream is terminated:
//! every subsequent call returns `None`.
//!
//! Container nesting is tracked with an explicit stack rather than host-language
//! recursion, so [`crate::ReaderOptions::max_depth`] bounds real recursion, not
//! just a counter alongside it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::chars::{is_newline, is_reserved, is_whitespace};
use crate::dedent::dedent;
use crate::error::{ReaderError, ReaderResult, SyntaxError};
use crate::options::{ReaderOptions, ReaderVersion};
use crate::rune_reader::{RuneReader, SeekFrom};
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectStep {
    ExpectNameOrEnd,
    ExpectColon,
    ExpectValue,
    AfterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayStep {
    ExpectItemOrEnd,
    AfterItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object { braceless: bool, step: ObjectStep },
    Array { step: ArrayStep },
}

/// What [`Tokenizer::advance`] did on one internal step.
enum Step {
    Token(Token),
    /// Cursor state changed (e.g. a colon or comma was consumed) but no
    /// token resulted; the driver loops and tries again.
    Continue,
    Error(SyntaxError),
    /// The root element is complete and nothing more can be produced.
    Done,
}

/// A pull parser over a JSONH byte source, producing a flat [`Token`] stream.
///
/// Construct with [`Tokenizer::new`] or [`Tokenizer::from_str`], then either
/// call [`Tokenizer::next_token`] in a loop or use the `Iterator` impl.
pub struct Tokenizer<'a> {
    reader: RuneReader<'a>,
    options: ReaderOptions,
    version: ReaderVersion,
    stack: Vec<Frame>,
    root_complete: bool,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over a borrowed byte slice.
    #[must_use]
    pub fn new(bytes: &'a [u8], options: ReaderOptions) -> Self {
        let version = options.version.resolve();
        Self {
            reader: RuneReader::new(bytes),
            options,
            version,
            stack: Vec::new(),
            root_complete: false,
            finished: false,
        }
    }

    /// Creates a tokenizer over a borrowed string slice.
    #[must_use]
    pub fn from_str(s: &'a str, options: ReaderOptions) -> Self {
        Self::new(s.as_bytes(), options)
    }

    /// The cursor's current byte offset into the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns `true` once a non-whitespace, non-comment byte remains
    /// unconsumed after the root element completed. Used by the tree
    /// builder to implement [`crate::ReaderOptions::parse_single_element`].
    #[must_use]
    pub fn has_trailing_content(&mut self) -> bool {
        if !self.root_complete {
            return false;
        }
        self.skip_ws();
        self.reader.peek().is_some()
    }

    fn fail(&mut self, err: SyntaxError) -> ReaderError {
        self.finished = true;
        ReaderError::new(err, self.reader.position())
    }

    /// Advances the cursor and returns the next token, or `None` once the
    /// stream is exhausted (root element complete and only trailing
    /// whitespace/comments remain, or a prior call already errored).
    pub fn next_token(&mut self) -> Option<ReaderResult<Token>> {
        if self.finished {
            return None;
        }
        loop {
            self.skip_ws();
            match self.try_read_comment() {
                Ok(Some(body)) => return Some(Ok(Token::with_value(TokenKind::Comment, body))),
                Ok(None) => {}
                Err(e) => return Some(Err(self.fail(e))),
            }
            match self.advance() {
                Step::Token(tok) => return Some(Ok(tok)),
                Step::Continue => continue,
                Step::Error(e) => return Some(Err(self.fail(e))),
                Step::Done => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }

    /// Advances the cursor to the top-level (depth-1) property named `name`,
    /// leaving the reader positioned immediately after its `:`. Returns
    /// `Ok(false)` if the root object has no such property.
    ///
    /// # Errors
    ///
    /// Returns a [`ReaderError`] if the input is malformed before the
    /// property (or the end of the object) is reached.
    pub fn find_property_value(&mut self, name: &str) -> ReaderResult<bool> {
        loop {
            match self.next_token() {
                None => return Ok(false),
                Some(Err(e)) => return Err(e),
                Some(Ok(tok)) => {
                    if tok.kind == TokenKind::PropertyName
                        && self.stack.len() == 1
                        && tok.value == name
                    {
                        self.consume_colon()?;
                        if let Some(Frame::Object { step, .. }) = self.stack.last_mut() {
                            *step = ObjectStep::ExpectValue;
                        }
                        return Ok(true);
                    }
                }
            }
        }
    }

    fn consume_colon(&mut self) -> ReaderResult<()> {
        loop {
            self.skip_ws();
            match self.try_read_comment() {
                Ok(Some(_)) => continue,
                Ok(None) => {}
                Err(e) => return Err(self.fail(e)),
            }
            return if self.reader.read_one(':') {
                Ok(())
            } else {
                Err(self.fail(SyntaxError::ExpectedColonAfterPropertyName))
            };
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.reader.peek() {
            if is_whitespace(c) {
                self.reader.read();
            } else {
                break;
            }
        }
    }

    /// Non-destructively checks whether, after any amount of whitespace and
    /// comments, a `:` follows. Used to decide string/property-name
    /// ambiguity without committing to the scan.
    fn peek_colon_ahead(&mut self) -> bool {
        let saved = self.reader.position();
        loop {
            self.skip_ws();
            match self.try_read_comment() {
                Ok(Some(_)) => continue,
                _ => break,
            }
        }
        let is_colon = self.reader.peek() == Some(':');
        self.reader.seek(SeekFrom::Start(saved));
        is_colon
    }

    fn try_read_comment(&mut self) -> Result<Option<String>, SyntaxError> {
        match self.reader.peek() {
            Some('#') => {
                self.reader.read();
                Ok(Some(self.read_line_comment_body()))
            }
            Some('/') => {
                let save = self.reader.position();
                self.reader.read();
                match self.reader.peek() {
                    Some('/') => {
                        self.reader.read();
                        Ok(Some(self.read_line_comment_body()))
                    }
                    Some('*') => {
                        self.reader.read();
                        Ok(Some(self.read_block_comment_body(None)?))
                    }
                    Some('=') if self.version.supports_version(ReaderVersion::V2) => {
                        let mut n = 0u32;
                        while self.reader.read_one('=') {
                            n += 1;
                        }
                        if self.reader.read_one('*') {
                            Ok(Some(self.read_block_comment_body(Some(n))?))
                        } else {
                            self.reader.seek(SeekFrom::Start(save));
                            Err(SyntaxError::UnexpectedCharacterAfterSlash)
                        }
                    }
                    _ => {
                        self.reader.seek(SeekFrom::Start(save));
                        Err(SyntaxError::UnexpectedCharacterAfterSlash)
                    }
                }
            }
            _ => Ok(None),
        }
    }

    fn read_line_comment_body(&mut self) -> String {
        let mut body = String::new();
        while let Some(c) = self.reader.peek() {
            if is_newline(c) {
                break;
            }
            body.push(c);
            self.reader.read();
        }
        body
    }

    /// `fence` is `None` for a plain `/* */` comment, `Some(n)` for a
    /// nestable `/==*{n} ... *==/{n}` comment.
    fn read_block_comment_body(&mut self, fence: Option<u32>) -> Result<String, SyntaxError> {
        let mut body = String::new();
        loop {
            match self.reader.peek() {
                None => return Err(SyntaxError::UnterminatedBlockComment),
                Some('*') => {
                    let save = self.reader.position();
                    self.reader.read();
                    let matched = match fence {
                        None => self.reader.read_one('/'),
                        Some(n) => {
                            let mut eq = 0u32;
                            while self.reader.read_one('=') {
                                eq += 1;
                            }
                            if eq == n {
                                self.reader.read_one('/')
                            } else {
                                false
                            }
                        }
                    };
                    if matched {
                        return Ok(body);
                    }
                    self.reader.seek(SeekFrom::Start(save));
                    body.push('*');
                    self.reader.read();
                }
                Some(c) => {
                    body.push(c);
                    self.reader.read();
                }
            }
        }
    }

    fn push_frame_checked(&mut self, frame: Frame) -> Result<(), SyntaxError> {
        if self.stack.len() >= self.options.max_depth {
            return Err(SyntaxError::ExceededMaxDepth);
        }
        self.stack.push(frame);
        Ok(())
    }

    fn advance(&mut self) -> Step {
        match self.stack.pop() {
            None => self.advance_top_level(),
            Some(Frame::Object { braceless, step }) => self.advance_object(braceless, step),
            Some(Frame::Array { step }) => self.advance_array(step),
        }
    }

    fn advance_top_level(&mut self) -> Step {
        if self.root_complete {
            return Step::Done;
        }
        match self.reader.peek() {
            None => Step::Error(SyntaxError::UnexpectedEndOfInput),
            Some('{') => {
                self.reader.read();
                match self.push_frame_checked(Frame::Object {
                    braceless: false,
                    step: ObjectStep::ExpectNameOrEnd,
                }) {
                    Ok(()) => Step::Token(Token::structural(TokenKind::StartObject)),
                    Err(e) => Step::Error(e),
                }
            }
            Some('[') => {
                self.reader.read();
                match self.push_frame_checked(Frame::Array {
                    step: ArrayStep::ExpectItemOrEnd,
                }) {
                    Ok(()) => Step::Token(Token::structural(TokenKind::StartArray)),
                    Err(e) => Step::Error(e),
                }
            }
            Some(_) => match self.read_primitive() {
                Ok(prim) => {
                    if prim.kind == TokenKind::String && self.peek_colon_ahead() {
                        match self.push_frame_checked(Frame::Object {
                            braceless: true,
                            step: ObjectStep::ExpectColon,
                        }) {
                            Ok(()) => {
                                Step::Token(Token::with_value(TokenKind::PropertyName, prim.value))
                            }
                            Err(e) => Step::Error(e),
                        }
                    } else {
                        self.root_complete = true;
                        Step::Token(prim)
                    }
                }
                Err(e) => Step::Error(e),
            },
        }
    }

    fn advance_object(&mut self, braceless: bool, step: ObjectStep) -> Step {
        match step {
            ObjectStep::ExpectNameOrEnd => {
                if !braceless && self.reader.read_one('}') {
                    if self.stack.is_empty() {
                        self.root_complete = true;
                    }
                    return Step::Token(Token::structural(TokenKind::EndObject));
                }
                if self.reader.peek().is_none() {
                    if braceless || self.options.incomplete_inputs {
                        if self.stack.is_empty() {
                            self.root_complete = true;
                        }
                        return Step::Token(Token::structural(TokenKind::EndObject));
                    }
                    return Step::Error(SyntaxError::ExpectedEndOfObject);
                }
                match self.read_property_name() {
                    Ok(name) => {
                        self.stack.push(Frame::Object {
                            braceless,
                            step: ObjectStep::ExpectColon,
                        });
                        Step::Token(Token::with_value(TokenKind::PropertyName, name))
                    }
                    Err(e) => Step::Error(e),
                }
            }
            ObjectStep::ExpectColon => {
                if self.reader.read_one(':') {
                    self.stack.push(Frame::Object {
                        braceless,
                        step: ObjectStep::ExpectValue,
                    });
                    Step::Continue
                } else {
                    Step::Error(SyntaxError::ExpectedColonAfterPropertyName)
                }
            }
            ObjectStep::ExpectValue => self.advance_value(braceless, true),
            ObjectStep::AfterValue => {
                self.reader.read_one(',');
                self.stack.push(Frame::Object {
                    braceless,
                    step: ObjectStep::ExpectNameOrEnd,
                });
                Step::Continue
            }
        }
    }

    fn advance_array(&mut self, step: ArrayStep) -> Step {
        match step {
            ArrayStep::ExpectItemOrEnd => {
                if self.reader.read_one(']') {
                    if self.stack.is_empty() {
                        self.root_complete = true;
                    }
                    return Step::Token(Token::structural(TokenKind::EndArray));
                }
                if self.reader.peek().is_none() {
                    if self.options.incomplete_inputs {
                        if self.stack.is_empty() {
                            self.root_complete = true;
                        }
                        return Step::Token(Token::structural(TokenKind::EndArray));
                    }
                    return Step::Error(SyntaxError::ExpectedEndOfArray);
                }
                self.advance_value(false, false)
            }
            ArrayStep::AfterItem => {
                self.reader.read_one(',');
                self.stack.push(Frame::Array {
                    step: ArrayStep::ExpectItemOrEnd,
                });
                Step::Continue
            }
        }
    }

    /// Shared by an object's property value and an array's item: parses one
    /// element, pushing a nested frame for containers or emitting a
    /// primitive directly. `in_object` selects which frame kind's
    /// `AfterValue`/`AfterItem` step to restore.
    fn advance_value(&mut self, braceless: bool, in_object: bool) -> Step {
        match self.reader.peek() {
            None => Step::Error(SyntaxError::UnexpectedEndOfInput),
            Some('{') => {
                self.reader.read();
                self.restore_after_value(braceless, in_object);
                match self.push_frame_checked(Frame::Object {
                    braceless: false,
                    step: ObjectStep::ExpectNameOrEnd,
                }) {
                    Ok(()) => Step::Token(Token::structural(TokenKind::StartObject)),
                    Err(e) => Step::Error(e),
                }
            }
            Some('[') => {
                self.reader.read();
                self.restore_after_value(braceless, in_object);
                match self.push_frame_checked(Frame::Array {
                    step: ArrayStep::ExpectItemOrEnd,
                }) {
                    Ok(()) => Step::Token(Token::structural(TokenKind::StartArray)),
                    Err(e) => Step::Error(e),
                }
            }
            Some(_) => match self.read_primitive() {
                Ok(prim) => {
                    if prim.kind == TokenKind::String && self.peek_colon_ahead() {
                        Step::Error(SyntaxError::BracelessObjectNotAllowedHere)
                    } else {
                        self.restore_after_value(braceless, in_object);
                        Step::Token(prim)
                    }
                }
                Err(e) => Step::Error(e),
            },
        }
    }

    fn restore_after_value(&mut self, braceless: bool, in_object: bool) {
        if in_object {
            self.stack.push(Frame::Object {
                braceless,
                step: ObjectStep::AfterValue,
            });
        } else {
            self.stack.push(Frame::Array {
                step: ArrayStep::AfterItem,
            });
        }
    }

    fn read_property_name(&mut self) -> Result<String, SyntaxError> {
        match self.reader.peek() {
            Some('@') if self.version.supports_version(ReaderVersion::V2) => {
                self.read_verbatim(true).map(|t| t.value)
            }
            Some('"' | '\'') => self.read_quoted(false).map(|t| t.value),
            _ => self.read_quoteless(String::new(), false, true).map(|t| t.value),
        }
    }

    fn read_primitive(&mut self) -> Result<Token, SyntaxError> {
        match self.reader.peek() {
            Some('@') if self.version.supports_version(ReaderVersion::V2) => {
                self.read_verbatim(false)
            }
            Some('"' | '\'') => self.read_quoted(false),
            Some(c) if matches!(c, '0'..='9' | '-' | '+' | '.') => self.read_number_or_quoteless(),
            _ => self.read_quoteless(String::new(), false, false),
        }
    }

    fn read_verbatim(&mut self, is_property_name: bool) -> Result<Token, SyntaxError> {
        self.reader.read(); // consume '@'
        match self.reader.peek() {
            None => Err(SyntaxError::ExpectedStringAfterVerbatimSymbol),
            Some(c) if is_whitespace(c) || c == '#' || c == '/' => {
                Err(SyntaxError::ExpectedStringAfterVerbatimSymbol)
            }
            Some('"' | '\'') => self.read_quoted(true),
            Some(_) => self.read_quoteless(String::new(), true, is_property_name),
        }
    }

    fn read_quoted(&mut self, verbatim: bool) -> Result<Token, SyntaxError> {
        let quote = self.reader.read().expect("peeked quote rune");
        let mut n = 1u32;
        while self.reader.read_one(quote) {
            n += 1;
        }
        if n == 2 {
            return Ok(Token::with_value(TokenKind::String, String::new()));
        }
        let body = if n == 1 {
            self.read_single_line_body(quote, verbatim)?
        } else {
            dedent(&self.read_multi_quoted_body(quote, n, verbatim)?)
        };
        Ok(Token::with_value(TokenKind::String, body))
    }

    fn read_single_line_body(&mut self, quote: char, verbatim: bool) -> Result<String, SyntaxError> {
        let mut body = String::new();
        loop {
            match self.reader.peek() {
                None => return Err(SyntaxError::UnterminatedString),
                Some(c) if c == quote => {
                    self.reader.read();
                    return Ok(body);
                }
                Some('\\') if !verbatim => {
                    self.reader.read();
                    body.push_str(&self.read_escape()?);
                }
                Some(c) => {
                    body.push(c);
                    self.reader.read();
                }
            }
        }
    }

    fn read_multi_quoted_body(
        &mut self,
        quote: char,
        n: u32,
        verbatim: bool,
    ) -> Result<String, SyntaxError> {
        let mut body = String::new();
        loop {
            match self.reader.peek() {
                None => return Err(SyntaxError::UnterminatedString),
                Some('\\') if !verbatim => {
                    self.reader.read();
                    body.push_str(&self.read_escape()?);
                }
                Some(c) if c == quote => {
                    let mut count = 0u32;
                    while self.reader.read_one(quote) {
                        count += 1;
                    }
                    if count >= n {
                        if count > n {
                            for _ in 0..(count - n) {
                                body.push(quote);
                            }
                        }
                        return Ok(body);
                    }
                    for _ in 0..count {
                        body.push(quote);
                    }
                }
                Some(c) => {
                    body.push(c);
                    self.reader.read();
                }
            }
        }
    }

    fn read_escape(&mut self) -> Result<String, SyntaxError> {
        match self.reader.peek() {
            None => Err(SyntaxError::UnterminatedString),
            Some(c) => match c {
                '\\' => {
                    self.reader.read();
                    Ok("\\".to_string())
                }
                'b' => {
                    self.reader.read();
                    Ok("\u{08}".to_string())
                }
                'f' => {
                    self.reader.read();
                    Ok("\u{0C}".to_string())
                }
                'n' => {
                    self.reader.read();
                    Ok("\n".to_string())
                }
                'r' => {
                    self.reader.read();
                    Ok("\r".to_string())
                }
                't' => {
                    self.reader.read();
                    Ok("\t".to_string())
                }
                'v' => {
                    self.reader.read();
                    Ok("\u{0B}".to_string())
                }
                '0' => {
                    self.reader.read();
                    Ok("\u{00}".to_string())
                }
                'a' => {
                    self.reader.read();
                    Ok("\u{07}".to_string())
                }
                'e' => {
                    self.reader.read();
                    Ok("\u{1B}".to_string())
                }
                'u' => {
                    self.reader.read();
                    self.read_hex_escape(4)
                }
                'x' => {
                    self.reader.read();
                    self.read_hex_escape(2)
                }
                'U' => {
                    self.reader.read();
                    self.read_hex_escape(8)
                }
                c if is_newline(c) => {
                    self.reader.read();
                    if c == '\r' && self.reader.peek() == Some('\n') {
                        self.reader.read();
                    }
                    Ok(String::new())
                }
                other => {
                    self.reader.read();
                    Ok(other.to_string())
                }
            },
        }
    }

    fn read_hex_digits(&mut self, digits: u8) -> Option<u32> {
        let save = self.reader.position();
        let mut value = 0u32;
        for _ in 0..digits {
            match self.reader.peek().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    value = value * 16 + d;
                    self.reader.read();
                }
                None => {
                    self.reader.seek(SeekFrom::Start(save));
                    return None;
                }
            }
        }
        Some(value)
    }

    fn read_hex_escape(&mut self, digits: u8) -> Result<String, SyntaxError> {
        let value = match self.read_hex_digits(digits) {
            Some(v) => v,
            None => {
                let mut found = 0u8;
                while found < digits && self.reader.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.reader.read();
                    found += 1;
                }
                return Err(SyntaxError::WrongHexDigitCount {
                    expected: digits,
                    found,
                });
            }
        };
        if (0xD800..=0xDBFF).contains(&value) {
            let save = self.reader.position();
            let paired = if self.reader.read_one('\\') {
                match self.reader.read_any(&['u', 'x', 'U']) {
                    Some(kind) => {
                        let low_digits = match kind {
                            'u' => 4,
                            'x' => 2,
                            _ => 8,
                        };
                        self.read_hex_digits(low_digits)
                            .filter(|low| (0xDC00..=0xDFFF).contains(low))
                    }
                    None => None,
                }
            } else {
                None
            };
            return match paired {
                Some(low) => {
                    let combined = 0x1_0000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                    Ok(char::from_u32(combined).map_or_else(String::new, |c| c.to_string()))
                }
                None => {
                    self.reader.seek(SeekFrom::Start(save));
                    Err(SyntaxError::UnpairedSurrogateHalf(value))
                }
            };
        }
        if (0xDC00..=0xDFFF).contains(&value) {
            return Err(SyntaxError::UnpairedSurrogateHalf(value));
        }
        match char::from_u32(value) {
            Some(c) => Ok(c.to_string()),
            None => Err(SyntaxError::UnpairedSurrogateHalf(value)),
        }
    }

    fn read_quoteless(
        &mut self,
        seed: String,
        verbatim: bool,
        is_property_name: bool,
    ) -> Result<Token, SyntaxError> {
        let mut buf = seed;
        let mut had_escape = false;
        loop {
            match self.reader.peek() {
                None => break,
                Some(c) if is_newline(c) => break,
                Some('\\') if !verbatim => {
                    self.reader.read();
                    had_escape = true;
                    buf.push_str(&self.read_escape()?);
                }
                Some(c) if is_reserved(c, self.version) && !(verbatim && c == '\\') => break,
                Some(c) => {
                    buf.push(c);
                    self.reader.read();
                }
            }
        }
        let trimmed = buf.trim_matches(|c: char| is_whitespace(c));
        if trimmed.is_empty() {
            return Err(SyntaxError::EmptyQuotelessString);
        }
        if !had_escape && !is_property_name {
            match trimmed {
                "null" => return Ok(Token::with_value(TokenKind::Null, "null".to_string())),
                "true" => return Ok(Token::with_value(TokenKind::TrueBool, "true".to_string())),
                "false" => {
                    return Ok(Token::with_value(TokenKind::FalseBool, "false".to_string()))
                }
                _ => {}
            }
        }
        Ok(Token::with_value(TokenKind::String, trimmed.to_string()))
    }

    /// §4.2.4: lexes a numeric literal, then disambiguates it from a
    /// quoteless string that merely starts with digit-like characters
    /// (`6 ab a`) by peeking past same-line whitespace for a continuation
    /// rune.
    fn read_number_or_quoteless(&mut self) -> Result<Token, SyntaxError> {
        let start = self.reader.position();
        match self.lex_number() {
            Some(text) => self.maybe_continue_as_quoteless(text),
            None => {
                self.reader.seek(SeekFrom::Start(start));
                self.read_quoteless(String::new(), false, false)
            }
        }
    }

    fn maybe_continue_as_quoteless(&mut self, number_text: String) -> Result<Token, SyntaxError> {
        let save = self.reader.position();
        let mut ws_buf = String::new();
        let mut crossed_newline = false;
        loop {
            match self.reader.peek() {
                Some(c) if is_whitespace(c) => {
                    if is_newline(c) {
                        crossed_newline = true;
                    }
                    ws_buf.push(c);
                    self.reader.read();
                }
                _ => break,
            }
        }
        let next = self.reader.peek();
        let continues = !crossed_newline
            && match next {
                Some('\\') => true,
                Some(c) => !is_reserved(c, self.version),
                None => false,
            };
        if continues {
            let mut seed = number_text;
            seed.push_str(&ws_buf);
            self.read_quoteless(seed, false, false)
        } else {
            self.reader.seek(SeekFrom::Start(save));
            Ok(Token::with_value(TokenKind::Number, number_text))
        }
    }

    /// Greedily consumes the characters of one numeric literal. Returns
    /// `None` (consuming nothing) if no mantissa digit is present, so the
    /// caller can fall back to quoteless-string scanning (`-`, `+foo`, a
    /// bare `.`).
    fn lex_number(&mut self) -> Option<String> {
        let start = self.reader.position();
        let mut text = String::new();
        if let Some(sign) = self.reader.read_any(&['+', '-']) {
            text.push(sign);
        }

        let mut base = NumberBase::Decimal;
        if self.reader.peek() == Some('0') {
            let checkpoint = self.reader.position();
            self.reader.read();
            match self.reader.peek() {
                Some(letter @ ('x' | 'X')) => {
                    base = NumberBase::Hex;
                    text.push('0');
                    text.push(letter);
                    self.reader.read();
                }
                Some(letter @ ('b' | 'B')) => {
                    base = NumberBase::Binary;
                    text.push('0');
                    text.push(letter);
                    self.reader.read();
                }
                Some(letter @ ('o' | 'O')) => {
                    base = NumberBase::Octal;
                    text.push('0');
                    text.push(letter);
                    self.reader.read();
                }
                _ => {
                    self.reader.seek(SeekFrom::Start(checkpoint));
                }
            }
        }

        let mantissa_digits = self.lex_digit_run(&mut text, base);

        if let Some(c) = self.reader.peek() {
            if c == 'e' || c == 'E' {
                let is_exponent = if base == NumberBase::Hex {
                    let save = self.reader.position();
                    self.reader.read();
                    let follows_sign = matches!(self.reader.peek(), Some('+' | '-'));
                    self.reader.seek(SeekFrom::Start(save));
                    follows_sign
                } else {
                    true
                };
                if is_exponent {
                    text.push(c);
                    self.reader.read();
                    if let Some(sign) = self.reader.read_any(&['+', '-']) {
                        text.push(sign);
                    }
                    self.lex_digit_run(&mut text, base);
                }
            }
        }

        if mantissa_digits == 0 {
            self.reader.seek(SeekFrom::Start(start));
            return None;
        }
        Some(text)
    }

    /// Consumes digits, `_` separators, and at most one `.` in `base`'s
    /// alphabet, stopping before a hex `e`/`E` that is itself an exponent
    /// marker (followed immediately by `+`/`-`). Returns the count of actual
    /// digit characters consumed (excluding separators and the dot).
    fn lex_digit_run(&mut self, text: &mut String, base: NumberBase) -> usize {
        let mut digit_count = 0usize;
        let mut seen_dot = false;
        loop {
            match self.reader.peek() {
                Some(c) if base.is_digit(c) => {
                    if base == NumberBase::Hex && (c == 'e' || c == 'E') {
                        let save = self.reader.position();
                        self.reader.read();
                        let follows_sign = matches!(self.reader.peek(), Some('+' | '-'));
                        self.reader.seek(SeekFrom::Start(save));
                        if follows_sign {
                            break;
                        }
                    }
                    text.push(c);
                    self.reader.read();
                    digit_count += 1;
                }
                Some('_') => {
                    text.push('_');
                    self.reader.read();
                }
                Some('.') if !seen_dot => {
                    seen_dot = true;
                    text.push('.');
                    self.reader.read();
                }
                _ => break,
            }
        }
        digit_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl NumberBase {
    fn is_digit(self, c: char) -> bool {
        match self {
            NumberBase::Binary => matches!(c, '0' | '1'),
            NumberBase::Octal => matches!(c, '0'..='7'),
            NumberBase::Decimal => c.is_ascii_digit(),
            NumberBase::Hex => c.is_ascii_hexdigit(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = ReaderResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
