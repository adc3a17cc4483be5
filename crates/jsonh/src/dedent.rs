//! Multi-quoted string dedent.
//!
//! A multi-quoted string (`"""..."""` or longer) whose body starts with a
//! newline (after only whitespace) and ends with a newline (before only
//! whitespace) has that leading and trailing line removed, and has the
//! trailing line's indentation stripped from every remaining line. This
//! lets a multi-line string be indented to match the surrounding source
//! without that indentation becoming part of the value.
//!
//! Implemented as five independent passes over the already-collected string
//! body, each skipped if its corresponding scan did not find what it was
//! looking for.

use alloc::string::String;

use crate::chars::{is_newline, is_whitespace};
use crate::rune_reader::{RuneReader, SeekFrom};

/// Applies the dedent algorithm to a multi-quoted string's raw body.
#[must_use]
pub fn dedent(body: &str) -> String {
    let leading_end = scan_leading_newline(body);
    let (trailing_start, indent) = scan_trailing_newline(body);

    let start = leading_end.unwrap_or(0);
    let end = trailing_start.unwrap_or(body.len());
    let middle = if start <= end { &body[start..end] } else { "" };

    match indent {
        Some(n) if n > 0 => strip_indent(middle, n),
        _ => String::from(middle),
    }
}

/// Pass 1: if the body starts with whitespace up to and including a
/// newline, returns the byte offset just past that newline.
fn scan_leading_newline(body: &str) -> Option<usize> {
    let mut reader = RuneReader::from_str(body);
    loop {
        match reader.peek() {
            Some(c) if is_newline(c) => {
                reader.read();
                if c == '\r' && reader.peek() == Some('\n') {
                    reader.read();
                }
                return Some(reader.position());
            }
            Some(c) if is_whitespace(c) => {
                reader.read();
            }
            _ => return None,
        }
    }
}

/// Pass 2: if the body ends with whitespace preceded by a newline, returns
/// the byte offset of that newline's start and the count of whitespace
/// runes found after it (the indentation to strip in pass 5).
fn scan_trailing_newline(body: &str) -> (Option<usize>, Option<usize>) {
    let mut reader = RuneReader::from_str(body);
    reader.seek(SeekFrom::End(0));
    let mut trailing_runes = 0usize;
    loop {
        match reader.peek_reverse() {
            Some(c) if is_newline(c) => {
                reader.read_reverse();
                if c == '\n' && reader.peek_reverse() == Some('\r') {
                    reader.read_reverse();
                }
                return (Some(reader.position()), Some(trailing_runes));
            }
            Some(c) if is_whitespace(c) => {
                reader.read_reverse();
                trailing_runes += 1;
            }
            _ => return (None, None),
        }
    }
}

/// Pass 5: strips up to `n` leading whitespace runes from every line
/// (the start of `text`, and immediately after every embedded newline).
fn strip_indent(text: &str, n: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_line_start = true;
    let mut stripped_this_line = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if at_line_start && stripped_this_line < n && is_whitespace(c) && !is_newline(c) {
            stripped_this_line += 1;
            continue;
        }
        at_line_start = false;
        out.push(c);
        if c == '\r' && chars.peek() == Some(&'\n') {
            out.push(chars.next().unwrap());
        }
        if is_newline(c) {
            at_line_start = true;
            stripped_this_line = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::dedent;

    #[test]
    fn strips_matching_leading_and_trailing_lines() {
        let body = "\n  hello\n  world\n  ";
        assert_eq!(dedent(body), "hello\nworld");
    }

    #[test]
    fn no_op_without_leading_newline() {
        let body = "hello\n  ";
        assert_eq!(dedent(body), "hello");
    }

    #[test]
    fn no_op_when_nothing_matches() {
        let body = "hello world";
        assert_eq!(dedent(body), "hello world");
    }

    #[test]
    fn preserves_extra_indentation_beyond_the_marker() {
        let body = "\n    a\n      b\n    ";
        assert_eq!(dedent(body), "a\n  b");
    }
}
