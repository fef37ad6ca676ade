//! The scanner family: one function per lexical rule.
//!
//! Every scanner has the shape `fn(text, from) -> Scan`: it inspects
//! `text[from..]`, consumes the longest prefix its rule allows, and
//! returns the new position together with the number of `\n` bytes in
//! the consumed range.
//!
//! # Newline accounting
//!
//! For every scanner, `newlines` equals the exact count of `\n` bytes in
//! `[from, pos)`. This holds on the fail-closed paths too: when a string
//! or character literal hits a raw newline, the scanner consumes to the
//! end of the range and counts the remaining newlines before returning,
//! so the caller's running line counter stays correct.

use crate::chars::{is_alnum, is_alpha, is_digit, is_space};

/// Result of one scanner invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scan {
    /// Position after the consumed prefix (an index into the scanned text).
    pub pos: usize,
    /// Number of `\n` bytes in the consumed range.
    pub newlines: u32,
}

/// Count the `\n` bytes in `text[from..]` with a SIMD-accelerated search.
///
/// Used by the fail-closed literal paths, which consume to end-of-range.
fn count_remaining_newlines(text: &[u8], from: usize) -> u32 {
    let mut count = 0u32;
    for _ in memchr::memchr_iter(b'\n', &text[from..]) {
        count += 1;
    }
    count
}

/// Consume spaces and tabs, honoring backslash-newline line splicing.
///
/// A `\` immediately followed by `\n` is consumed as a continuation (the
/// newline counts toward `newlines`); a bare `\n` is not consumed — it
/// terminates the blank run, as does any other non-blank byte.
pub fn skip_blanks(text: &[u8], from: usize) -> Scan {
    let mut pos = from;
    let mut newlines = 0;

    while pos < text.len() {
        match text[pos] {
            b'\\' if pos + 1 < text.len() && text[pos + 1] == b'\n' => {
                pos += 2;
                newlines += 1;
            }
            b'\n' | b'\\' => break,
            b if is_space(b) => pos += 1,
            _ => break,
        }
    }

    Scan { pos, newlines }
}

/// Consume any whitespace run, including newlines. No splicing logic.
pub fn skip_whitespace(text: &[u8], from: usize) -> Scan {
    let mut pos = from;
    let mut newlines = 0;

    while pos < text.len() && is_space(text[pos]) {
        if text[pos] == b'\n' {
            newlines += 1;
        }
        pos += 1;
    }

    Scan { pos, newlines }
}

/// States of the comment-or-division-operator machine.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CommentState {
    MaybeBegin,
    Begin,
    InComment,
    InCxxComment,
    MaybeEnd,
    End,
}

/// Given a position at a `/`, consume a block comment (`/* ... */`), a line
/// comment (`// ...`, the terminating `\n` not consumed), or just the bare
/// operator (a single `/` not followed by `*` or `/`).
///
/// Unterminated block comments consume to the end of the range.
pub fn skip_comment_or_divop(text: &[u8], from: usize) -> Scan {
    let mut state = CommentState::MaybeBegin;
    let mut pos = from;
    let mut newlines = 0;

    while pos < text.len() {
        let b = text[pos];
        match state {
            CommentState::MaybeBegin => {
                if b != b'/' {
                    return Scan { pos, newlines };
                }
                state = CommentState::Begin;
            }
            CommentState::Begin => match b {
                b'*' => state = CommentState::InComment,
                b'/' => state = CommentState::InCxxComment,
                _ => return Scan { pos, newlines },
            },
            CommentState::InComment => {
                if b == b'*' {
                    state = CommentState::MaybeEnd;
                }
            }
            CommentState::InCxxComment => {
                // A line comment body contains no newline; jump straight to
                // the terminator (or end of range) instead of stepping.
                let end = memchr::memchr(b'\n', &text[pos..]).map_or(text.len(), |o| pos + o);
                return Scan { pos: end, newlines };
            }
            CommentState::MaybeEnd => {
                if b == b'/' {
                    state = CommentState::End;
                } else if b != b'*' {
                    state = CommentState::InComment;
                }
            }
            CommentState::End => return Scan { pos, newlines },
        }
        if b == b'\n' {
            newlines += 1;
        }
        pos += 1;
    }

    Scan { pos, newlines }
}

/// Consume an alnum/underscore run.
pub fn skip_identifier(text: &[u8], from: usize) -> Scan {
    let mut pos = from;
    while pos < text.len() && (is_alnum(text[pos]) || text[pos] == b'_') {
        pos += 1;
    }
    Scan { pos, newlines: 0 }
}

/// Consume an alnum/underscore/`.` run.
///
/// Deliberately permissive: this grabs a maximal pp-number-like span for
/// the argument splitter; it does not validate numeric grammar.
pub fn skip_number(text: &[u8], from: usize) -> Scan {
    let mut pos = from;
    while pos < text.len() && (is_alnum(text[pos]) || text[pos] == b'.' || text[pos] == b'_') {
        pos += 1;
    }
    Scan { pos, newlines: 0 }
}

/// States shared by the string and character literal machines.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LiteralState {
    Begin,
    InLiteral,
    Quote,
    End,
}

fn skip_quoted_literal(text: &[u8], from: usize, quote: u8) -> Scan {
    let mut state = LiteralState::Begin;
    let mut pos = from;
    let mut newlines = 0;

    while pos < text.len() {
        let b = text[pos];
        match state {
            LiteralState::Begin => {
                if b != quote {
                    return Scan { pos, newlines };
                }
                state = LiteralState::InLiteral;
            }
            LiteralState::InLiteral => {
                if b == b'\n' {
                    // Raw newline inside the literal: fail closed, consuming
                    // to the end of the range so the scan cannot leak past
                    // the intended buffer. Keep the line count exact.
                    return Scan {
                        pos: text.len(),
                        newlines: newlines + count_remaining_newlines(text, pos),
                    };
                }
                if b == quote {
                    state = LiteralState::End;
                } else if b == b'\\' {
                    state = LiteralState::Quote;
                }
            }
            // The backslash escapes exactly one following character,
            // whatever it is — including the quote and a newline.
            LiteralState::Quote => state = LiteralState::InLiteral,
            LiteralState::End => return Scan { pos, newlines },
        }
        if b == b'\n' {
            newlines += 1;
        }
        pos += 1;
    }

    Scan { pos, newlines }
}

/// Consume a `"..."` string literal starting at `from`.
///
/// Non-match (no opening quote) returns `from` unchanged. A raw newline
/// inside the literal fails closed: the scan consumes to end-of-range.
pub fn skip_string_literal(text: &[u8], from: usize) -> Scan {
    skip_quoted_literal(text, from, b'"')
}

/// Consume a `'...'` character literal. Same machine shape as
/// [`skip_string_literal`], using `'` as the delimiter.
pub fn skip_char_literal(text: &[u8], from: usize) -> Scan {
    skip_quoted_literal(text, from, b'\'')
}

/// Consume one macro-call argument: everything up to (not including) the
/// next depth-zero `,` or `)`.
///
/// `(`/`)` adjust the nesting depth, so commas inside balanced parentheses
/// do not terminate the argument. String/char literals, comments,
/// identifiers, and numbers are delegated to their dedicated scanners, so
/// delimiters inside them are never misread. Sub-scanner newline counts
/// accumulate into this scanner's total.
pub fn skip_argument(text: &[u8], from: usize) -> Scan {
    let mut depth = 0i32;
    let mut pos = from;
    let mut newlines = 0;

    while pos < text.len() {
        let b = text[pos];
        if depth == 0 && (b == b')' || b == b',') {
            break;
        }
        match b {
            b'(' => {
                depth += 1;
                pos += 1;
            }
            b')' => {
                depth -= 1;
                pos += 1;
            }
            b'"' => {
                let scan = skip_string_literal(text, pos);
                pos = scan.pos;
                newlines += scan.newlines;
            }
            b'\'' => {
                let scan = skip_char_literal(text, pos);
                pos = scan.pos;
                newlines += scan.newlines;
            }
            b'/' => {
                let scan = skip_comment_or_divop(text, pos);
                pos = scan.pos;
                newlines += scan.newlines;
            }
            b'\n' => {
                pos += 1;
                newlines += 1;
            }
            b if is_alpha(b) || b == b'_' => {
                let scan = skip_identifier(text, pos);
                pos = scan.pos;
            }
            b if is_digit(b) => {
                let scan = skip_number(text, pos);
                pos = scan.pos;
            }
            _ => pos += 1,
        }
    }

    Scan { pos, newlines }
}
