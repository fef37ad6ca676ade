//! Depth-zero splitting of macro-call argument lists.

use crate::skip::skip_argument;

/// Split `text` into macro-call arguments at depth-zero commas.
///
/// Commas nested inside balanced parentheses or inside string/char
/// literals do not split. No whitespace trimming is performed — the
/// caller sees each argument exactly as written. Empty input yields an
/// empty vector; an empty argument between two delimiters yields an
/// empty slice.
///
/// Splitting stops at a depth-zero `)` (the end of the call) or at the
/// end of the text, whichever comes first.
pub fn split_arguments(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut args = Vec::new();

    if bytes.is_empty() {
        return args;
    }

    let mut pos = 0;
    loop {
        let scan = skip_argument(bytes, pos);
        // skip_argument only stops at ASCII delimiters or end-of-range, so
        // `scan.pos` always lands on a UTF-8 character boundary.
        args.push(&text[pos..scan.pos]);
        if scan.pos < bytes.len() && bytes[scan.pos] == b',' {
            pos = scan.pos + 1;
        } else {
            break;
        }
    }

    args
}
