//! Bounded-window C/C++ tokenizer.
//!
//! Tokenizes a slice of source text — typically the bounded window ending
//! at an editor cursor — into [`Token`]s with window-relative spans.
//! Comments and whitespace never appear in the output; unrecognizable
//! byte sequences are skipped. The tokenizer is best-effort by design:
//! it may be handed text that starts mid-construct, and a wrong token
//! near the window edge costs at most a wrong suggestion, never an error.

use cxl_ir::{LanguageFeatures, Span, Token};
use logos::Logos;

mod convert;
mod keywords;
mod raw_token;

use convert::convert_token;
use raw_token::RawToken;

/// Tokenize `source` into a flat token list with spans relative to
/// `source`. Keyword recognition is controlled by `features`.
pub fn tokenize(source: &str, features: LanguageFeatures) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Lex errors (stray bytes, unterminated literals) are skipped:
        // the window may begin mid-construct and the scan must go on.
        let Ok(raw) = result else { continue };
        let range = lexer.span();
        let kind = convert_token(raw, &source[range.clone()], features);
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        tokens.push(Token::new(kind, Span::new(start, end)));
    }

    tokens
}

#[cfg(test)]
mod tests;
