//! Raw token to `TokenKind` conversion.

use cxl_ir::{LanguageFeatures, TokenKind};

use crate::keywords;
use crate::raw_token::RawToken;

/// Convert a raw token to its final kind, resolving keywords.
pub(crate) fn convert_token(raw: RawToken, text: &str, features: LanguageFeatures) -> TokenKind {
    match raw {
        RawToken::Ident => keywords::lookup(text, features).unwrap_or(TokenKind::Ident),
        RawToken::Number => classify_number(text),
        RawToken::DotNumber => TokenKind::FloatLiteral,
        RawToken::StringLit => TokenKind::StringLiteral,
        RawToken::CharLit => TokenKind::CharLiteral,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::ColonColon => TokenKind::ColonColon,
        RawToken::Question => TokenKind::Question,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::DotStar => TokenKind::DotStar,
        RawToken::ArrowStar => TokenKind::ArrowStar,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Equal => TokenKind::Equal,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::LessLess => TokenKind::LessLess,
        RawToken::GreaterGreater => TokenKind::GreaterGreater,
        RawToken::PlusEqual => TokenKind::PlusEqual,
        RawToken::MinusEqual => TokenKind::MinusEqual,
        RawToken::StarEqual => TokenKind::StarEqual,
        RawToken::SlashEqual => TokenKind::SlashEqual,
        RawToken::PercentEqual => TokenKind::PercentEqual,
        RawToken::AmpEqual => TokenKind::AmpEqual,
        RawToken::PipeEqual => TokenKind::PipeEqual,
        RawToken::CaretEqual => TokenKind::CaretEqual,
        RawToken::LessLessEqual => TokenKind::LessLessEqual,
        RawToken::GreaterGreaterEqual => TokenKind::GreaterGreaterEqual,
        RawToken::Pound => TokenKind::Pound,
        RawToken::PoundPound => TokenKind::PoundPound,
    }
}

/// Distinguish integer from floating literals within the permissive
/// pp-number span. Hex literals are always integers (`0xE` is not an
/// exponent); otherwise a dot or exponent marker means float.
fn classify_number(text: &str) -> TokenKind {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        return TokenKind::IntLiteral;
    }
    if bytes
        .iter()
        .any(|&b| b == b'.' || b == b'e' || b == b'E')
    {
        return TokenKind::FloatLiteral;
    }
    TokenKind::IntLiteral
}
