//! Raw token shapes, derived with logos.
//!
//! Keywords are not resolved here — every keyword spelling lexes as
//! `Ident` and is classified afterwards by the length-bucketed lookup in
//! [`crate::keywords`], because the keyword set depends on the per-query
//! `LanguageFeatures` value and logos patterns are fixed at compile time.

use logos::Logos;

/// Raw token from logos (before keyword resolution).
///
/// Whitespace, line comments, and balanced block comments are skipped.
/// Anything logos cannot match (stray backslashes, non-ASCII bytes,
/// unterminated literals) produces an error the integration layer skips:
/// window tokenization is best-effort, never fatal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub(crate) enum RawToken {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// Permissive pp-number: a maximal digit-led alnum/underscore/dot run.
    /// Numeric grammar is not validated; the resolver only needs to know
    /// "this is one literal token".
    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    /// Leading-dot float such as `.5f`.
    #[regex(r"\.[0-9][0-9a-zA-Z_]*")]
    DotNumber,

    /// String literal with optional encoding prefix.
    #[regex(r#"(u8|u|U|L)?"([^"\\\n]|\\.)*""#)]
    StringLit,

    /// Character literal with optional encoding prefix.
    #[regex(r"(u8|u|U|L)?'([^'\\\n]|\\.)*'")]
    CharLit,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,
    #[token(".*")]
    DotStar,
    #[token("->*")]
    ArrowStar,
    #[token("...")]
    Ellipsis,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("=")]
    Equal,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<<")]
    LessLess,
    #[token(">>")]
    GreaterGreater,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("&=")]
    AmpEqual,
    #[token("|=")]
    PipeEqual,
    #[token("^=")]
    CaretEqual,
    #[token("<<=")]
    LessLessEqual,
    #[token(">>=")]
    GreaterGreaterEqual,
    #[token("#")]
    Pound,
    #[token("##")]
    PoundPound,
}
