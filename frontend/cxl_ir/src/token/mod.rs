//! Token types for C/C++ window tokenization.
//!
//! Tokens are immutable views: a kind plus a byte span into the buffer they
//! were lexed from. Identifier and literal text is recovered through the
//! span; nothing is interned or copied at lexing time.

use crate::Span;
use std::fmt;

/// A token with its span in the source window.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The synthetic end-of-stream sentinel.
    ///
    /// Returned for any out-of-window probe, so backward scans can inspect
    /// `index - 1`, `index - 2`, `index - 3` without bounds checks.
    pub const EOF: Token = Token {
        kind: TokenKind::Eof,
        span: Span::DUMMY,
    };

    #[inline]
    pub const fn is(self, kind: TokenKind) -> bool {
        // `PartialEq::eq` is not callable in const fn; kinds are unit
        // variants, so compare discriminants.
        self.kind as u8 == kind as u8
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Closed enumeration of C/C++ token kinds, as seen by the editor tooling.
///
/// The expression resolver only branches on a handful of these (literals,
/// `this`, `typeid`, the cast keywords, `SIGNAL`/`SLOT`, and punctuation);
/// every other keyword deliberately takes the default "hard boundary"
/// path, but keeping them distinct from `Ident` prevents keyword spellings
/// from being absorbed as member-access names.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    /// End-of-stream sentinel (also padding for out-of-window probes).
    Eof,

    Ident,

    // Literals
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,

    // Keywords the resolver branches on
    This,
    Typeid,
    Throw,
    DynamicCast,
    StaticCast,
    ConstCast,
    ReinterpretCast,
    /// Qt `SIGNAL` pseudo-keyword (recognized under `QT_KEYWORDS`).
    Signal,
    /// Qt `SLOT` pseudo-keyword (recognized under `QT_KEYWORDS`).
    Slot,

    // Remaining C/C++ keywords
    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Delete,
    Do,
    Double,
    Else,
    Enum,
    Explicit,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Operator,
    Private,
    Protected,
    Public,
    Register,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Template,
    True,
    Try,
    Typedef,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    While,

    // C++11 keywords (recognized under `CXX11`)
    Constexpr,
    Decltype,
    Noexcept,
    Nullptr,
    StaticAssert,

    // Punctuation and operators
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Less,
    Greater,
    Comma,
    Semicolon,
    Colon,
    ColonColon,
    Question,
    Dot,
    Arrow,
    DotStar,
    ArrowStar,
    Ellipsis,
    Tilde,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Bang,
    Equal,
    PlusPlus,
    MinusMinus,
    AmpAmp,
    PipePipe,
    EqualEqual,
    BangEqual,
    LessEqual,
    GreaterEqual,
    LessLess,
    GreaterGreater,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    AmpEqual,
    PipeEqual,
    CaretEqual,
    LessLessEqual,
    GreaterGreaterEqual,
    Pound,
    PoundPound,
}

impl TokenKind {
    /// `true` for numeric, character, and string literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
        )
    }

    /// `true` for every punctuation and operator kind.
    ///
    /// The resolver uses this to decide whether a comma-jumped scan may
    /// continue through an operator chain.
    #[inline]
    pub const fn is_punctuation_or_operator(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::ColonColon
                | TokenKind::Question
                | TokenKind::Dot
                | TokenKind::Arrow
                | TokenKind::DotStar
                | TokenKind::ArrowStar
                | TokenKind::Ellipsis
                | TokenKind::Tilde
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Amp
                | TokenKind::Pipe
                | TokenKind::Caret
                | TokenKind::Bang
                | TokenKind::Equal
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
                | TokenKind::AmpAmp
                | TokenKind::PipePipe
                | TokenKind::EqualEqual
                | TokenKind::BangEqual
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::LessLess
                | TokenKind::GreaterGreater
                | TokenKind::PlusEqual
                | TokenKind::MinusEqual
                | TokenKind::StarEqual
                | TokenKind::SlashEqual
                | TokenKind::PercentEqual
                | TokenKind::AmpEqual
                | TokenKind::PipeEqual
                | TokenKind::CaretEqual
                | TokenKind::LessLessEqual
                | TokenKind::GreaterGreaterEqual
                | TokenKind::Pound
                | TokenKind::PoundPound
        )
    }
}
