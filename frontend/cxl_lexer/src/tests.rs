use crate::tokenize;
use cxl_ir::{LanguageFeatures, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, LanguageFeatures::all())
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn empty_source_yields_no_tokens() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("   \t\n  "), vec![]);
}

#[test]
fn identifiers_and_keywords() {
    assert_eq!(
        kinds("this foo static_cast bar"),
        vec![
            TokenKind::This,
            TokenKind::Ident,
            TokenKind::StaticCast,
            TokenKind::Ident
        ]
    );
}

#[test]
fn maximal_munch_on_operators() {
    assert_eq!(
        kinds("a->*b->c.*d...e"),
        vec![
            TokenKind::Ident,
            TokenKind::ArrowStar,
            TokenKind::Ident,
            TokenKind::Arrow,
            TokenKind::Ident,
            TokenKind::DotStar,
            TokenKind::Ident,
            TokenKind::Ellipsis,
            TokenKind::Ident,
        ]
    );
    assert_eq!(
        kinds("a <<= b >> c"),
        vec![
            TokenKind::Ident,
            TokenKind::LessLessEqual,
            TokenKind::Ident,
            TokenKind::GreaterGreater,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn scope_resolution_vs_colon() {
    assert_eq!(
        kinds("a::b ? c : d"),
        vec![
            TokenKind::Ident,
            TokenKind::ColonColon,
            TokenKind::Ident,
            TokenKind::Question,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn literal_classification() {
    assert_eq!(kinds("42"), vec![TokenKind::IntLiteral]);
    assert_eq!(kinds("0xFFul"), vec![TokenKind::IntLiteral]);
    assert_eq!(kinds("3.14"), vec![TokenKind::FloatLiteral]);
    assert_eq!(kinds("1e10"), vec![TokenKind::FloatLiteral]);
    assert_eq!(kinds(".5f"), vec![TokenKind::FloatLiteral]);
    assert_eq!(kinds("'a'"), vec![TokenKind::CharLiteral]);
    assert_eq!(kinds("\"hi\""), vec![TokenKind::StringLiteral]);
}

#[test]
fn encoding_prefixed_literals() {
    assert_eq!(kinds("L\"wide\""), vec![TokenKind::StringLiteral]);
    assert_eq!(kinds("u8\"text\""), vec![TokenKind::StringLiteral]);
    assert_eq!(kinds("L'x'"), vec![TokenKind::CharLiteral]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("a // line\nb /* block\nstill */ c"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident]
    );
}

#[test]
fn unrecognized_bytes_are_skipped() {
    // `@` and a stray backslash are not C++ tokens; the scan continues.
    assert_eq!(
        kinds("a @ b \\ c"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident]
    );
}

#[test]
fn spans_are_window_relative() {
    let tokens = tokenize("ab + cd", LanguageFeatures::default());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].span, cxl_ir::Span::new(0, 2));
    assert_eq!(tokens[1].span, cxl_ir::Span::new(3, 4));
    assert_eq!(tokens[2].span, cxl_ir::Span::new(5, 7));
}

#[test]
fn qt_keywords_only_with_feature() {
    let qt = tokenize("SIGNAL", LanguageFeatures::QT_KEYWORDS);
    assert_eq!(qt[0].kind, TokenKind::Signal);
    let plain = tokenize("SIGNAL", LanguageFeatures::default());
    assert_eq!(plain[0].kind, TokenKind::Ident);
}

#[test]
fn call_expression_token_stream() {
    assert_eq!(
        kinds("foo(bar, baz)"),
        vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RParen,
        ]
    );
}
