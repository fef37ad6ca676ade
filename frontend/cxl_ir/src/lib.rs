//! Shared value types for the cxlex lexical front-end.
//!
//! This crate is deliberately dependency-light so that external tools
//! (highlighters, completion engines) can consume tokens without pulling
//! in the lexer or the resolver.

mod features;
mod span;
mod token;

pub use features::LanguageFeatures;
pub use span::Span;
pub use token::{Token, TokenKind};
