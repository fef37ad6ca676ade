//! Bounded backward token window over the text preceding a cursor.
//!
//! A window is built fresh for every query and discarded when the query
//! returns. It tokenizes only a bounded slice ending at the cursor (not
//! the whole document), and pads both ends of the token list with the
//! end-of-stream sentinel so the resolver can probe `index - 1`,
//! `index - 2`, `index - 3` freely without bounds checks.

use cxl_ir::{LanguageFeatures, Token, TokenKind};

/// Default window size in bytes. Expressions of interest to completion
/// and parameter hints fit comfortably; anything further back is noise.
pub const DEFAULT_WINDOW_BYTES: usize = 4096;

/// Caller-misuse errors raised when constructing a window.
///
/// Everything past construction is soft-failure: "no match" conditions
/// degrade to sentinel tokens or `None`, never to an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("cursor offset {cursor} is beyond the end of the source ({len} bytes)")]
    CursorOutOfBounds { cursor: usize, len: usize },
    #[error("cursor offset {cursor} is not on a UTF-8 character boundary")]
    CursorNotCharBoundary { cursor: usize },
}

/// A bounded, ordered token sequence ending at a cursor position.
///
/// Indexing is signed: index `0` is the first token in the window and
/// [`start_token()`](Self::start_token) is the logical cursor position
/// (one past the last token). Any index outside the real token list —
/// negative or past the end — yields [`Token::EOF`].
pub struct TokenWindow<'a> {
    tokens: Vec<Token>,
    /// The window slice `source[window_start..cursor]`.
    text: &'a str,
    /// Absolute byte offset of the window start within the document.
    window_start: usize,
}

impl<'a> TokenWindow<'a> {
    /// Build a window over the [`DEFAULT_WINDOW_BYTES`] bytes preceding
    /// `cursor`.
    pub fn new(
        source: &'a str,
        cursor: usize,
        features: LanguageFeatures,
    ) -> Result<Self, WindowError> {
        Self::with_window(source, cursor, features, DEFAULT_WINDOW_BYTES)
    }

    /// Build a window with an explicit byte bound.
    ///
    /// The window start is moved forward to the next character boundary
    /// when the bound would split a multi-byte character. Tokenization of
    /// a slice that begins mid-construct (inside a string or comment) is
    /// best-effort; the bound trades that risk for a hard latency cap.
    pub fn with_window(
        source: &'a str,
        cursor: usize,
        features: LanguageFeatures,
        window_bytes: usize,
    ) -> Result<Self, WindowError> {
        if cursor > source.len() {
            return Err(WindowError::CursorOutOfBounds {
                cursor,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(cursor) {
            return Err(WindowError::CursorNotCharBoundary { cursor });
        }

        let mut window_start = cursor.saturating_sub(window_bytes);
        while !source.is_char_boundary(window_start) {
            window_start += 1;
        }

        let text = &source[window_start..cursor];
        let tokens = cxl_lexer::tokenize(text, features);

        Ok(TokenWindow {
            tokens,
            text,
            window_start,
        })
    }

    /// The token at a signed window index.
    ///
    /// Probing outside the real token list — however far — returns the
    /// end-of-stream sentinel rather than failing. This is the invariant
    /// the resolver's unchecked multi-token lookback depends on.
    pub fn token(&self, index: i32) -> Token {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.tokens.get(i).copied())
            .unwrap_or(Token::EOF)
    }

    /// The logical cursor index: one past the last token in the window.
    pub fn start_token(&self) -> i32 {
        i32::try_from(self.tokens.len()).unwrap_or(i32::MAX)
    }

    /// Absolute document offset of the window start.
    pub fn start_position(&self) -> usize {
        self.window_start
    }

    /// Absolute document offset of the cursor this window ends at.
    pub fn cursor(&self) -> usize {
        self.window_start + self.text.len()
    }

    /// Given the index just after a closing bracket — `token(index - 1)`
    /// must be `)`, `]`, `}`, or a `>` the caller has chosen to read as a
    /// closing angle bracket — scan backward for the matching opener.
    ///
    /// Returns `None` when `token(index - 1)` is not a closer or when the
    /// window is exhausted before the depth returns to zero (no enclosing
    /// opener in the window, or unbalanced code — indistinguishable at
    /// this level).
    ///
    /// The `>` family is a guess: `>` is lexically identical whether it
    /// closes a template argument list or compares two values, and any
    /// `<`/`>` comparison operators in between corrupt the depth count.
    /// Callers decide whether to trust the result.
    pub fn matching_opener(&self, index: i32) -> Option<i32> {
        let (opener, closer) = match self.token(index - 1).kind {
            TokenKind::RParen => (TokenKind::LParen, TokenKind::RParen),
            TokenKind::RBracket => (TokenKind::LBracket, TokenKind::RBracket),
            TokenKind::RBrace => (TokenKind::LBrace, TokenKind::RBrace),
            TokenKind::Greater => (TokenKind::Less, TokenKind::Greater),
            _ => return None,
        };

        let mut depth: i32 = 0;
        let mut i = index - 1;
        loop {
            let kind = self.token(i).kind;
            if kind == TokenKind::Eof {
                return None;
            }
            if kind == opener {
                depth += 1;
                if depth == 0 {
                    return Some(i);
                }
            } else if kind == closer {
                depth -= 1;
            }
            i -= 1;
        }
    }

    /// Raw window text from the start of `token(index)` to the cursor.
    ///
    /// Empty for the sentinel (out-of-window probes).
    pub fn text_from(&self, index: i32) -> &'a str {
        let token = self.token(index);
        if token.kind == TokenKind::Eof {
            return "";
        }
        &self.text[token.span.start as usize..]
    }

    /// The raw text of a single token.
    pub fn token_text(&self, index: i32) -> &'a str {
        let token = self.token(index);
        if token.kind == TokenKind::Eof {
            return "";
        }
        &self.text[token.span.start as usize..token.span.end as usize]
    }
}
