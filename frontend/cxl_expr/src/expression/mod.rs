//! Backward expression-boundary resolution.
//!
//! The resolver answers "where does the expression ending at the cursor
//! begin?" by classifying tokens strictly backward from the cursor. It
//! absorbs exactly the constructs that form a postfix-expression tail —
//! member access, scope resolution, bracket groups, template-looking
//! angle groups — and stops at the first token that cannot belong to
//! one. Everything is heuristic: without a parse tree a `>` is
//! ambiguous, so angle groups are probed speculatively and trusted only
//! when the surrounding tokens look like a template-id.

use cxl_ir::{LanguageFeatures, TokenKind};
use tracing::trace;

use crate::token_window::{TokenWindow, WindowError};

/// Per-query scan state threaded through the recursion.
///
/// A `SIGNAL(...)`/`SLOT(...)` argument preceded by a comma jumps the
/// scan over that comma once, so `connect(obj, SIGNAL(...)` resolves to
/// the receiver expression and not just the macro. The flag caps the
/// jump at one comma per query.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ScanState {
    jumped_comma: bool,
}

/// Resolves expression boundaries and enclosing call openers for a
/// cursor position.
///
/// Construction is free; the value only carries the language dialect.
/// Every query builds its own [`TokenWindow`] and its own scan state,
/// so one instance can serve concurrent queries.
pub struct ExpressionUnderCursor {
    features: LanguageFeatures,
}

impl ExpressionUnderCursor {
    pub fn new(features: LanguageFeatures) -> Self {
        ExpressionUnderCursor { features }
    }

    /// The text of the expression ending at `cursor`, or `None` when no
    /// token before the cursor can start one.
    pub fn expression_at(
        &self,
        source: &str,
        cursor: usize,
    ) -> Result<Option<String>, WindowError> {
        let tk = TokenWindow::new(source, cursor, self.features)?;
        let start = tk.start_token();

        let mut state = ScanState::default();
        let boundary = self.start_of_expression(&tk, start, &mut state);
        trace!(cursor, boundary, "expression boundary resolved");

        if boundary == start {
            return Ok(None);
        }
        Ok(Some(tk.text_from(boundary).to_owned()))
    }

    /// Absolute byte offset of the `(` or `{` that opens the innermost
    /// unbalanced group enclosing `cursor`, for parameter hints.
    ///
    /// Balanced groups between the cursor and the opener are skipped
    /// whole; `None` when every group before the cursor is balanced or
    /// a closer has no opener in the window.
    pub fn start_of_function_call(
        &self,
        source: &str,
        cursor: usize,
    ) -> Result<Option<usize>, WindowError> {
        let tk = TokenWindow::new(source, cursor, self.features)?;
        let mut index = tk.start_token();

        loop {
            let token = tk.token(index - 1);
            match token.kind {
                TokenKind::Eof => {
                    trace!(cursor, "no enclosing call opener");
                    return Ok(None);
                }
                TokenKind::LParen | TokenKind::LBrace => {
                    let offset = tk.start_position() + token.span.start as usize;
                    trace!(cursor, offset, "enclosing call opener resolved");
                    return Ok(Some(offset));
                }
                TokenKind::RParen | TokenKind::RBrace => match tk.matching_opener(index) {
                    Some(open) => index = open,
                    None => return Ok(None),
                },
                _ => index -= 1,
            }
        }
    }

    /// Window-index form of the boundary scan: the index of the first
    /// token of the expression ending just before `index`.
    ///
    /// Returns `index` itself when no expression ends there.
    fn start_of_expression(
        &self,
        tk: &TokenWindow<'_>,
        mut index: i32,
        state: &mut ScanState,
    ) -> i32 {
        // Speculative angle probe: when a `>` closes a balanced angle
        // group headed by an identifier, read the whole group as a
        // template-id and rewind past it before classifying.
        if tk.token(index - 1).is(TokenKind::Greater) {
            if let Some(less) = tk.matching_opener(index) {
                if tk.token(less - 1).is(TokenKind::Ident) {
                    index = less - 1;
                }
            }
        }

        index = self.start_of_expression_helper(tk, index, state);

        if state.jumped_comma {
            // Past the jumped comma the scan may have stopped inside a
            // larger expression; re-enter unless the stop token is a
            // hard separator.
            let kind = tk.token(index - 1).kind;
            match kind {
                TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::Question => {}
                _ if kind.is_punctuation_or_operator() => {
                    return self.start_of_expression(tk, index - 1, state);
                }
                _ => {}
            }
        }

        index
    }

    fn start_of_expression_helper(
        &self,
        tk: &TokenWindow<'_>,
        index: i32,
        state: &mut ScanState,
    ) -> i32 {
        let prev = tk.token(index - 1).kind;

        if prev.is_literal() {
            return index - 1;
        }

        match prev {
            TokenKind::This | TokenKind::Typeid => index - 1,

            TokenKind::Signal | TokenKind::Slot => {
                if tk.token(index - 2).is(TokenKind::Comma) && !state.jumped_comma {
                    state.jumped_comma = true;
                    return self.start_of_expression(tk, index - 2, state);
                }
                index - 1
            }

            TokenKind::Ident => match tk.token(index - 2).kind {
                TokenKind::Tilde => {
                    // destructor name: `x.~T`, `p->~T`, `N::~T`
                    let three = tk.token(index - 3).kind;
                    if matches!(
                        three,
                        TokenKind::ColonColon | TokenKind::Dot | TokenKind::Arrow
                    ) {
                        return self.start_of_expression(tk, index - 3, state);
                    }
                    index - 2
                }
                TokenKind::ColonColon => self.start_of_expression(tk, index - 1, state),
                TokenKind::Dot | TokenKind::Arrow | TokenKind::DotStar | TokenKind::ArrowStar => {
                    self.start_of_expression(tk, index - 2, state)
                }
                // subscript in progress: `array[i` — the index alone
                TokenKind::LBracket => index - 1,
                // `cond ? expr : id` or `[receiver param:id` — in both
                // cases only the id is the expression under the cursor
                TokenKind::Colon => index - 1,
                _ => {
                    if let Some(receiver) = self.objc_message_receiver(tk, index) {
                        return receiver;
                    }
                    index - 1
                }
            },

            TokenKind::RParen => {
                let Some(open) = tk.matching_opener(index) else {
                    return index;
                };
                match tk.token(open - 1).kind {
                    TokenKind::Greater => {
                        // `name<...>(...)` — a cast or a template-id call
                        if let Some(less) = tk.matching_opener(open) {
                            match tk.token(less - 1).kind {
                                TokenKind::DynamicCast
                                | TokenKind::StaticCast
                                | TokenKind::ConstCast
                                | TokenKind::ReinterpretCast => return less - 1,
                                TokenKind::Ident | TokenKind::Signal | TokenKind::Slot => {
                                    return self.start_of_expression(tk, less, state);
                                }
                                _ => {}
                            }
                        }
                    }
                    TokenKind::RBrace => {
                        // immediately invoked lambda: `[...](...){ } (`
                        if let Some(lbrace) = tk.matching_opener(open) {
                            if let Some(start) = lambda_introducer_start(tk, lbrace) {
                                return start;
                            }
                        }
                    }
                    _ => {}
                }
                self.start_of_expression(tk, open, state)
            }

            TokenKind::RBracket => match tk.matching_opener(index) {
                Some(open) => self.start_of_expression(tk, open, state),
                None => index,
            },

            TokenKind::ColonColon => match tk.token(index - 2).kind {
                // `name<...>::` — trust the angle group as a template-id
                TokenKind::Greater => match tk.matching_opener(index - 1) {
                    Some(less) => self.start_of_expression(tk, less, state),
                    None => index - 1,
                },
                TokenKind::Ident => self.start_of_expression(tk, index - 1, state),
                _ => index - 1,
            },

            TokenKind::Dot | TokenKind::Arrow | TokenKind::DotStar | TokenKind::ArrowStar => {
                self.start_of_expression(tk, index - 1, state)
            }

            _ => index,
        }
    }

    /// Objective-C message-send absorption: at `[receiver message` the
    /// whole bracketed send (so far) is the expression, starting at the
    /// `[`. Only fires when the dialect enables Objective-C.
    fn objc_message_receiver(&self, tk: &TokenWindow<'_>, index: i32) -> Option<i32> {
        if !self.features.contains(LanguageFeatures::OBJC) {
            return None;
        }
        if tk.token(index - 2).is(TokenKind::Ident) && tk.token(index - 3).is(TokenKind::LBracket) {
            return Some(index - 3);
        }
        None
    }
}

/// Walks backward from a lambda body's `{` looking for the capture
/// list, skipping a `throw(...)` exception specifier on the way.
///
/// Returns the capture list's `[` index; when a closer on the way has
/// no opener in the window, returns the position reached (the caller
/// cannot do better). `None` when the walk exhausts the window without
/// finding a capture list.
fn lambda_introducer_start(tk: &TokenWindow<'_>, lbrace: i32) -> Option<i32> {
    let mut current = lbrace;
    while current >= 0 {
        let prev = tk.token(current - 1).kind;
        if prev == TokenKind::RParen {
            if let Some(lparen) = tk.matching_opener(current) {
                if tk.token(lparen - 1).is(TokenKind::Throw) {
                    current = lparen - 1;
                    continue;
                }
                if tk.token(lparen - 1).is(TokenKind::RBracket) {
                    return Some(tk.matching_opener(lparen).unwrap_or(lparen));
                }
            }
        } else if prev == TokenKind::RBracket {
            return Some(tk.matching_opener(current).unwrap_or(current));
        }
        current -= 1;
    }
    None
}

#[cfg(test)]
mod tests;
