//! Expression-boundary resolution for C/C++ editor queries.
//!
//! Given a cursor position in source text, this crate answers two
//! questions the editor's completion and parameter-hint features ask:
//!
//! - *where does the expression ending at the cursor begin?*
//!   ([`ExpressionUnderCursor::expression_at`])
//! - *where does the innermost enclosing call or initializer open?*
//!   ([`ExpressionUnderCursor::start_of_function_call`])
//!
//! Both are answered by scanning strictly backward over a bounded,
//! sentinel-padded token window — no parsing, no symbol table. The
//! results are best-effort by design: C++ cannot be disambiguated
//! without a full parser (a `>` may close a template argument list or
//! compare two numbers), and for an interactive suggestion feature a
//! wrong or missing answer is far cheaper than a stall.

mod expression;
mod token_window;

pub use expression::ExpressionUnderCursor;
pub use token_window::{TokenWindow, WindowError, DEFAULT_WINDOW_BYTES};
