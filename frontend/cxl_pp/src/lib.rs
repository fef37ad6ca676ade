//! Character-level scanners for preprocessor text.
//!
//! These run directly on raw macro-expansion text, before (and independent
//! of) token-level analysis. Each scanner advances a position across a
//! byte range according to one lexical rule and reports exactly how many
//! newlines it crossed, so callers can keep a running line counter without
//! rescanning.
//!
//! Failure is always soft: reaching end-of-input mid-construct means the
//! construct extends to the end of the scanned range. The scanners
//! themselves neither panic nor allocate.

pub mod args;
pub mod chars;
pub mod skip;

pub use args::split_arguments;
pub use skip::{
    skip_argument, skip_blanks, skip_char_literal, skip_comment_or_divop, skip_identifier,
    skip_number, skip_string_literal, skip_whitespace, Scan,
};
