//! ASCII character classifiers.
//!
//! Classic `<ctype.h>` "C locale" semantics, but explicitly
//! locale-independent so preprocessing behaves identically everywhere.
//! Non-ASCII bytes classify as nothing.

/// Space, `\t`, `\n`, `\v`, `\f`, or `\r`.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// ASCII letter.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII letter or digit.
#[inline]
pub const fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}
